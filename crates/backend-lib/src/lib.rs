// ============================
// staffdir-backend-lib/src/lib.rs
// ============================
//! Core library for the staffdir employee directory server.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod router;

use std::sync::Arc;

use zeroize::Zeroize;

use crate::auth::{CredentialService, CredentialStore};
use crate::config::Settings;
use crate::error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState<D> {
    /// Credential store and verifier
    pub auth: Arc<dyn CredentialService>,
    /// Settings (seed credentials are removed during construction)
    pub settings: Arc<Settings>,
    /// Directory backend
    pub directory: D,
}

impl<D> AppState<D> {
    /// Create the application state and register the bootstrap credentials.
    ///
    /// Configuration is the sole writer of the credential set; each seed
    /// password is hashed with a fresh salt and the plaintext is zeroized as
    /// soon as its record is stored. A duplicate username in the seed list
    /// fails construction, so the caller can abort startup.
    pub fn new(directory: D, mut config: Settings) -> Result<Self, AppError> {
        let store = CredentialStore::with_params(config.hashing.params()?)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        for mut seed in config.users.drain(..) {
            store.register(&seed.username, &seed.password, &seed.role)?;
            seed.password.zeroize();
        }

        Ok(Self {
            auth: Arc::new(store),
            settings: Arc::new(config),
            directory,
        })
    }
}
