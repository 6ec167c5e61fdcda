// ============================
// staffdir-backend-lib/src/auth/store.rs
// ============================
//! In-memory credential store keyed by username.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use scrypt::Params;

use crate::auth::password::{hash_password, reference_hash, verify_password};
use crate::auth::service::CredentialService;
use crate::error::AppError;

/// Public view of a stored credential. Carries no hash material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub role: String,
}

/// Internal record; the hash never leaves this module.
#[derive(Debug, Clone)]
struct StoredCredential {
    password_hash: String,
    role: String,
}

/// Concurrent credential store.
///
/// Reads take no lock beyond DashMap's sharding; registration uses the
/// atomic entry API, so concurrent `register` calls for the same username
/// cannot race into duplicates.
pub struct CredentialStore {
    records: DashMap<String, StoredCredential>,
    params: Params,
    /// Hash verified against when a username is unknown, so the miss path
    /// is not observably faster than a wrong password.
    dummy_hash: String,
}

impl CredentialStore {
    /// Create a store with the given scrypt cost parameters.
    pub fn with_params(params: Params) -> anyhow::Result<Self> {
        let dummy_hash = reference_hash(params)?;
        Ok(Self {
            records: DashMap::new(),
            params,
            dummy_hash,
        })
    }

    /// Number of registered credentials
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialService for CredentialStore {
    fn register(
        &self,
        username: &str,
        plain: &str,
        role: &str,
    ) -> Result<CredentialRecord, AppError> {
        if username.is_empty() {
            return Err(AppError::InvalidInput(
                "username must not be empty".to_string(),
            ));
        }
        if plain.is_empty() {
            return Err(AppError::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }

        // Hash before taking the entry so the shard lock is not held for the
        // duration of the scrypt computation.
        let password_hash =
            hash_password(plain, self.params).map_err(|e| AppError::Internal(e.to_string()))?;

        match self.records.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AppError::DuplicateUsername(username.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(StoredCredential {
                    password_hash,
                    role: role.to_string(),
                });
                tracing::info!(username, role, "credential registered");
                Ok(CredentialRecord {
                    username: username.to_string(),
                    role: role.to_string(),
                })
            }
        }
    }

    fn verify(&self, username: &str, plain: &str) -> bool {
        // Clone the hash out of the shard guard so the scrypt work happens
        // without holding the map reference.
        let hash = match self.records.get(username) {
            Some(record) => record.password_hash.clone(),
            None => {
                // Unknown username: burn the same work against the reference
                // hash before answering.
                let _ = verify_password(&self.dummy_hash, plain);
                return false;
            }
        };

        verify_password(&hash, plain)
    }

    fn lookup(&self, username: &str) -> Option<CredentialRecord> {
        self.records.get(username).map(|record| CredentialRecord {
            username: username.to_string(),
            role: record.role.clone(),
        })
    }
}
