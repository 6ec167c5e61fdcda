use crate::auth::store::CredentialRecord;
use crate::error::AppError;

/// Credential verification seam.
///
/// `CredentialStore` is the in-memory implementation; a persistent backend
/// can be swapped in behind the same interface. Implementations must never
/// expose or log stored hash material.
pub trait CredentialService: Send + Sync {
    /// Register a new credential, hashing the plaintext with a fresh salt.
    ///
    /// Fails with `DuplicateUsername` if the identity already exists and
    /// with `InvalidInput` for empty usernames or passwords. A failed call
    /// leaves the store unchanged.
    fn register(
        &self,
        username: &str,
        plain: &str,
        role: &str,
    ) -> Result<CredentialRecord, AppError>;

    /// Check a claimed identity against the store.
    ///
    /// Unknown usernames and arbitrary inputs return `false` without
    /// failing, at roughly the cost of a real verification.
    fn verify(&self, username: &str, plain: &str) -> bool;

    /// Public view of a stored record, if present.
    fn lookup(&self, username: &str) -> Option<CredentialRecord>;
}
