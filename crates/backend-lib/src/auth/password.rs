// ============================
// staffdir-backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
use scrypt::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Params, Scrypt,
};

/// Input to the reference hash used for unknown-username verification.
/// The value is irrelevant; it is never accepted as a credential.
const REFERENCE_PASSWORD: &str = "staffdir-reference-password";

/// Hash a password using scrypt with the given cost parameters.
///
/// A fresh random salt is generated per call, so hashing the same plaintext
/// twice yields different PHC strings. The salt and cost parameters are
/// embedded in the returned string.
pub fn hash_password(plain: &str, params: Params) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Scrypt
        .hash_password_customized(plain.as_bytes(), None, None, params, &salt)
        .map_err(|e| anyhow::anyhow!("scrypt hashing failed: {e}"))?
        .to_string();
    Ok(hash)
}

/// Verify a password against a PHC hash string.
///
/// The cost parameters and salt come from the hash itself; the digest
/// comparison inside the `password_hash` framework is constant-time.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Scrypt.verify_password(plain.as_bytes(), &parsed_hash).is_ok()
}

/// Compute the reference hash a store verifies against when a username is
/// unknown, so the miss path costs about as much as a real verification.
pub(crate) fn reference_hash(params: Params) -> anyhow::Result<String> {
    hash_password(REFERENCE_PASSWORD, params)
}
