//! # Password hashing and verification (bcrypt)
//!
//! - [`hash_password`] salts and hashes a plaintext password at the given cost
//!   and returns the modular-crypt string stored in `users.password_hash`.
//! - [`verify_password`] checks a plaintext password against a stored hash.
//!
//! bcrypt is deliberately slow, so both run on Tokio's blocking pool and never
//! on an executor thread.

use crate::backend::error::ApiError;

/// Hash a password with bcrypt at `cost` rounds
pub async fn hash_password(password: &str, cost: u32) -> Result<String, ApiError> {
    let password = password.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Verify a password against a stored bcrypt hash
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}
