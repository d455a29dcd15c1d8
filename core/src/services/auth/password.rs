//! Password hashing capability.
//!
//! Thin wrapper over bcrypt so the rest of the core only sees
//! `hash(password) -> digest` and `verify(password, digest) -> bool`.

use crate::errors::AuthError;

/// Hash a plaintext password with the default bcrypt cost.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|_| AuthError::HashingFailed)
}

/// Check a plaintext password against a stored digest.
///
/// Any bcrypt error (corrupt digest, wrong format) reads as a mismatch.
pub fn verify_password(password: &str, digest: &str) -> bool {
    bcrypt::verify(password, digest).unwrap_or(false)
}
