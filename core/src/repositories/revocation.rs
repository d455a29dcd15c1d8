//! Revocation store trait.
//!
//! The store holds literal refresh token strings that have been logged out.
//! It is append-only: records are never mutated or deleted, so the set grows
//! without bound. Pruning by token expiry is a known future capability; see
//! DESIGN.md for the scaling note.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Persistent set of revoked token strings.
///
/// # Consistency
/// Once `insert_revoked` returns `Ok`, every subsequent `is_revoked` call
/// for the same token string, from any task, must observe `true`. A
/// relational backend with a unique constraint on the token column
/// satisfies this.
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Record a token as revoked.
    ///
    /// Revoking an already-revoked token is a no-op success, never an
    /// error: duplicate-key violations are absorbed at this boundary.
    ///
    /// # Returns
    /// * `Ok(())` - Token recorded (or already present)
    /// * `Err(DomainError::Storage)` - Backing store failed
    async fn insert_revoked(&self, token: &str) -> Result<(), DomainError>;

    /// Membership test. Not-found is `Ok(false)`, never an error.
    ///
    /// Callers on the verification path must treat `Err` as a denial
    /// (fail closed), since failing open would let a revoked session
    /// through.
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError>;
}
