//! User repository trait.

use async_trait::async_trait;

use crate::domain::entities::user::{ProfileUpdate, User};
use crate::errors::DomainError;

/// Record persisted for a new account. The password arrives pre-hashed;
/// repositories never see plaintext credentials.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its database-assigned id.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, user: NewUserRecord) -> Result<User, DomainError>;

    /// Find a user by email.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Overwrite the profile fields of an existing user.
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError)` - User missing or database error
    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<User, DomainError>;
}
