//! Authentication service implementation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::token::{AccessGrant, AuthTokens};
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{NewUserRecord, RevocationRepository, UserRepository};
use crate::services::token::TokenService;

use super::password::{hash_password, verify_password};

/// Orchestrates credentials, token issuance, and session revocation.
pub struct AuthService<U: UserRepository, R: RevocationRepository> {
    users: Arc<U>,
    tokens: TokenService<R>,
}

impl<U: UserRepository, R: RevocationRepository> AuthService<U, R> {
    pub fn new(users: Arc<U>, tokens: TokenService<R>) -> Self {
        Self { users, tokens }
    }

    /// Access to the token service, for wiring the HTTP middleware.
    pub fn tokens(&self) -> &TokenService<R> {
        &self.tokens
    }

    /// Register a new account.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn register(&self, new_user: NewUser) -> Result<User, DomainError> {
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&new_user.password)?;
        let user = self
            .users
            .create(NewUserRecord {
                name: new_user.name,
                email: new_user.email,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller. Nothing is persisted; a failed login leaves no state.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.tokens.issue_access_token(user.id, &user.email)?;
        let refresh_token = self.tokens.issue_refresh_token(user.id, &user.email)?;

        info!(user_id = user.id, "login succeeded");
        Ok(AuthTokens {
            access_token,
            refresh_token,
            user_id: user.id,
        })
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// The token passes the revocation check and signature/expiry
    /// verification, then the user is re-looked-up by the email claim so
    /// the new access token reflects current database state rather than
    /// stale claim data. The refresh token itself is not rotated.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AccessGrant, DomainError> {
        let claims = self.tokens.verify_refresh_token(refresh_token).await?;

        let user = self
            .users
            .find_by_email(&claims.email)
            .await?
            .ok_or(AuthError::IdentityNotFound)?;

        let access_token = self.tokens.issue_access_token(user.id, &user.email)?;

        debug!(user_id = user.id, "access token refreshed");
        Ok(AccessGrant {
            access_token,
            user_id: user.id,
        })
    }

    /// Revoke a refresh token, ending the session.
    ///
    /// Idempotent: logging out twice with the same token succeeds both
    /// times. The token string is recorded verbatim; even a token that no
    /// longer verifies may be revoked.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), DomainError> {
        if refresh_token.is_empty() {
            return Err(DomainError::Validation {
                message: "refresh token is required".to_string(),
            });
        }

        self.tokens.revoke_refresh_token(refresh_token).await?;
        info!("refresh token revoked");
        Ok(())
    }
}
