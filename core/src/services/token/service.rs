//! Token service: issuance, verification, and revocation policy.

use tracing::warn;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevocationRepository;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Service owning both token codecs and the refresh revocation policy.
///
/// Access tokens verify statelessly; refresh tokens additionally pass
/// through the revocation store, which is consulted before the signature
/// so a revoked-but-otherwise-valid token reports `Revoked`, not some
/// secondary failure.
pub struct TokenService<R: RevocationRepository> {
    revocation: R,
    config: TokenServiceConfig,
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
}

impl<R: RevocationRepository> TokenService<R> {
    /// Creates a new token service instance.
    ///
    /// # Arguments
    ///
    /// * `revocation` - Revocation store backing logout
    /// * `config` - Signing keys and lifetimes
    pub fn new(revocation: R, config: TokenServiceConfig) -> Self {
        let access_codec = TokenCodec::for_access_tokens(&config.access_secret);
        let refresh_codec = TokenCodec::for_refresh_tokens(&config.refresh_secret);
        Self {
            revocation,
            config,
            access_codec,
            refresh_codec,
        }
    }

    /// Issues an access token for a user.
    ///
    /// The claim set carries no `exp`; access token lifetime is bounded by
    /// the transport cookie, not the token itself.
    pub fn issue_access_token(&self, user_id: i64, email: &str) -> Result<String, DomainError> {
        let claims = Claims::new_access(user_id, email);
        Ok(self.access_codec.encode(&claims)?)
    }

    /// Issues a refresh token expiring after the configured number of days.
    pub fn issue_refresh_token(&self, user_id: i64, email: &str) -> Result<String, DomainError> {
        let claims = Claims::new_refresh(user_id, email, self.config.refresh_expiry_days);
        Ok(self.refresh_codec.encode(&claims)?)
    }

    /// Verifies an access token and returns its claims.
    ///
    /// Stateless: signature only, no revocation lookup.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        Ok(self.access_codec.decode(token)?)
    }

    /// Verifies a refresh token: revocation check first, then signature
    /// and expiry under the refresh key.
    ///
    /// A storage failure during the revocation check propagates as an
    /// error, denying the refresh. Never falls through to the signature
    /// check on a failed lookup.
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        match self.revocation.is_revoked(token).await {
            Ok(true) => return Err(TokenError::Revoked.into()),
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "revocation check failed, denying refresh");
                return Err(e);
            }
        }

        Ok(self.refresh_codec.decode(token)?)
    }

    /// Records a refresh token as revoked. Idempotent.
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        self.revocation.insert_revoked(token).await
    }

    /// Codec for the access token family, shared with the HTTP middleware.
    pub fn access_codec(&self) -> TokenCodec {
        TokenCodec::for_access_tokens(&self.config.access_secret)
    }
}
