//! Token service configuration

use lt_shared::config::AuthConfig;

use crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS;

/// Signing keys and lifetimes for the token service.
///
/// The two secrets must differ; they are what keeps the access and refresh
/// token families cryptographically isolated from each other.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for the access token family
    pub access_secret: String,

    /// Secret for the refresh token family
    pub refresh_secret: String,

    /// Refresh token lifetime in days
    pub refresh_expiry_days: i64,
}

impl TokenServiceConfig {
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            refresh_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }

    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_expiry_days = days;
        self
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            refresh_expiry_days: config.refresh_token_expiry_days,
        }
    }
}
