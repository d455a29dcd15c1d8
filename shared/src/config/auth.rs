//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Default refresh token lifetime in days
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Signing keys and token lifetimes for the authentication core.
///
/// Access and refresh tokens are signed with two distinct secrets so that a
/// token from one family can never validate against the other. Both secrets
/// are injected here at startup; nothing in the core reads process globals.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,

    /// Secret key for signing refresh tokens
    pub refresh_secret: String,

    /// Refresh token lifetime in days (embedded in the `exp` claim)
    pub refresh_token_expiry_days: i64,

    /// Cookie transport settings for both tokens
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Create from environment variables.
    ///
    /// Reads `ACCESS_TOKEN_SECRET`, `REFRESH_TOKEN_SECRET`,
    /// `REFRESH_TOKEN_EXPIRY_DAYS` and the cookie settings.
    pub fn from_env() -> Self {
        let access_secret = std::env::var("ACCESS_TOKEN_SECRET")
            .unwrap_or_else(|_| "development-access-secret-change-me".to_string());
        let refresh_secret = std::env::var("REFRESH_TOKEN_SECRET")
            .unwrap_or_else(|_| "development-refresh-secret-change-me".to_string());
        let refresh_token_expiry_days = std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_EXPIRY_DAYS);

        Self {
            access_secret,
            refresh_secret,
            refresh_token_expiry_days,
            cookie: CookieConfig::from_env(),
        }
    }

    /// Check if either secret is still a development default.
    pub fn is_using_default_secrets(&self) -> bool {
        self.access_secret.starts_with("development-")
            || self.refresh_secret.starts_with("development-")
    }
}

/// Cookie attributes applied to the `access_token` and `refresh_token`
/// cookies set at login.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie domain scope
    pub domain: String,

    /// Max-age of the access token cookie in seconds
    pub access_max_age: i64,

    /// Max-age of the refresh token cookie in seconds
    pub refresh_max_age: i64,

    /// Whether cookies require HTTPS
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            domain: String::from("localhost"),
            access_max_age: 900,      // 15 minutes
            refresh_max_age: 604_800, // 7 days
            secure: false,            // set to true in production
        }
    }
}

impl CookieConfig {
    /// Create from environment variables (`COOKIE_DOMAIN`,
    /// `ACCESS_TOKEN_EXPIRE`, `REFRESH_TOKEN_EXPIRE`, `SECURE_COOKIE`).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            domain: std::env::var("COOKIE_DOMAIN").unwrap_or(defaults.domain),
            access_max_age: std::env::var("ACCESS_TOKEN_EXPIRE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_max_age),
            refresh_max_age: std::env::var("REFRESH_TOKEN_EXPIRE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_max_age),
            secure: std::env::var("SECURE_COOKIE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.secure),
        }
    }
}
