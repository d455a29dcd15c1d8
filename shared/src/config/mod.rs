//! Environment-driven configuration for the LightTrack backend.
//!
//! Every section exposes a `from_env` constructor with sensible development
//! defaults so the server can boot from a plain `.env` file.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::{AuthConfig, CookieConfig};
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Complete application configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load all configuration sections from environment variables.
    pub fn from_env() -> Self {
        Self {
            auth: AuthConfig::from_env(),
            database: DatabaseConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}
