//! PostgreSQL implementation of the RevocationRepository trait.
//!
//! Revoked refresh tokens are stored verbatim in `revoked_tokens` with a
//! unique constraint on the token column. The constraint is what gives the
//! store its read-after-write guarantee per token string.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use tracing::debug;

use lt_core::errors::DomainError;
use lt_core::repositories::RevocationRepository;

use super::storage_error;

/// PostgreSQL-backed revocation store
pub struct PgRevocationRepository {
    pool: PgPool,
}

impl PgRevocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationRepository for PgRevocationRepository {
    async fn insert_revoked(&self, token: &str) -> Result<(), DomainError> {
        // ON CONFLICT DO NOTHING makes duplicate revocation a no-op success
        // instead of a unique-constraint failure
        let query = r#"
            INSERT INTO revoked_tokens (token, recorded_at)
            VALUES ($1, $2)
            ON CONFLICT (token) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to insert revoked token", e))?;

        if result.rows_affected() == 0 {
            debug!("token was already revoked");
        }
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token = $1) AS revoked";

        let row = sqlx::query(query)
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("failed to check revocation", e))?;

        row.try_get("revoked")
            .map_err(|e| storage_error("failed to read revocation flag", e))
    }
}
