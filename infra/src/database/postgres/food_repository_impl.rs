//! PostgreSQL implementation of the FoodRepository trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use lt_core::domain::entities::food::Food;
use lt_core::errors::DomainError;
use lt_core::repositories::FoodRepository;

use super::storage_error;

/// PostgreSQL-backed food repository
pub struct PgFoodRepository {
    pool: PgPool,
}

impl PgFoodRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_food(row: &PgRow) -> Result<Food, DomainError> {
        Ok(Food {
            id: row
                .try_get("id")
                .map_err(|e| storage_error("failed to get id", e))?,
            name: row
                .try_get("name")
                .map_err(|e| storage_error("failed to get name", e))?,
            calories: row
                .try_get("calories")
                .map_err(|e| storage_error("failed to get calories", e))?,
            protein: row
                .try_get("protein")
                .map_err(|e| storage_error("failed to get protein", e))?,
            carbs: row
                .try_get("carbs")
                .map_err(|e| storage_error("failed to get carbs", e))?,
            fat: row
                .try_get("fat")
                .map_err(|e| storage_error("failed to get fat", e))?,
        })
    }
}

#[async_trait]
impl FoodRepository for PgFoodRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Food>, DomainError> {
        let query = "SELECT id, name, calories, protein, carbs, fat FROM foods WHERE id = $1";

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find food by id", e))?;

        row.map(|r| Self::row_to_food(&r)).transpose()
    }

    async fn search_by_name(&self, query_text: &str) -> Result<Option<Food>, DomainError> {
        let query = r#"
            SELECT id, name, calories, protein, carbs, fat
            FROM foods
            WHERE name ILIKE '%' || $1 || '%'
            ORDER BY id
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(query_text)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to search foods", e))?;

        row.map(|r| Self::row_to_food(&r)).transpose()
    }
}
