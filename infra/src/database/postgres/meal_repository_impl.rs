//! PostgreSQL implementation of the MealRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use lt_core::domain::entities::meal::{Meal, MealItem};
use lt_core::errors::DomainError;
use lt_core::repositories::MealRepository;

use super::storage_error;

/// PostgreSQL-backed meal repository
pub struct PgMealRepository {
    pool: PgPool,
}

impl PgMealRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_meal(row: &PgRow) -> Result<Meal, DomainError> {
        Ok(Meal {
            id: row
                .try_get("id")
                .map_err(|e| storage_error("failed to get id", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| storage_error("failed to get user_id", e))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| storage_error("failed to get created_at", e))?,
        })
    }

    fn row_to_item(row: &PgRow) -> Result<MealItem, DomainError> {
        Ok(MealItem {
            id: row
                .try_get("id")
                .map_err(|e| storage_error("failed to get id", e))?,
            meal_id: row
                .try_get("meal_id")
                .map_err(|e| storage_error("failed to get meal_id", e))?,
            food_id: row
                .try_get("food_id")
                .map_err(|e| storage_error("failed to get food_id", e))?,
            amount: row
                .try_get("amount")
                .map_err(|e| storage_error("failed to get amount", e))?,
        })
    }
}

#[async_trait]
impl MealRepository for PgMealRepository {
    async fn create_meal(&self, user_id: i64) -> Result<Meal, DomainError> {
        let query = r#"
            INSERT INTO meals (user_id, created_at)
            VALUES ($1, $2)
            RETURNING id, user_id, created_at
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("failed to create meal", e))?;

        Self::row_to_meal(&row)
    }

    async fn find_meal(&self, meal_id: i64) -> Result<Option<Meal>, DomainError> {
        let query = "SELECT id, user_id, created_at FROM meals WHERE id = $1";

        let row = sqlx::query(query)
            .bind(meal_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find meal", e))?;

        row.map(|r| Self::row_to_meal(&r)).transpose()
    }

    async fn add_item(
        &self,
        meal_id: i64,
        food_id: i64,
        amount: f64,
    ) -> Result<MealItem, DomainError> {
        let query = r#"
            INSERT INTO meal_items (meal_id, food_id, amount)
            VALUES ($1, $2, $3)
            RETURNING id, meal_id, food_id, amount
        "#;

        let row = sqlx::query(query)
            .bind(meal_id)
            .bind(food_id)
            .bind(amount)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("failed to add meal item", e))?;

        Self::row_to_item(&row)
    }

    async fn items_for_meal(&self, meal_id: i64) -> Result<Vec<MealItem>, DomainError> {
        let query = "SELECT id, meal_id, food_id, amount FROM meal_items WHERE meal_id = $1";

        let rows = sqlx::query(query)
            .bind(meal_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("failed to load meal items", e))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn meals_for_user_between(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Meal>, DomainError> {
        let query = r#"
            SELECT id, user_id, created_at
            FROM meals
            WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("failed to load meals", e))?;

        rows.iter().map(Self::row_to_meal).collect()
    }
}
