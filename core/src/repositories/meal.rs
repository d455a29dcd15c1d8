//! Meal repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::meal::{Meal, MealItem};
use crate::errors::DomainError;

/// Repository trait for meals and their items.
#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Create an empty meal for a user, timestamped now.
    async fn create_meal(&self, user_id: i64) -> Result<Meal, DomainError>;

    /// Find a meal by id.
    async fn find_meal(&self, meal_id: i64) -> Result<Option<Meal>, DomainError>;

    /// Append a food portion to an existing meal.
    async fn add_item(
        &self,
        meal_id: i64,
        food_id: i64,
        amount: f64,
    ) -> Result<MealItem, DomainError>;

    /// All items belonging to a meal.
    async fn items_for_meal(&self, meal_id: i64) -> Result<Vec<MealItem>, DomainError>;

    /// All meals a user logged in the half-open interval `[start, end)`.
    async fn meals_for_user_between(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Meal>, DomainError>;
}
