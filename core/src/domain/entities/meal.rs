//! Meal and meal item entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged meal. Nutrition is derived from its items, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// One food portion inside a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub id: i64,
    pub meal_id: i64,
    pub food_id: i64,
    /// Portion size in grams
    pub amount: f64,
}
