//! Meal and summary endpoint payloads.

use chrono::NaiveDate;
use serde::Deserialize;

/// Body for `POST /api/meals/items`
#[derive(Debug, Deserialize)]
pub struct AddMealItemRequest {
    pub meal_id: i64,
    pub food_id: i64,
    /// Portion size in grams
    pub amount: f64,
}

/// Query string for `GET /api/user/daily-summary`; defaults to today.
#[derive(Debug, Default, Deserialize)]
pub struct DailySummaryQuery {
    pub date: Option<NaiveDate>,
}
