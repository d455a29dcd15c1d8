//! Food entity.

use serde::{Deserialize, Serialize};

/// A food item with nutrition values per 100 grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    /// Kilocalories per 100 g
    pub calories: f64,
    /// Protein grams per 100 g
    pub protein: f64,
    /// Carbohydrate grams per 100 g
    pub carbs: f64,
    /// Fat grams per 100 g
    pub fat: f64,
}
