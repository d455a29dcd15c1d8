//! Nutrition aggregation value types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::food::Food;

/// Accumulated macro-nutrient totals across a set of food portions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    /// Add a portion of `food` weighing `grams`.
    ///
    /// Food nutrition values are per 100 g, so the portion is scaled by
    /// `grams / 100`.
    pub fn add_portion(&mut self, food: &Food, grams: f64) {
        let factor = grams / 100.0;
        self.calories += food.calories * factor;
        self.protein += food.protein * factor;
        self.carbs += food.carbs * factor;
        self.fat += food.fat * factor;
    }

    /// Merge another set of totals into this one.
    pub fn merge(&mut self, other: &NutritionTotals) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }
}

/// Totals for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub totals: NutritionTotals,
}

/// Totals for each day of a trailing 7-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub days: Vec<DailySummary>,
}
