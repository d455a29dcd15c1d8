//! Meal service implementation.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use tracing::warn;

use crate::domain::entities::meal::{Meal, MealItem};
use crate::domain::entities::nutrition::{DailySummary, NutritionTotals, WeeklySummary};
use crate::errors::DomainError;
use crate::repositories::{FoodRepository, MealRepository};

/// Service for logging meals and computing calorie/macro summaries.
pub struct MealService<M: MealRepository, F: FoodRepository> {
    meals: Arc<M>,
    foods: Arc<F>,
}

impl<M: MealRepository, F: FoodRepository> MealService<M, F> {
    pub fn new(meals: Arc<M>, foods: Arc<F>) -> Self {
        Self { meals, foods }
    }

    /// Start an empty meal for the user.
    pub async fn create_meal(&self, user_id: i64) -> Result<Meal, DomainError> {
        self.meals.create_meal(user_id).await
    }

    /// Add a food portion to one of the caller's meals.
    ///
    /// The meal must exist and belong to the caller; a foreign meal reads
    /// as not-found rather than forbidden so meal ids are not probeable.
    pub async fn add_item(
        &self,
        user_id: i64,
        meal_id: i64,
        food_id: i64,
        amount: f64,
    ) -> Result<MealItem, DomainError> {
        if amount <= 0.0 {
            return Err(DomainError::Validation {
                message: "amount must be positive".to_string(),
            });
        }

        let meal = self
            .meals
            .find_meal(meal_id)
            .await?
            .filter(|m| m.user_id == user_id)
            .ok_or(DomainError::NotFound {
                resource: "meal".to_string(),
            })?;

        self.foods
            .find_by_id(food_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "food".to_string(),
            })?;

        self.meals.add_item(meal.id, food_id, amount).await
    }

    /// Macro totals for one meal.
    pub async fn meal_summary(
        &self,
        user_id: i64,
        meal_id: i64,
    ) -> Result<NutritionTotals, DomainError> {
        self.meals
            .find_meal(meal_id)
            .await?
            .filter(|m| m.user_id == user_id)
            .ok_or(DomainError::NotFound {
                resource: "meal".to_string(),
            })?;

        let items = self.meals.items_for_meal(meal_id).await?;
        self.totals_for_items(&items).await
    }

    /// Macro totals across all meals the user logged on `date`.
    pub async fn daily_summary(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<DailySummary, DomainError> {
        let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1);

        let meals = self.meals.meals_for_user_between(user_id, start, end).await?;

        let mut totals = NutritionTotals::default();
        for meal in &meals {
            let items = self.meals.items_for_meal(meal.id).await?;
            totals.merge(&self.totals_for_items(&items).await?);
        }

        Ok(DailySummary { date, totals })
    }

    /// Per-day totals for the trailing 7 days ending today, zero-filled
    /// for days with no meals.
    pub async fn weekly_summary(&self, user_id: i64) -> Result<WeeklySummary, DomainError> {
        let today = Utc::now().date_naive();
        let week_start = today - Duration::days(6);

        let mut days = Vec::with_capacity(7);
        for offset in 0..7 {
            let date = week_start + Duration::days(offset);
            days.push(self.daily_summary(user_id, date).await?);
        }

        Ok(WeeklySummary {
            week_start,
            week_end: today,
            days,
        })
    }

    async fn totals_for_items(&self, items: &[MealItem]) -> Result<NutritionTotals, DomainError> {
        let mut totals = NutritionTotals::default();
        for item in items {
            match self.foods.find_by_id(item.food_id).await? {
                Some(food) => totals.add_portion(&food, item.amount),
                // A dangling food id skips the item rather than failing the
                // whole summary
                None => warn!(food_id = item.food_id, "meal item references missing food"),
            }
        }
        Ok(totals)
    }
}
