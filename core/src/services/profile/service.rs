//! Profile service: profile updates, BMI, calorie targets.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{Gender, Goal, ProfileUpdate, User};
use crate::errors::DomainError;
use crate::repositories::UserRepository;

/// BMI classification per the standard WHO cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Body mass index with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMassIndex {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Daily calorie recommendation derived from the Harris-Benedict equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// Total daily energy expenditure (BMR x activity level)
    pub tdee: f64,
    /// TDEE adjusted for the user's goal
    pub goal_calories: f64,
    pub goal: Goal,
}

/// Service over user profile data and derived body metrics.
pub struct ProfileService<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> ProfileService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Overwrite the caller's profile fields.
    pub async fn update_profile(
        &self,
        user_id: i64,
        update: ProfileUpdate,
    ) -> Result<User, DomainError> {
        self.users.update_profile(user_id, &update).await
    }

    /// Compute BMI from the stored weight and height.
    pub async fn body_mass_index(&self, user_id: i64) -> Result<BodyMassIndex, DomainError> {
        let user = self.require_user(user_id).await?;

        let (weight, height) = match (user.weight, user.height) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w, h),
            _ => {
                return Err(DomainError::Validation {
                    message: "weight and height must be set".to_string(),
                })
            }
        };

        let height_m = height / 100.0;
        let bmi = weight / (height_m * height_m);

        let category = if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        };

        Ok(BodyMassIndex { bmi, category })
    }

    /// Daily calorie target: Harris-Benedict BMR, scaled by activity
    /// level, adjusted for the goal (lose -20%, gain +15%).
    pub async fn calorie_target(&self, user_id: i64) -> Result<CalorieTarget, DomainError> {
        let user = self.require_user(user_id).await?;

        let (weight, height, age, gender) =
            match (user.weight, user.height, user.age, user.gender) {
                (Some(w), Some(h), Some(a), Some(g)) if w > 0.0 && h > 0.0 && a > 0 => {
                    (w, h, f64::from(a), g)
                }
                _ => {
                    return Err(DomainError::Validation {
                        message: "weight, height, age and gender must be set".to_string(),
                    })
                }
            };

        let bmr = match gender {
            Gender::Male => 88.36 + 13.4 * weight + 4.8 * height - 5.7 * age,
            Gender::Female => 447.6 + 9.2 * weight + 3.1 * height - 4.3 * age,
        };

        let activity = user.activity_level.unwrap_or(1.2);
        let tdee = bmr * activity;

        let goal_calories = match user.goal {
            Goal::Lose => tdee * 0.8,
            Goal::Gain => tdee * 1.15,
            Goal::Maintain => tdee,
        };

        Ok(CalorieTarget {
            bmr,
            tdee,
            goal_calories,
            goal: user.goal,
        })
    }

    async fn require_user(&self, user_id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "user".to_string(),
            })
    }
}
