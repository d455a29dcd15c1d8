//! Profile endpoint payloads.

use serde::Deserialize;

use lt_core::domain::entities::user::{Gender, Goal, ProfileUpdate};

/// Body for `PUT /api/user`. All fields are optional; absent fields keep
/// their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdateRequest {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<f64>,
    pub goal: Option<Goal>,
}

impl From<ProfileUpdateRequest> for ProfileUpdate {
    fn from(request: ProfileUpdateRequest) -> Self {
        Self {
            weight: request.weight,
            height: request.height,
            age: request.age,
            gender: request.gender,
            activity_level: request.activity_level,
            goal: request.goal,
        }
    }
}
