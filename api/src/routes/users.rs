//! Profile and body metric endpoints (protected).

use actix_web::{web, HttpResponse};

use crate::dto::user::ProfileUpdateRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};

use super::AppState;

/// Handler for PUT /api/user
///
/// Updates the caller's profile fields; absent fields keep their stored
/// value. Returns the updated user.
pub async fn update_profile<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
    request: web::Json<ProfileUpdateRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state
        .profile_service
        .update_profile(auth.user_id, request.into_inner().into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/imc
///
/// Body mass index from the stored weight and height.
///
/// # Errors
/// - 400 Bad Request: weight or height not set on the profile
pub async fn body_mass_index<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state.profile_service.body_mass_index(auth.user_id).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/calories
///
/// Daily calorie target from the Harris-Benedict equation, adjusted for
/// activity level and goal.
///
/// # Errors
/// - 400 Bad Request: weight, height, age or gender not set on the profile
pub async fn calorie_target<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state.profile_service.calorie_target(auth.user_id).await {
        Ok(target) => HttpResponse::Ok().json(target),
        Err(error) => handle_domain_error(&error),
    }
}
