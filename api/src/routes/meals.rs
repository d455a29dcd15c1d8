//! Meal logging and nutrition summary endpoints (protected).

use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::dto::meal::{AddMealItemRequest, DailySummaryQuery};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/meals
///
/// Starts an empty meal for the authenticated user.
pub async fn create_meal<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state.meal_service.create_meal(auth.user_id).await {
        Ok(meal) => HttpResponse::Created().json(meal),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/meals/items
///
/// Adds a food portion (grams) to one of the caller's meals.
///
/// # Errors
/// - 400 Bad Request: non-positive amount
/// - 404 Not Found: unknown food, unknown meal, or a meal owned by
///   someone else
pub async fn add_meal_item<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
    request: web::Json<AddMealItemRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state
        .meal_service
        .add_item(auth.user_id, request.meal_id, request.food_id, request.amount)
        .await
    {
        Ok(item) => HttpResponse::Created().json(item),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/meals/{meal_id}/summary
pub async fn meal_summary<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state.meal_service.meal_summary(auth.user_id, *path).await {
        Ok(totals) => HttpResponse::Ok().json(totals),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/user/daily-summary
///
/// Totals across all meals logged on the requested date (`?date=`,
/// defaulting to today, UTC).
pub async fn daily_summary<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
    query: web::Query<DailySummaryQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    match state.meal_service.daily_summary(auth.user_id, date).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/user/weekly-summary
///
/// Per-day totals for the trailing 7 days ending today, zero-filled for
/// days with no meals.
pub async fn weekly_summary<U, R, F, M>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, F, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state.meal_service.weekly_summary(auth.user_id).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(error) => handle_domain_error(&error),
    }
}
