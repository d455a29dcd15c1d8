//! Food lookup endpoints (protected).

use actix_web::{web, HttpResponse};

use crate::handlers::handle_domain_error;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};
use lt_shared::types::response::ErrorResponse;

use super::AppState;

/// Handler for GET /api/foods/{query}
///
/// Case-insensitive substring search; returns the first match.
pub async fn search_foods<U, R, F, M>(
    state: web::Data<AppState<U, R, F, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state.foods.search_by_name(&path).await {
        Ok(Some(food)) => HttpResponse::Ok().json(food),
        Ok(None) => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "food not found"))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/foods/id/{id}
pub async fn food_by_id<U, R, F, M>(
    state: web::Data<AppState<U, R, F, M>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state.foods.find_by_id(*path).await {
        Ok(Some(food)) => HttpResponse::Ok().json(food),
        Ok(None) => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "food not found"))
        }
        Err(error) => handle_domain_error(&error),
    }
}
