use actix_web::{web, HttpResponse};

use crate::dto::auth::RegisterRequest;
use crate::handlers::handle_domain_error;

use lt_core::domain::entities::user::NewUser;
use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};
use lt_shared::types::response::ErrorResponse;

use super::AppState;

/// Handler for POST /api/register
///
/// Creates a new account. No tokens are issued; the client logs in
/// afterwards.
///
/// # Errors
/// - 400 Bad Request: missing fields or email already registered
/// - 503 Service Unavailable: storage failure
pub async fn register<U, R, F, M>(
    state: web::Data<AppState<U, R, F, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    let request = request.into_inner();

    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "name and email are required",
        ));
    }
    if request.password.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "password is required",
        ));
    }

    let new_user = NewUser {
        name: request.name,
        email: request.email,
        password: request.password,
    };

    match state.auth_service.register(new_user).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(error) => handle_domain_error(&error),
    }
}
