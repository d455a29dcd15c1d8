use actix_web::{web, HttpResponse};

use crate::dto::auth::{LoginRequest, TokenPairResponse};
use crate::handlers::handle_domain_error;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};

use super::{auth_cookie, AppState};

/// Handler for POST /api/login
///
/// Verifies credentials and issues an access/refresh token pair. Both
/// tokens are returned in the body and set as http-only cookies.
///
/// # Errors
/// - 401 Unauthorized: unknown email or wrong password (indistinguishable)
/// - 503 Service Unavailable: storage failure
pub async fn login<U, R, F, M>(
    state: web::Data<AppState<U, R, F, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(tokens) => {
            let cookies = &state.cookies;
            HttpResponse::Ok()
                .cookie(auth_cookie(
                    "access_token",
                    &tokens.access_token,
                    cookies.access_max_age,
                    cookies,
                ))
                .cookie(auth_cookie(
                    "refresh_token",
                    &tokens.refresh_token,
                    cookies.refresh_max_age,
                    cookies,
                ))
                .json(TokenPairResponse {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                    user_id: tokens.user_id,
                })
        }
        Err(error) => handle_domain_error(&error),
    }
}
