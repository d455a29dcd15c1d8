use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::{MessageResponse, RefreshTokenRequest};
use crate::handlers::handle_domain_error;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};
use lt_shared::types::response::ErrorResponse;

use super::{removal_cookie, AppState};

/// Handler for POST /api/logout
///
/// Records the refresh token as revoked and clears both token cookies.
/// Idempotent: logging out twice with the same token succeeds both times.
/// The token is revoked verbatim, without verifying it first, so even an
/// already-expired token can be revoked.
///
/// # Errors
/// - 400 Bad Request: no refresh token in body or cookie
/// - 503 Service Unavailable: revocation store unreachable
pub async fn logout<U, R, F, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, F, M>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    let token = body
        .and_then(|b| b.into_inner().refresh_token)
        .or_else(|| req.cookie("refresh_token").map(|c| c.value().to_string()));

    let Some(token) = token else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "refresh token is required",
        ));
    };

    match state.auth_service.logout(&token).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(removal_cookie("access_token", &state.cookies))
            .cookie(removal_cookie("refresh_token", &state.cookies))
            .json(MessageResponse {
                message: "logged out".to_string(),
            }),
        Err(error) => handle_domain_error(&error),
    }
}
