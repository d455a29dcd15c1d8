use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::{AccessTokenResponse, RefreshTokenRequest};
use crate::handlers::handle_domain_error;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};
use lt_shared::types::response::ErrorResponse;

use super::{auth_cookie, AppState};

/// Handler for POST /api/refresh
///
/// Exchanges a refresh token for a new access token and renews the
/// `access_token` cookie. The refresh token comes from the JSON body or,
/// when the body is omitted, from the `refresh_token` cookie. The refresh
/// token itself is not rotated.
///
/// # Errors
/// - 400 Bad Request: no refresh token in body or cookie
/// - 401 Unauthorized: revoked, expired, or invalid refresh token
/// - 503 Service Unavailable: revocation store unreachable (fails closed)
pub async fn refresh<U, R, F, M>(
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

    match state.auth_service.refresh_session(&token).await {
        Ok(grant) => HttpResponse::Ok()
            .cookie(auth_cookie(
                "access_token",
                &grant.access_token,
                state.cookies.access_max_age,
                &state.cookies,
            ))
            .json(AccessTokenResponse {
                access_token: grant.access_token,
                user_id: grant.user_id,
            }),
        Err(error) => handle_domain_error(&error),
    }
}
