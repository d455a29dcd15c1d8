//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;
use tracing::error;

use lt_core::errors::{AuthError, DomainError, TokenError};
use lt_shared::types::response::ErrorResponse;

/// Convert a domain error into its HTTP status and unified error body.
///
/// Storage failures return 503 without detail; the cause stays in the
/// logs. Token and credential failures all map to 401.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message.clone()))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{resource} not found"),
        )),
        DomainError::Storage { message } => {
            error!(%message, "storage failure surfaced to handler");
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                "service_unavailable",
                "service temporarily unavailable",
            ))
        }
        DomainError::Internal { message } => {
            error!(%message, "internal error");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "an internal error occurred",
            ))
        }
        DomainError::Auth(auth) => handle_auth_error(auth),
        DomainError::Token(token) => handle_token_error(token),
    }
}

fn handle_auth_error(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::EmailTaken => {
            HttpResponse::BadRequest().json(ErrorResponse::new("email_taken", error.to_string()))
        }
        AuthError::HashingFailed => HttpResponse::InternalServerError().json(ErrorResponse::new(
            "internal_error",
            "an internal error occurred",
        )),
        AuthError::InvalidCredentials | AuthError::IdentityNotFound => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", error.to_string()))
        }
    }
}

fn handle_token_error(error: &TokenError) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new("invalid_token", error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_token_errors_map_to_401() {
        for error in [
            TokenError::Malformed,
            TokenError::InvalidSignature,
            TokenError::Expired,
            TokenError::Revoked,
        ] {
            let response = handle_domain_error(&error.into());
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_email_taken_maps_to_400() {
        let response = handle_domain_error(&AuthError::EmailTaken.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_failure_maps_to_503() {
        let error = DomainError::Storage {
            message: "connection refused".to_string(),
        };
        let response = handle_domain_error(&error);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = DomainError::NotFound {
            resource: "meal".to_string(),
        };
        let response = handle_domain_error(&error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
