//! CORS configuration.

use actix_cors::Cors;
use actix_web::http::header;

/// CORS policy for the API.
///
/// Credentials are required because tokens travel as cookies, which in
/// turn rules out a wildcard origin. The allowed origin comes from
/// `CORS_ALLOWED_ORIGIN`, defaulting to the local frontend dev server.
pub fn create_cors() -> Cors {
    let origin = std::env::var("CORS_ALLOWED_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    Cors::default()
        .allowed_origin(&origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .supports_credentials()
        .max_age(3600)
}
