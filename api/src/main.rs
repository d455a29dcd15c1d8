//! LightTrack API server binary.

use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use lt_api::routes::{self, AppState};
use lt_api::middleware;
use lt_core::services::auth::AuthService;
use lt_core::services::meal::MealService;
use lt_core::services::profile::ProfileService;
use lt_core::services::token::{TokenService, TokenServiceConfig};
use lt_infra::database::postgres::{
    PgFoodRepository, PgMealRepository, PgRevocationRepository, PgUserRepository,
};
use lt_shared::config::AppConfig;
use lt_shared::types::response::ErrorResponse;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    if config.auth.is_using_default_secrets() {
        warn!("running with development token secrets, set ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET");
    }

    let pool = lt_infra::database::create_pool(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let foods = Arc::new(PgFoodRepository::new(pool.clone()));
    let meals = Arc::new(PgMealRepository::new(pool.clone()));
    let revocation = PgRevocationRepository::new(pool);

    let token_service = TokenService::new(revocation, TokenServiceConfig::from(&config.auth));
    let access_codec = Arc::new(token_service.access_codec());

    let state = web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(Arc::clone(&users), token_service)),
        profile_service: Arc::new(ProfileService::new(Arc::clone(&users))),
        meal_service: Arc::new(MealService::new(Arc::clone(&meals), Arc::clone(&foods))),
        foods: Arc::clone(&foods),
        cookies: config.auth.cookie.clone(),
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "starting LightTrack API server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .configure(routes::configure::<
                PgUserRepository,
                PgRevocationRepository,
                PgFoodRepository,
                PgMealRepository,
            >(Arc::clone(&access_codec)))
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "lighttrack-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "the requested resource was not found",
    ))
}
