//! Route registration.

pub mod auth;
pub mod foods;
pub mod meals;
pub mod users;

pub use auth::AppState;

use std::sync::Arc;

use actix_web::web;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};
use lt_core::services::token::TokenCodec;

use crate::middleware::JwtAuth;

/// Register all API routes under `/api`.
///
/// The four auth endpoints are public; everything else sits behind the
/// JWT middleware, which verifies against the access token codec.
pub fn configure<U, R, F, M>(codec: Arc<TokenCodec>) -> impl FnOnce(&mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    F: FoodRepository + 'static,
    M: MealRepository + 'static,
{
    move |cfg| {
        cfg.service(
            web::scope("/api")
                .route("/register", web::post().to(auth::register::register::<U, R, F, M>))
                .route("/login", web::post().to(auth::login::login::<U, R, F, M>))
                .route("/refresh", web::post().to(auth::refresh::refresh::<U, R, F, M>))
                .route("/logout", web::post().to(auth::logout::logout::<U, R, F, M>))
                .service(
                    web::scope("")
                        .wrap(JwtAuth::new(codec))
                        // the literal /foods/id prefix must register before
                        // the /foods/{query} catch-all
                        .route("/foods/id/{id}", web::get().to(foods::food_by_id::<U, R, F, M>))
                        .route("/foods/{query}", web::get().to(foods::search_foods::<U, R, F, M>))
                        .route("/meals", web::post().to(meals::create_meal::<U, R, F, M>))
                        .route("/meals/items", web::post().to(meals::add_meal_item::<U, R, F, M>))
                        .route(
                            "/meals/{meal_id}/summary",
                            web::get().to(meals::meal_summary::<U, R, F, M>),
                        )
                        .route(
                            "/user/daily-summary",
                            web::get().to(meals::daily_summary::<U, R, F, M>),
                        )
                        .route(
                            "/user/weekly-summary",
                            web::get().to(meals::weekly_summary::<U, R, F, M>),
                        )
                        .route("/user", web::put().to(users::update_profile::<U, R, F, M>))
                        .route("/imc", web::get().to(users::body_mass_index::<U, R, F, M>))
                        .route("/calories", web::get().to(users::calorie_target::<U, R, F, M>)),
                ),
        );
    }
}
