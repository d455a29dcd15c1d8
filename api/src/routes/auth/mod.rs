//! Authentication route handlers
//!
//! This module contains the authentication endpoints:
//! - Registration and login
//! - Token refresh
//! - Logout
//!
//! Login sets the `access_token` and `refresh_token` cookies; refresh
//! renews the access cookie and logout clears both.

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use actix_web::cookie::time::Duration;
use actix_web::cookie::Cookie;

use lt_core::repositories::{FoodRepository, MealRepository, RevocationRepository, UserRepository};
use lt_core::services::auth::AuthService;
use lt_core::services::meal::MealService;
use lt_core::services::profile::ProfileService;
use lt_shared::config::CookieConfig;

/// Application state shared across handlers
pub struct AppState<U, R, F, M>
where
    U: UserRepository,
    R: RevocationRepository,
    F: FoodRepository,
    M: MealRepository,
{
    pub auth_service: Arc<AuthService<U, R>>,
    pub profile_service: Arc<ProfileService<U>>,
    pub meal_service: Arc<MealService<M, F>>,
    pub foods: Arc<F>,
    pub cookies: CookieConfig,
}

/// Build an http-only token cookie with the configured attributes.
pub(crate) fn auth_cookie(
    name: &'static str,
    value: &str,
    max_age_seconds: i64,
    config: &CookieConfig,
) -> Cookie<'static> {
    Cookie::build(name, value.to_string())
        .domain(config.domain.clone())
        .path("/")
        .max_age(Duration::seconds(max_age_seconds))
        .http_only(true)
        .secure(config.secure)
        .finish()
}

/// Cookie that instructs the browser to drop the named token cookie.
pub(crate) fn removal_cookie(name: &'static str, config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "")
        .domain(config.domain.clone())
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .finish();
    cookie.make_removal();
    cookie
}
