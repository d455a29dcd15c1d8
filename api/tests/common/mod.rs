//! Shared fixtures for the API integration tests.

use std::sync::Arc;

use actix_web::web;

use lt_api::routes::AppState;
use lt_core::domain::entities::food::Food;
use lt_core::repositories::mock::{
    MockFoodRepository, MockMealRepository, MockRevocationStore, MockUserRepository,
};
use lt_core::services::auth::AuthService;
use lt_core::services::meal::MealService;
use lt_core::services::profile::ProfileService;
use lt_core::services::token::{TokenCodec, TokenService, TokenServiceConfig};
use lt_shared::config::CookieConfig;

pub type TestState =
    AppState<MockUserRepository, MockRevocationStore, MockFoodRepository, MockMealRepository>;

/// Nutrition values per 100g
pub fn sample_foods() -> Vec<Food> {
    vec![
        Food {
            id: 1,
            name: "Rice".to_string(),
            calories: 130.0,
            protein: 2.7,
            carbs: 28.0,
            fat: 0.3,
        },
        Food {
            id: 2,
            name: "Chicken breast".to_string(),
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
        },
    ]
}

/// State backed by in-memory repositories, seeded with [`sample_foods`].
pub fn test_state() -> (web::Data<TestState>, Arc<TokenCodec>) {
    let users = Arc::new(MockUserRepository::new());
    let foods = Arc::new(MockFoodRepository::with_foods(sample_foods()));
    let meals = Arc::new(MockMealRepository::new());

    let config = TokenServiceConfig::new("test-access-secret", "test-refresh-secret");
    let token_service = TokenService::new(MockRevocationStore::new(), config);
    let codec = Arc::new(token_service.access_codec());

    let state = web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(Arc::clone(&users), token_service)),
        profile_service: Arc::new(ProfileService::new(users)),
        meal_service: Arc::new(MealService::new(meals, Arc::clone(&foods))),
        foods,
        cookies: CookieConfig::default(),
    });

    (state, codec)
}

/// Route registration specialized to the mock repositories.
pub fn mock_routes(codec: Arc<TokenCodec>) -> impl FnOnce(&mut web::ServiceConfig) {
    lt_api::routes::configure::<
        MockUserRepository,
        MockRevocationStore,
        MockFoodRepository,
        MockMealRepository,
    >(codec)
}
