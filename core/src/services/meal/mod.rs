//! Meal logging and nutrition aggregation.

pub mod service;

pub use service::MealService;
