//! Repository interfaces abstracting persistence away from the services.
//!
//! Concrete PostgreSQL implementations live in `lt_infra`; in-memory mocks
//! for tests live in [`mock`].

mod food;
mod meal;
mod revocation;
mod user;

pub mod mock;

pub use food::FoodRepository;
pub use meal::MealRepository;
pub use revocation::RevocationRepository;
pub use user::{NewUserRecord, UserRepository};
