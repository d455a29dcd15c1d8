//! PostgreSQL repository implementations.

mod food_repository_impl;
mod meal_repository_impl;
mod revocation_repository_impl;
mod user_repository_impl;

pub use food_repository_impl::PgFoodRepository;
pub use meal_repository_impl::PgMealRepository;
pub use revocation_repository_impl::PgRevocationRepository;
pub use user_repository_impl::PgUserRepository;

use lt_core::errors::DomainError;

/// Map a sqlx failure to the domain storage error.
pub(crate) fn storage_error(context: &str, error: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: format!("{context}: {error}"),
    }
}
