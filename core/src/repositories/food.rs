//! Food repository trait.

use async_trait::async_trait;

use crate::domain::entities::food::Food;
use crate::errors::DomainError;

/// Read-only repository over the food nutrition table.
#[async_trait]
pub trait FoodRepository: Send + Sync {
    /// Find a food by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Food>, DomainError>;

    /// Case-insensitive substring search; returns the first match.
    async fn search_by_name(&self, query: &str) -> Result<Option<Food>, DomainError>;
}
