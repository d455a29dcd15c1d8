//! In-memory repository implementations for testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::food::Food;
use crate::domain::entities::meal::{Meal, MealItem};
use crate::domain::entities::user::{ProfileUpdate, User};
use crate::errors::DomainError;

use super::{FoodRepository, MealRepository, NewUserRecord, RevocationRepository, UserRepository};

/// Mock user repository backed by a HashMap
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, record: NewUserRecord) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == record.email) {
            return Err(DomainError::Validation {
                message: "email already exists".to_string(),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            weight: None,
            height: None,
            age: None,
            gender: None,
            activity_level: None,
            goal: Default::default(),
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "user".to_string(),
        })?;
        user.apply_profile(update);
        Ok(user.clone())
    }
}

/// Mock food repository seeded with a fixed food list
pub struct MockFoodRepository {
    foods: Vec<Food>,
}

impl MockFoodRepository {
    pub fn new() -> Self {
        Self { foods: Vec::new() }
    }

    pub fn with_foods(foods: Vec<Food>) -> Self {
        Self { foods }
    }
}

impl Default for MockFoodRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodRepository for MockFoodRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Food>, DomainError> {
        Ok(self.foods.iter().find(|f| f.id == id).cloned())
    }

    async fn search_by_name(&self, query: &str) -> Result<Option<Food>, DomainError> {
        let query = query.to_lowercase();
        Ok(self
            .foods
            .iter()
            .find(|f| f.name.to_lowercase().contains(&query))
            .cloned())
    }
}

/// Mock meal repository backed by HashMaps
pub struct MockMealRepository {
    meals: Arc<RwLock<HashMap<i64, Meal>>>,
    items: Arc<RwLock<HashMap<i64, MealItem>>>,
    next_id: AtomicI64,
}

impl MockMealRepository {
    pub fn new() -> Self {
        Self {
            meals: Arc::new(RwLock::new(HashMap::new())),
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Backdate a meal, for aggregation tests spanning multiple days.
    pub async fn set_meal_created_at(&self, meal_id: i64, created_at: DateTime<Utc>) {
        if let Some(meal) = self.meals.write().await.get_mut(&meal_id) {
            meal.created_at = created_at;
        }
    }
}

impl Default for MockMealRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MealRepository for MockMealRepository {
    async fn create_meal(&self, user_id: i64) -> Result<Meal, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let meal = Meal {
            id,
            user_id,
            created_at: Utc::now(),
        };
        self.meals.write().await.insert(id, meal.clone());
        Ok(meal)
    }

    async fn find_meal(&self, meal_id: i64) -> Result<Option<Meal>, DomainError> {
        Ok(self.meals.read().await.get(&meal_id).cloned())
    }

    async fn add_item(
        &self,
        meal_id: i64,
        food_id: i64,
        amount: f64,
    ) -> Result<MealItem, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = MealItem {
            id,
            meal_id,
            food_id,
            amount,
        };
        self.items.write().await.insert(id, item.clone());
        Ok(item)
    }

    async fn items_for_meal(&self, meal_id: i64) -> Result<Vec<MealItem>, DomainError> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|i| i.meal_id == meal_id)
            .cloned()
            .collect())
    }

    async fn meals_for_user_between(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Meal>, DomainError> {
        Ok(self
            .meals
            .read()
            .await
            .values()
            .filter(|m| m.user_id == user_id && m.created_at >= start && m.created_at < end)
            .cloned()
            .collect())
    }
}

/// Mock revocation store backed by a HashMap keyed on the token string
pub struct MockRevocationStore {
    revoked: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl MockRevocationStore {
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationStore {
    async fn insert_revoked(&self, token: &str) -> Result<(), DomainError> {
        let mut revoked = self.revoked.write().await;
        // Re-revoking keeps the original timestamp, mirroring ON CONFLICT DO NOTHING
        revoked.entry(token.to_string()).or_insert_with(Utc::now);
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.revoked.read().await.contains_key(token))
    }
}
