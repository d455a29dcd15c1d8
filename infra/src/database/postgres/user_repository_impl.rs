//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use lt_core::domain::entities::user::{Gender, Goal, ProfileUpdate, User};
use lt_core::errors::DomainError;
use lt_core::repositories::{NewUserRecord, UserRepository};

use super::storage_error;

/// PostgreSQL-backed user repository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        let gender: Option<String> = row
            .try_get("gender")
            .map_err(|e| storage_error("failed to get gender", e))?;
        let gender = gender
            .map(|g| {
                g.parse::<Gender>().map_err(|e| DomainError::Internal {
                    message: format!("invalid gender column: {e}"),
                })
            })
            .transpose()?;

        let goal: String = row
            .try_get("goal")
            .map_err(|e| storage_error("failed to get goal", e))?;
        let goal = goal.parse::<Goal>().map_err(|e| DomainError::Internal {
            message: format!("invalid goal column: {e}"),
        })?;

        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| storage_error("failed to get id", e))?,
            name: row
                .try_get("name")
                .map_err(|e| storage_error("failed to get name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| storage_error("failed to get email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| storage_error("failed to get password_hash", e))?,
            weight: row
                .try_get("weight")
                .map_err(|e| storage_error("failed to get weight", e))?,
            height: row
                .try_get("height")
                .map_err(|e| storage_error("failed to get height", e))?,
            age: row
                .try_get("age")
                .map_err(|e| storage_error("failed to get age", e))?,
            gender,
            activity_level: row
                .try_get("activity_level")
                .map_err(|e| storage_error("failed to get activity_level", e))?,
            goal,
        })
    }
}

const USER_COLUMNS: &str =
    "id, name, email, password_hash, weight, height, age, gender, activity_level, goal";

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUserRecord) -> Result<User, DomainError> {
        let query = format!(
            r#"
            INSERT INTO users (name, email, password_hash, goal)
            VALUES ($1, $2, $3, 'maintain')
            RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query(&query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Validation {
                    message: "email already exists".to_string(),
                },
                _ => storage_error("failed to create user", e),
            })?;

        Self::row_to_user(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1 LIMIT 1");

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find user by email", e))?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1 LIMIT 1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find user by id", e))?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<User, DomainError> {
        let query = format!(
            r#"
            UPDATE users
            SET weight = COALESCE($2, weight),
                height = COALESCE($3, height),
                age = COALESCE($4, age),
                gender = COALESCE($5, gender),
                activity_level = COALESCE($6, activity_level),
                goal = COALESCE($7, goal)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query(&query)
            .bind(id)
            .bind(update.weight)
            .bind(update.height)
            .bind(update.age)
            .bind(update.gender.map(|g| g.as_str()))
            .bind(update.activity_level)
            .bind(update.goal.map(|g| g.as_str()))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to update profile", e))?
            .ok_or(DomainError::NotFound {
                resource: "user".to_string(),
            })?;

        Self::row_to_user(&row)
    }
}
