//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use si_core::domain::entities::{Id, User};
use si_core::errors::DomainError;
use si_core::repositories::UserRepository;

use super::{column, inserted_id, query_failed};

/// MySQL implementation of UserRepository
///
/// Email uniqueness is enforced by the `uq_users_email` key; a violation is
/// reported as [`DomainError::Conflict`].
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: column(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
        })
    }

    fn write_failed(e: sqlx::Error, email: &str) -> DomainError {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                tracing::warn!(email = %email, "Duplicate email rejected by storage");
                DomainError::conflict(format!("Email {} is already used by another user", email))
            }
            _ => query_failed(e),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn exists_by_id(&self, id: Id) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str, exclude_id: Option<Id>) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE email = ? AND (? IS NULL OR id <> ?)",
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(count > 0)
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_failed(e, &user.email))?;

        user.id = inserted_id(result.last_insert_id())?;
        tracing::debug!(user_id = user.id, "User row inserted");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_failed(e, &user.email))?;

        Ok(user)
    }

    async fn delete(&self, id: Id) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }
}
