//! `PostgreSQL` implementation of the user storage provider.

use agora_model::User;
use agora_storage::error::StorageResult;
use agora_storage::{StorageError, UserProvider};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::convert::user_from_row;
use crate::entities::UserRow;
use crate::error::{from_sqlx_error, unique_violation};

/// `PostgreSQL` user storage provider.
pub struct PgUserProvider {
    pool: PgPool,
}

impl PgUserProvider {
    /// Creates a new `PostgreSQL` user provider.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProvider for PgUserProvider {
    async fn create(&self, user: &User) -> StorageResult<()> {
        sqlx::query(
            r"INSERT INTO users (id, username, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(c) if c.contains("username") => {
                StorageError::duplicate("User", "username", &user.username)
            }
            Some(c) if c.contains("email") => {
                StorageError::duplicate("User", "email", &user.email)
            }
            _ => from_sqlx_error(e),
        })?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        row.map(user_from_row).transpose()
    }

    async fn get_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        row.map(user_from_row).transpose()
    }

    async fn list(&self, offset: u64, limit: u32) -> StorageResult<Vec<User>> {
        #[allow(clippy::cast_possible_wrap)]
        let offset = offset as i64;
        let limit = i64::from(limit);

        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT * FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

        rows.into_iter().map(user_from_row).collect()
    }

    async fn count(&self) -> StorageResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        #[allow(clippy::cast_sign_loss)]
        Ok(count as u64)
    }
}
