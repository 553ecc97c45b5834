//! `PostgreSQL` implementation of the role storage provider.

use agora_model::Role;
use agora_storage::error::StorageResult;
use agora_storage::RoleProvider;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::from_sqlx_error;

/// `PostgreSQL` role storage provider.
pub struct PgRoleProvider {
    pool: PgPool,
}

impl PgRoleProvider {
    /// Creates a new `PostgreSQL` role provider.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleProvider for PgRoleProvider {
    async fn seed_defaults(&self) -> StorageResult<Vec<Role>> {
        let mut seeded = Vec::new();

        for role in Role::ALL {
            let result = sqlx::query("INSERT INTO roles (name) VALUES ($1) ON CONFLICT DO NOTHING")
                .bind(role.as_str())
                .execute(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

            if result.rows_affected() > 0 {
                seeded.push(role);
            }
        }

        Ok(seeded)
    }

    async fn list(&self) -> StorageResult<Vec<Role>> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        rows.into_iter()
            .map(|(name,)| {
                name.parse().map_err(|e: agora_model::ParseRoleError| {
                    agora_storage::StorageError::InvalidData(e.to_string())
                })
            })
            .collect()
    }
}
