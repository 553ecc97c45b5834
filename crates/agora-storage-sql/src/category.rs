//! `PostgreSQL` implementation of the category storage provider.

use agora_model::Category;
use agora_storage::error::StorageResult;
use agora_storage::{CategoryProvider, StorageError};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::convert::category_from_row;
use crate::entities::CategoryRow;
use crate::error::{from_sqlx_error, unique_violation};

/// `PostgreSQL` category storage provider.
pub struct PgCategoryProvider {
    pool: PgPool,
}

impl PgCategoryProvider {
    /// Creates a new `PostgreSQL` category provider.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryProvider for PgCategoryProvider {
    async fn create(&self, category: &Category) -> StorageResult<()> {
        sqlx::query("INSERT INTO categories (id, name, position) VALUES ($1, $2, $3)")
            .bind(category.id)
            .bind(&category.name)
            .bind(category.position)
            .execute(&self.pool)
            .await
            .map_err(|e| match unique_violation(&e) {
                Some(c) if c.contains("name") => {
                    StorageError::duplicate("Category", "name", &category.name)
                }
                Some(c) if c.contains("position") => StorageError::duplicate(
                    "Category",
                    "position",
                    category.position.to_string(),
                ),
                _ => from_sqlx_error(e),
            })?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Category>> {
        let row: Option<CategoryRow> = sqlx::query_as("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(row.map(category_from_row))
    }

    async fn list(&self) -> StorageResult<Vec<Category>> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT * FROM categories ORDER BY position")
                .fetch_all(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

        Ok(rows.into_iter().map(category_from_row).collect())
    }

    async fn max_position(&self) -> StorageResult<Option<i32>> {
        let (max,): (Option<i32>,) = sqlx::query_as("SELECT MAX(position) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(max)
    }
}
