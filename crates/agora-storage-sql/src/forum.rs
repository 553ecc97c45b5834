//! `PostgreSQL` implementation of the forum storage provider.

use agora_model::Forum;
use agora_storage::error::StorageResult;
use agora_storage::{ForumPatch, ForumProvider, StorageError};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::convert::forum_from_row;
use crate::entities::ForumRow;
use crate::error::{from_sqlx_error, not_found, unique_violation};

/// `PostgreSQL` forum storage provider.
pub struct PgForumProvider {
    pool: PgPool,
}

impl PgForumProvider {
    /// Creates a new `PostgreSQL` forum provider.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumProvider for PgForumProvider {
    async fn create(&self, forum: &Forum) -> StorageResult<()> {
        sqlx::query(
            r"INSERT INTO forums (id, category_id, name, description, position)
            VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(forum.id)
        .bind(forum.category_id)
        .bind(&forum.name)
        .bind(&forum.description)
        .bind(forum.position)
        .execute(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(c) if c.contains("position") => {
                StorageError::duplicate("Forum", "position", forum.position.to_string())
            }
            _ => from_sqlx_error(e),
        })?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Forum>> {
        let row: Option<ForumRow> = sqlx::query_as("SELECT * FROM forums WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(row.map(forum_from_row))
    }

    async fn list(&self) -> StorageResult<Vec<Forum>> {
        let rows: Vec<ForumRow> = sqlx::query_as("SELECT * FROM forums ORDER BY position")
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(rows.into_iter().map(forum_from_row).collect())
    }

    async fn update(&self, id: Uuid, patch: &ForumPatch) -> StorageResult<Forum> {
        let row: Option<ForumRow> = sqlx::query_as(
            r"UPDATE forums SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                category_id = COALESCE($4, category_id),
                position = COALESCE($5, position)
            WHERE id = $1
            RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(patch.category_id)
        .bind(patch.position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(c) if c.contains("position") => StorageError::duplicate(
                "Forum",
                "position",
                patch.position.map(|p| p.to_string()).unwrap_or_default(),
            ),
            _ => from_sqlx_error(e),
        })?;

        row.map(forum_from_row).ok_or_else(|| not_found("Forum", id))
    }

    async fn max_position(&self) -> StorageResult<Option<i32>> {
        let (max,): (Option<i32>,) = sqlx::query_as("SELECT MAX(position) FROM forums")
            .fetch_one(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(max)
    }
}
