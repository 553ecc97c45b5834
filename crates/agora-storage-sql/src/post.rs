//! `PostgreSQL` implementation of the post storage provider.

use agora_model::Post;
use agora_storage::error::StorageResult;
use agora_storage::PostProvider;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::convert::post_from_row;
use crate::entities::PostRow;
use crate::error::{from_sqlx_error, not_found};

/// Shared SELECT joining posts with their author's username.
const SELECT_POST: &str = r"SELECT p.*, u.username AS author_name
    FROM posts p JOIN users u ON u.id = p.author_id";

/// `PostgreSQL` post storage provider.
pub struct PgPostProvider {
    pool: PgPool,
}

impl PgPostProvider {
    /// Creates a new `PostgreSQL` post provider.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostProvider for PgPostProvider {
    async fn create(&self, post: &Post) -> StorageResult<()> {
        sqlx::query(
            r"INSERT INTO posts (id, thread_id, author_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(post.id)
        .bind(post.thread_id)
        .bind(post.author_id)
        .bind(&post.content)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Post>> {
        let row: Option<PostRow> = sqlx::query_as(&format!("{SELECT_POST} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(row.map(post_from_row))
    }

    async fn list_by_thread(&self, thread_id: Uuid) -> StorageResult<Vec<Post>> {
        let rows: Vec<PostRow> = sqlx::query_as(&format!(
            "{SELECT_POST} WHERE p.thread_id = $1 ORDER BY p.created_at"
        ))
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        Ok(rows.into_iter().map(post_from_row).collect())
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found("Post", id));
        }

        Ok(())
    }
}
