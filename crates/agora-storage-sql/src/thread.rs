//! `PostgreSQL` implementation of the thread storage provider.

use agora_model::Thread;
use agora_storage::error::StorageResult;
use agora_storage::ThreadProvider;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::convert::thread_from_row;
use crate::entities::ThreadRow;
use crate::error::{from_sqlx_error, not_found};

/// Shared SELECT joining threads with their author's username.
const SELECT_THREAD: &str = r"SELECT t.*, u.username AS author_name
    FROM threads t JOIN users u ON u.id = t.author_id";

/// `PostgreSQL` thread storage provider.
pub struct PgThreadProvider {
    pool: PgPool,
}

impl PgThreadProvider {
    /// Creates a new `PostgreSQL` thread provider.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches a thread by ID, erroring when it is missing.
    async fn fetch_required(&self, id: Uuid) -> StorageResult<Thread> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Thread", id))
    }
}

#[async_trait]
impl ThreadProvider for PgThreadProvider {
    async fn create(&self, thread: &Thread) -> StorageResult<()> {
        sqlx::query(
            r"INSERT INTO threads (id, forum_id, author_id, title, is_pinned, is_locked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(thread.id)
        .bind(thread.forum_id)
        .bind(thread.author_id)
        .bind(&thread.title)
        .bind(thread.is_pinned)
        .bind(thread.is_locked)
        .bind(thread.created_at)
        .bind(thread.updated_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Thread>> {
        let row: Option<ThreadRow> =
            sqlx::query_as(&format!("{SELECT_THREAD} WHERE t.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

        Ok(row.map(thread_from_row))
    }

    async fn list_by_forum(
        &self,
        forum_id: Uuid,
        offset: u64,
        limit: u32,
    ) -> StorageResult<Vec<Thread>> {
        #[allow(clippy::cast_possible_wrap)]
        let offset = offset as i64;
        let limit = i64::from(limit);

        let rows: Vec<ThreadRow> = sqlx::query_as(&format!(
            "{SELECT_THREAD} WHERE t.forum_id = $1
            ORDER BY t.is_pinned DESC, t.created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(forum_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        Ok(rows.into_iter().map(thread_from_row).collect())
    }

    async fn count_by_forum(&self, forum_id: Uuid) -> StorageResult<u64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM threads WHERE forum_id = $1")
                .bind(forum_id)
                .fetch_one(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

        #[allow(clippy::cast_sign_loss)]
        Ok(count as u64)
    }

    async fn set_pinned(&self, id: Uuid, pinned: bool) -> StorageResult<Thread> {
        let result =
            sqlx::query("UPDATE threads SET is_pinned = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(pinned)
                .execute(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found("Thread", id));
        }

        self.fetch_required(id).await
    }

    async fn set_locked(&self, id: Uuid, locked: bool) -> StorageResult<Thread> {
        let result =
            sqlx::query("UPDATE threads SET is_locked = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(locked)
                .execute(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found("Thread", id));
        }

        self.fetch_required(id).await
    }

    async fn update_title(&self, id: Uuid, title: &str) -> StorageResult<Thread> {
        let result =
            sqlx::query("UPDATE threads SET title = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(title)
                .execute(&self.pool)
                .await
                .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found("Thread", id));
        }

        self.fetch_required(id).await
    }
}
