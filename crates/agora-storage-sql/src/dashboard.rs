//! `PostgreSQL` implementation of the dashboard counters.

use agora_storage::error::StorageResult;
use agora_storage::{DashboardCounts, DashboardProvider};
use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::from_sqlx_error;

/// `PostgreSQL` dashboard provider.
pub struct PgDashboardProvider {
    pool: PgPool,
}

impl PgDashboardProvider {
    /// Creates a new `PostgreSQL` dashboard provider.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[allow(clippy::cast_sign_loss)]
const fn count_to_u64(count: i64) -> u64 {
    count as u64
}

#[async_trait]
impl DashboardProvider for PgDashboardProvider {
    async fn counts(&self) -> StorageResult<DashboardCounts> {
        let (users, categories, forums, threads, posts): (i64, i64, i64, i64, i64) =
            sqlx::query_as(
                r"SELECT
                    (SELECT COUNT(*) FROM users),
                    (SELECT COUNT(*) FROM categories),
                    (SELECT COUNT(*) FROM forums),
                    (SELECT COUNT(*) FROM threads),
                    (SELECT COUNT(*) FROM posts)",
            )
            .fetch_one(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        Ok(DashboardCounts {
            users: count_to_u64(users),
            categories: count_to_u64(categories),
            forums: count_to_u64(forums),
            threads: count_to_u64(threads),
            posts: count_to_u64(posts),
        })
    }
}
