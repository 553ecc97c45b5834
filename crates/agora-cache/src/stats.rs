//! Statistics cache operations.
//!
//! Best-effort counters and the recent-registrations feed shown on the
//! admin dashboard. Failures here must never fail the write that
//! triggered the update; callers log and move on.

use agora_model::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CacheResult;

/// How many recent registrations the feed retains.
pub const RECENT_USERS_CAP: usize = 10;

/// A recently registered user, as kept in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUser {
    /// User id.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RecentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

/// Cached per-forum counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumStats {
    /// Total posts across the forum's threads.
    pub posts: i64,
    /// Total threads in the forum.
    pub threads: i64,
}

/// Statistics cache provider.
#[async_trait]
pub trait StatsCache: Send + Sync {
    /// Pushes a user onto the recent-registrations feed, trimming it to
    /// [`RECENT_USERS_CAP`].
    async fn push_recent_user(&self, user: &RecentUser) -> CacheResult<()>;

    /// Returns the most recent registrations, newest first.
    async fn recent_users(&self) -> CacheResult<Vec<RecentUser>>;

    /// Bumps the author's and the forum's post counters.
    async fn on_post_created(&self, author_id: Uuid, forum_id: Uuid) -> CacheResult<()>;

    /// Reverses the counter updates of [`StatsCache::on_post_created`].
    async fn on_post_deleted(&self, author_id: Uuid, forum_id: Uuid) -> CacheResult<()>;

    /// Bumps the forum's thread counter.
    async fn on_thread_created(&self, forum_id: Uuid) -> CacheResult<()>;

    /// Reads a forum's cached counters. Absent counters read as zero.
    async fn forum_stats(&self, forum_id: Uuid) -> CacheResult<ForumStats>;
}
