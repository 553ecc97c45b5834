//! Redis statistics cache implementation.

use agora_cache::{
    AtomicCacheProvider, CacheProvider, CacheResult, ForumStats, ListCacheProvider, RecentUser,
    StatsCache, RECENT_USERS_CAP,
};
use async_trait::async_trait;
use uuid::Uuid;

use crate::provider::RedisCacheProvider;

const RECENT_USERS_KEY: &str = "recent_users";
const USER_POSTS_PREFIX: &str = "user_posts";
const FORUM_POSTS_PREFIX: &str = "forum_posts";
const FORUM_THREADS_PREFIX: &str = "forum_threads";

/// Redis-backed statistics cache.
#[derive(Clone)]
pub struct RedisStatsCache {
    cache: RedisCacheProvider,
}

impl RedisStatsCache {
    /// Creates a new Redis statistics cache.
    #[must_use]
    pub const fn new(cache: RedisCacheProvider) -> Self {
        Self { cache }
    }

    fn user_posts_key(user_id: Uuid) -> String {
        format!("{USER_POSTS_PREFIX}:{user_id}")
    }

    fn forum_posts_key(forum_id: Uuid) -> String {
        format!("{FORUM_POSTS_PREFIX}:{forum_id}")
    }

    fn forum_threads_key(forum_id: Uuid) -> String {
        format!("{FORUM_THREADS_PREFIX}:{forum_id}")
    }
}

#[allow(clippy::cast_possible_wrap)]
const fn cap_index() -> i64 {
    RECENT_USERS_CAP as i64 - 1
}

#[async_trait]
impl StatsCache for RedisStatsCache {
    async fn push_recent_user(&self, user: &RecentUser) -> CacheResult<()> {
        self.cache.lpush(RECENT_USERS_KEY, user).await?;
        self.cache.ltrim(RECENT_USERS_KEY, 0, cap_index()).await
    }

    async fn recent_users(&self) -> CacheResult<Vec<RecentUser>> {
        self.cache.lrange(RECENT_USERS_KEY, 0, cap_index()).await
    }

    async fn on_post_created(&self, author_id: Uuid, forum_id: Uuid) -> CacheResult<()> {
        self.cache.incr(&Self::user_posts_key(author_id), 1).await?;
        self.cache.incr(&Self::forum_posts_key(forum_id), 1).await?;
        Ok(())
    }

    async fn on_post_deleted(&self, author_id: Uuid, forum_id: Uuid) -> CacheResult<()> {
        self.cache.decr(&Self::user_posts_key(author_id), 1).await?;
        self.cache.decr(&Self::forum_posts_key(forum_id), 1).await?;
        Ok(())
    }

    async fn on_thread_created(&self, forum_id: Uuid) -> CacheResult<()> {
        self.cache
            .incr(&Self::forum_threads_key(forum_id), 1)
            .await?;
        Ok(())
    }

    async fn forum_stats(&self, forum_id: Uuid) -> CacheResult<ForumStats> {
        let posts: Option<i64> = self.cache.get(&Self::forum_posts_key(forum_id)).await?;
        let threads: Option<i64> = self.cache.get(&Self::forum_threads_key(forum_id)).await?;

        Ok(ForumStats {
            posts: posts.unwrap_or(0),
            threads: threads.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_formats() {
        let id = Uuid::nil();
        assert_eq!(RedisStatsCache::user_posts_key(id), format!("user_posts:{id}"));
        assert_eq!(
            RedisStatsCache::forum_posts_key(id),
            format!("forum_posts:{id}")
        );
        assert_eq!(
            RedisStatsCache::forum_threads_key(id),
            format!("forum_threads:{id}")
        );
    }

    #[test]
    fn trim_keeps_ten_entries() {
        assert_eq!(cap_index(), 9);
    }
}
