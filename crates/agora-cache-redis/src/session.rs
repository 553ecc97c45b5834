//! Redis session store implementation.

use std::collections::HashSet;
use std::time::Duration;

use agora_cache::{
    AtomicCacheProvider, CacheProvider, CacheResult, RefreshSession, SessionStore,
    SetCacheProvider,
};
use async_trait::async_trait;
use uuid::Uuid;

use crate::provider::RedisCacheProvider;

/// Key prefix for refresh-token entries.
const REFRESH_TOKEN_PREFIX: &str = "refresh_token";

/// Key prefix for per-user permission sets.
const PERMISSIONS_PREFIX: &str = "user_permissions";

/// Redis-backed session store.
///
/// Refresh tokens map to their [`RefreshSession`] payload under a TTL;
/// redemption uses `GETDEL`, so a token can be taken exactly once.
#[derive(Clone)]
pub struct RedisSessionStore {
    cache: RedisCacheProvider,
}

impl RedisSessionStore {
    /// Creates a new Redis session store.
    #[must_use]
    pub const fn new(cache: RedisCacheProvider) -> Self {
        Self { cache }
    }

    fn refresh_key(token: &str) -> String {
        format!("{REFRESH_TOKEN_PREFIX}:{token}")
    }

    fn permissions_key(user_id: Uuid) -> String {
        format!("{PERMISSIONS_PREFIX}:{user_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn store_refresh(
        &self,
        token: &str,
        session: &RefreshSession,
        ttl: Duration,
    ) -> CacheResult<()> {
        self.cache
            .set(&Self::refresh_key(token), session, Some(ttl))
            .await
    }

    async fn take_refresh(&self, token: &str) -> CacheResult<Option<RefreshSession>> {
        self.cache.get_del(&Self::refresh_key(token)).await
    }

    async fn revoke_refresh(&self, token: &str) -> CacheResult<()> {
        self.cache.delete(&Self::refresh_key(token)).await
    }

    async fn grant_permissions(&self, user_id: Uuid, permissions: &[String]) -> CacheResult<u64> {
        self.cache
            .sadd(&Self::permissions_key(user_id), permissions)
            .await
    }

    async fn permissions(&self, user_id: Uuid) -> CacheResult<HashSet<String>> {
        let members: Vec<String> = self
            .cache
            .smembers(&Self::permissions_key(user_id))
            .await?;
        Ok(members.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_formats() {
        let token = "q5h8VbXm";
        assert_eq!(
            RedisSessionStore::refresh_key(token),
            "refresh_token:q5h8VbXm"
        );

        let user_id = Uuid::nil();
        assert_eq!(
            RedisSessionStore::permissions_key(user_id),
            format!("user_permissions:{user_id}")
        );
    }
}
