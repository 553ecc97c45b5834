//! Session store operations.
//!
//! The session store is the authority on refresh-token validity and on
//! cached permission sets. A refresh token that is not present in the
//! store is invalid, whether it expired, was never issued, or was
//! already redeemed.

use std::collections::HashSet;
use std::time::Duration;

use agora_model::Role;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CacheResult;

/// The identity recorded against a refresh token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSession {
    /// The user the token was issued to.
    pub user_id: Uuid,
    /// The user's role at issue time.
    pub role: Role,
}

/// Session store provider.
///
/// Implementations must be thread-safe. Single-key operations are
/// assumed to be internally atomic; [`SessionStore::take_refresh`] in
/// particular must be a true get-and-delete so that two concurrent
/// redemptions of the same token cannot both succeed.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Records a refresh token with the given TTL.
    async fn store_refresh(
        &self,
        token: &str,
        session: &RefreshSession,
        ttl: Duration,
    ) -> CacheResult<()>;

    /// Atomically removes and returns the session for a refresh token.
    ///
    /// Returns `None` if the token is unknown, expired, or was already
    /// taken by a concurrent redemption.
    async fn take_refresh(&self, token: &str) -> CacheResult<Option<RefreshSession>>;

    /// Deletes a refresh token without redeeming it.
    async fn revoke_refresh(&self, token: &str) -> CacheResult<()>;

    /// Adds permissions to a user's cached permission set.
    async fn grant_permissions(&self, user_id: Uuid, permissions: &[String]) -> CacheResult<u64>;

    /// Returns a user's cached permission set.
    ///
    /// An absent key yields an empty set; callers treat that as "no
    /// permissions" (fail closed).
    async fn permissions(&self, user_id: Uuid) -> CacheResult<HashSet<String>>;
}
