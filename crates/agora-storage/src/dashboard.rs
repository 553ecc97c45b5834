//! Dashboard storage provider trait.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::StorageResult;

/// Entity counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    /// Total registered users.
    pub users: u64,
    /// Total categories.
    pub categories: u64,
    /// Total forums.
    pub forums: u64,
    /// Total threads.
    pub threads: u64,
    /// Total posts.
    pub posts: u64,
}

/// Provider for dashboard counters.
#[async_trait]
pub trait DashboardProvider: Send + Sync {
    /// Counts every entity type in one round trip.
    async fn counts(&self) -> StorageResult<DashboardCounts>;
}
