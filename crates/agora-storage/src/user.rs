//! User storage provider trait.

use agora_model::User;
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for user storage operations.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Creates a new user.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` with `field` set to `username`
    /// or `email` when the corresponding unique constraint fires.
    async fn create(&self, user: &User) -> StorageResult<()>;

    /// Gets a user by ID.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<User>>;

    /// Gets a user by username.
    async fn get_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    /// Lists users ordered by registration time, newest first.
    async fn list(&self, offset: u64, limit: u32) -> StorageResult<Vec<User>>;

    /// Counts all users.
    async fn count(&self) -> StorageResult<u64>;
}
