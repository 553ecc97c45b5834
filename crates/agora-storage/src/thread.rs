//! Thread storage provider trait.

use agora_model::Thread;
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for thread storage operations.
#[async_trait]
pub trait ThreadProvider: Send + Sync {
    /// Creates a new thread.
    async fn create(&self, thread: &Thread) -> StorageResult<()>;

    /// Gets a thread by ID.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Thread>>;

    /// Lists a forum's threads, newest first.
    async fn list_by_forum(
        &self,
        forum_id: Uuid,
        offset: u64,
        limit: u32,
    ) -> StorageResult<Vec<Thread>>;

    /// Counts a forum's threads.
    async fn count_by_forum(&self, forum_id: Uuid) -> StorageResult<u64>;

    /// Sets the pinned flag and returns the updated thread.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the thread doesn't exist.
    async fn set_pinned(&self, id: Uuid, pinned: bool) -> StorageResult<Thread>;

    /// Sets the locked flag and returns the updated thread.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the thread doesn't exist.
    async fn set_locked(&self, id: Uuid, locked: bool) -> StorageResult<Thread>;

    /// Updates the title and returns the updated thread.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the thread doesn't exist.
    async fn update_title(&self, id: Uuid, title: &str) -> StorageResult<Thread>;
}
