//! Post storage provider trait.

use agora_model::Post;
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for post storage operations.
#[async_trait]
pub trait PostProvider: Send + Sync {
    /// Creates a new post.
    async fn create(&self, post: &Post) -> StorageResult<()>;

    /// Gets a post by ID.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Post>>;

    /// Lists a thread's posts, oldest first.
    async fn list_by_thread(&self, thread_id: Uuid) -> StorageResult<Vec<Post>>;

    /// Deletes a post by ID.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the post doesn't exist.
    async fn delete(&self, id: Uuid) -> StorageResult<()>;
}
