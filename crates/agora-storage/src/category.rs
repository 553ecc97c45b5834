//! Category storage provider trait.

use agora_model::Category;
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for category storage operations.
#[async_trait]
pub trait CategoryProvider: Send + Sync {
    /// Creates a new category.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` when the name or position is
    /// already taken.
    async fn create(&self, category: &Category) -> StorageResult<()>;

    /// Gets a category by ID.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Category>>;

    /// Lists all categories in ascending position order.
    async fn list(&self) -> StorageResult<Vec<Category>>;

    /// Returns the highest position currently in use.
    async fn max_position(&self) -> StorageResult<Option<i32>>;
}
