//! Forum storage provider trait.

use agora_model::Forum;
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;

/// A partial update to a forum. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ForumPatch {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New parent category.
    pub category_id: Option<Uuid>,
    /// New display position.
    pub position: Option<i32>,
}

/// Provider for forum storage operations.
#[async_trait]
pub trait ForumProvider: Send + Sync {
    /// Creates a new forum.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` when the position is taken and
    /// `StorageError::InvalidData` when the category does not exist.
    async fn create(&self, forum: &Forum) -> StorageResult<()>;

    /// Gets a forum by ID.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Forum>>;

    /// Lists all forums in ascending position order.
    async fn list(&self) -> StorageResult<Vec<Forum>>;

    /// Applies a partial update and returns the updated forum.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the forum doesn't exist.
    async fn update(&self, id: Uuid, patch: &ForumPatch) -> StorageResult<Forum>;

    /// Returns the highest position currently in use.
    async fn max_position(&self) -> StorageResult<Option<i32>>;
}
