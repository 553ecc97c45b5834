//! Role storage provider trait.

use agora_model::Role;
use async_trait::async_trait;

use crate::error::StorageResult;

/// Provider for role storage operations.
///
/// The role set is fixed; the store only needs to seed it once and
/// list it back.
#[async_trait]
pub trait RoleProvider: Send + Sync {
    /// Seeds the default roles if the role table is empty.
    ///
    /// Returns the roles that were inserted (empty when already seeded).
    async fn seed_defaults(&self) -> StorageResult<Vec<Role>>;

    /// Lists the roles present in the store.
    async fn list(&self) -> StorageResult<Vec<Role>>;
}
