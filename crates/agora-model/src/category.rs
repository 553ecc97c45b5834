//! Category domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A top-level content category grouping forums.
///
/// Categories are displayed in ascending `position` order; both `name`
/// and `position` are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: Uuid,
    /// Unique category name.
    pub name: String,
    /// Display position (unique, ascending).
    pub position: i32,
}

impl Category {
    /// Creates a new category.
    #[must_use]
    pub fn new(name: impl Into<String>, position: i32) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            position,
        }
    }
}
