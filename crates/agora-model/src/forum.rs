//! Forum domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A forum: a board under a category that holds threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forum {
    /// Unique identifier.
    pub id: Uuid,
    /// Category this forum belongs to.
    pub category_id: Uuid,
    /// Forum name.
    pub name: String,
    /// Short description shown in listings.
    pub description: Option<String>,
    /// Display position (unique, ascending).
    pub position: i32,
}

impl Forum {
    /// Creates a new forum under a category.
    #[must_use]
    pub fn new(category_id: Uuid, name: impl Into<String>, position: i32) -> Self {
        Self {
            id: Uuid::now_v7(),
            category_id,
            name: name.into(),
            description: None,
            position,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
