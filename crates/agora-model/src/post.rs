//! Post domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post inside a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: Uuid,
    /// Thread this post belongs to.
    pub thread_id: Uuid,
    /// Author user id.
    pub author_id: Uuid,
    /// Author username at read time.
    pub author_name: String,
    /// Post body.
    pub content: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Creates a new post.
    #[must_use]
    pub fn new(
        thread_id: Uuid,
        author_id: Uuid,
        author_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            thread_id,
            author_id,
            author_name: author_name.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
