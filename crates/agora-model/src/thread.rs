//! Thread domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A discussion thread inside a forum.
///
/// `author_name` is denormalized from the users table when threads are
/// read, so listings can show authors without a second query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique identifier.
    pub id: Uuid,
    /// Forum this thread belongs to.
    pub forum_id: Uuid,
    /// Author user id.
    pub author_id: Uuid,
    /// Author username at read time.
    pub author_name: String,
    /// Thread title.
    pub title: String,
    /// Pinned threads sort ahead of the rest.
    pub is_pinned: bool,
    /// Locked threads reject new posts.
    pub is_locked: bool,
    /// When the thread was created.
    pub created_at: DateTime<Utc>,
    /// When the thread was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Thread {
    /// Creates a new unpinned, unlocked thread.
    #[must_use]
    pub fn new(
        forum_id: Uuid,
        author_id: Uuid,
        author_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            forum_id,
            author_id,
            author_name: author_name.into(),
            title: title.into(),
            is_pinned: false,
            is_locked: false,
            created_at: now,
            updated_at: now,
        }
    }
}
