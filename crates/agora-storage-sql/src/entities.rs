//! Database entity types for `SQLx`.
//!
//! These types map directly to database rows and are converted
//! to/from domain models in `convert`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for users.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    /// Unique identifier.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Unique email.
    pub email: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
    /// Role name (one of the seeded roles).
    pub role: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Database row for categories.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    /// Unique identifier.
    pub id: Uuid,
    /// Unique name.
    pub name: String,
    /// Unique display position.
    pub position: i32,
}

/// Database row for forums.
#[derive(Debug, Clone, FromRow)]
pub struct ForumRow {
    /// Unique identifier.
    pub id: Uuid,
    /// Parent category.
    pub category_id: Uuid,
    /// Forum name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unique display position.
    pub position: i32,
}

/// Database row for threads, joined with the author's username.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadRow {
    /// Unique identifier.
    pub id: Uuid,
    /// Parent forum.
    pub forum_id: Uuid,
    /// Author user id.
    pub author_id: Uuid,
    /// Author username (from the users join).
    pub author_name: String,
    /// Thread title.
    pub title: String,
    /// Pinned flag.
    pub is_pinned: bool,
    /// Locked flag.
    pub is_locked: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Database row for posts, joined with the author's username.
#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    /// Unique identifier.
    pub id: Uuid,
    /// Parent thread.
    pub thread_id: Uuid,
    /// Author user id.
    pub author_id: Uuid,
    /// Author username (from the users join).
    pub author_name: String,
    /// Post body.
    pub content: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}
