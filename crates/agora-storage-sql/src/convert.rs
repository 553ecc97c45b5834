//! Row-to-domain-model conversion.

use agora_model::{Category, Forum, Post, Role, Thread, User};
use agora_storage::{StorageError, StorageResult};

use crate::entities::{CategoryRow, ForumRow, PostRow, ThreadRow, UserRow};

/// Converts a user row to the domain model.
///
/// ## Errors
///
/// Returns `StorageError::InvalidData` when the stored role name is not
/// one of the seeded roles.
pub fn user_from_row(row: UserRow) -> StorageResult<User> {
    let role: Role = row
        .role
        .parse()
        .map_err(|e: agora_model::ParseRoleError| StorageError::InvalidData(e.to_string()))?;

    Ok(User {
        id: row.id,
        username: row.username,
        email: row.email,
        password_hash: row.password_hash,
        role,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

/// Converts a category row to the domain model.
pub fn category_from_row(row: CategoryRow) -> Category {
    Category {
        id: row.id,
        name: row.name,
        position: row.position,
    }
}

/// Converts a forum row to the domain model.
pub fn forum_from_row(row: ForumRow) -> Forum {
    Forum {
        id: row.id,
        category_id: row.category_id,
        name: row.name,
        description: row.description,
        position: row.position,
    }
}

/// Converts a thread row to the domain model.
pub fn thread_from_row(row: ThreadRow) -> Thread {
    Thread {
        id: row.id,
        forum_id: row.forum_id,
        author_id: row.author_id,
        author_name: row.author_name,
        title: row.title,
        is_pinned: row.is_pinned,
        is_locked: row.is_locked,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// Converts a post row to the domain model.
pub fn post_from_row(row: PostRow) -> Post {
    Post {
        id: row.id,
        thread_id: row.thread_id,
        author_id: row.author_id,
        author_name: row.author_name,
        content: row.content,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_user_row(role: &str) -> UserRow {
        let now = Utc::now();
        UserRow {
            id: Uuid::now_v7(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn user_row_round_trip() {
        let user = user_from_row(sample_user_row("moderator")).unwrap();
        assert_eq!(user.role, Role::Moderator);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn unknown_role_is_invalid_data() {
        let err = user_from_row(sample_user_row("overlord")).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }
}
