//! User domain model.
//!
//! Users are the identity entities of the forum. They authenticate with
//! a password (stored only as an argon2 hash) and hold exactly one role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// A registered forum user.
///
/// `username` and `email` are each globally unique; the storage layer
/// enforces this and reports which constraint a conflicting insert hit.
/// The password is never held in plaintext: `password_hash` is a
/// PHC-formatted argon2id string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
    /// The user's role.
    pub role: Role,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the default role.
    ///
    /// `password_hash` must already be hashed; this constructor never
    /// accepts a plaintext password.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Checks whether the user holds at least moderator privileges.
    #[must_use]
    pub fn is_moderator(&self) -> bool {
        self.role.is_at_least(Role::Moderator)
    }

    /// Checks whether the user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_at_least(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_default_role() {
        let user = User::new("alice", "alice@example.com", "$argon2id$...");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_moderator());
        assert!(!user.is_admin());
    }

    #[test]
    fn with_role() {
        let user = User::new("bob", "bob@example.com", "hash").with_role(Role::Moderator);
        assert!(user.is_moderator());
        assert!(!user.is_admin());

        let admin = User::new("carol", "carol@example.com", "hash").with_role(Role::Admin);
        assert!(admin.is_moderator());
        assert!(admin.is_admin());
    }
}
