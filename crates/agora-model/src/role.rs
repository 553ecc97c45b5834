//! Role domain model.
//!
//! Roles form a closed, ordered set. Authorization checks compare ranks
//! through [`Role::is_at_least`] instead of matching on role names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user role.
///
/// The set is fixed: every user holds exactly one of these. Variants are
/// declared in ascending order of privilege so the derived ordering can
/// back rank comparisons.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular registered user.
    #[default]
    User,
    /// Moderator: can pin, lock, and edit other users' threads.
    Moderator,
    /// Administrator: full content management and the dashboard.
    Admin,
}

impl Role {
    /// All roles, in ascending order of privilege.
    pub const ALL: [Self; 3] = [Self::User, Self::Moderator, Self::Admin];

    /// Returns the lowercase wire name of the role.
    ///
    /// This is the form embedded in access tokens and stored in the
    /// database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Checks whether this role grants at least the privileges of `other`.
    #[must_use]
    pub fn is_at_least(&self, other: Self) -> bool {
        *self >= other
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Parses a role name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Role::Admin.is_at_least(Role::Moderator));
        assert!(Role::Admin.is_at_least(Role::Admin));
        assert!(Role::Moderator.is_at_least(Role::User));
        assert!(!Role::User.is_at_least(Role::Moderator));
        assert!(!Role::Moderator.is_at_least(Role::Admin));
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("MODERATOR".parse::<Role>().unwrap(), Role::Moderator);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn wire_names_are_lowercase() {
        for role in Role::ALL {
            assert_eq!(role.as_str(), role.as_str().to_lowercase());
        }
    }

    #[test]
    fn default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }
}
