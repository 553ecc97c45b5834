//! Authentication error types.
//!
//! The taxonomy is deliberately asymmetric: conflicts name the field
//! that clashed, while authentication failures stay generic so callers
//! cannot tell an unknown username from a wrong password.

use std::fmt;

use agora_cache::CacheError;
use agora_storage::StorageError;

/// Authentication operation errors.
#[derive(Debug)]
pub enum AuthError {
    /// The requested username is already registered.
    UsernameTaken,
    /// The requested email is already registered.
    EmailTaken,
    /// Login failed. Covers both unknown username and wrong password.
    IncorrectUsernameOrPassword,
    /// The refresh token is unknown, expired, or already redeemed.
    InvalidRefreshToken,
    /// The user lacks one or more required permissions.
    InsufficientPermission,
    /// The access token failed signature, expiry, or subject checks.
    InvalidToken,
    /// Persistent store failure.
    Storage(StorageError),
    /// Session store failure.
    Session(CacheError),
    /// Internal error (hashing or signing failure, misconfiguration).
    Internal(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsernameTaken => write!(f, "username already exists"),
            Self::EmailTaken => write!(f, "email already exists"),
            Self::IncorrectUsernameOrPassword => write!(f, "incorrect username or password"),
            Self::InvalidRefreshToken => write!(f, "invalid refresh token"),
            Self::InsufficientPermission => write!(f, "insufficient permissions"),
            Self::InvalidToken => write!(f, "could not validate credentials"),
            Self::Storage(err) => write!(f, "storage error: {err}"),
            Self::Session(err) => write!(f, "session store error: {err}"),
            Self::Internal(msg) => write!(f, "internal authentication error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AuthError::IncorrectUsernameOrPassword;
        assert_eq!(err.to_string(), "incorrect username or password");

        let err = AuthError::InvalidToken;
        assert_eq!(err.to_string(), "could not validate credentials");
    }

    #[test]
    fn conflicts_are_distinguishable() {
        assert_ne!(
            AuthError::UsernameTaken.to_string(),
            AuthError::EmailTaken.to_string()
        );
    }
}
