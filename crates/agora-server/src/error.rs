//! API error types.
//!
//! Maps internal errors to HTTP responses. Conflicts and missing
//! entities keep their detail; everything unexpected is logged with
//! full context server-side and surfaced as an opaque failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use agora_auth::AuthError;
use agora_cache::CacheError;
use agora_storage::StorageError;

/// Errors that can occur in the HTTP API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{entity_type} not found")]
    NotFound {
        /// Type of entity (e.g., "Forum", "Thread").
        entity_type: &'static str,
    },

    /// The thread is locked and rejects new posts.
    #[error("thread is locked")]
    ThreadLocked,

    /// The caller lacks the role or ownership this operation requires.
    #[error("{0}")]
    Forbidden(String),

    /// Invalid request data.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication core error.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Storage layer error.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Cache layer error.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl ApiError {
    /// Creates a not found error.
    #[must_use]
    pub const fn not_found(entity_type: &'static str) -> Self {
        Self::NotFound { entity_type }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ThreadLocked => StatusCode::CONFLICT,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => match err {
                AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
                AuthError::IncorrectUsernameOrPassword
                | AuthError::InvalidRefreshToken
                | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::InsufficientPermission => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Storage(err) => match err {
                StorageError::NotFound { .. } => StatusCode::NOT_FOUND,
                StorageError::Duplicate { .. } => StatusCode::CONFLICT,
                StorageError::InvalidData(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::ThreadLocked => "thread_locked",
            Self::Forbidden(_) => "forbidden",
            Self::BadRequest(_) => "bad_request",
            Self::Auth(err) => match err {
                AuthError::UsernameTaken | AuthError::EmailTaken => "conflict",
                AuthError::IncorrectUsernameOrPassword => "incorrect_username_or_password",
                AuthError::InvalidRefreshToken => "invalid_refresh_token",
                AuthError::InvalidToken => "could_not_validate_credentials",
                AuthError::InsufficientPermission => "insufficient_permissions",
                _ => "internal_error",
            },
            Self::Storage(err) => match err {
                StorageError::NotFound { .. } => "not_found",
                StorageError::Duplicate { .. } => "conflict",
                StorageError::InvalidData(_) => "bad_request",
                _ => "internal_error",
            },
            Self::Cache(_) => "internal_error",
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error: String,
    /// Human-readable error message.
    pub error_description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Unexpected failures keep their detail in the server log only.
        let description = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "An unexpected error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: self.error_code().to_string(),
            error_description: description,
        };

        if status == StatusCode::UNAUTHORIZED {
            (status, [("WWW-Authenticate", "Bearer")], Json(body)).into_response()
        } else {
            (status, Json(body)).into_response()
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_mapping() {
        let err = ApiError::Auth(AuthError::UsernameTaken);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "conflict");
    }

    #[test]
    fn credential_failures_are_unauthorized() {
        for err in [
            ApiError::Auth(AuthError::IncorrectUsernameOrPassword),
            ApiError::Auth(AuthError::InvalidRefreshToken),
            ApiError::Auth(AuthError::InvalidToken),
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn infrastructure_failures_are_opaque() {
        let err = ApiError::Auth(AuthError::Internal("secret detail".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "internal_error");
    }

    #[test]
    fn storage_mapping() {
        let err = ApiError::Storage(StorageError::duplicate("User", "email", "a@x.com"));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = ApiError::Storage(StorageError::not_found("Thread", uuid::Uuid::nil()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
