//! SQL storage error types.

use agora_storage::StorageError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Converts a `SQLx` error to a storage error.
#[allow(clippy::needless_pass_by_value)]
pub fn from_sqlx_error(err: SqlxError) -> StorageError {
    match err {
        SqlxError::Database(db_err) => StorageError::Query(db_err.to_string()),
        SqlxError::PoolTimedOut => StorageError::Connection("Connection pool timeout".to_string()),
        SqlxError::PoolClosed => StorageError::Connection("Connection pool closed".to_string()),
        _ => StorageError::Internal(err.to_string()),
    }
}

/// Returns the violated constraint name when the error is a unique
/// constraint violation (`PostgreSQL` error code 23505).
pub fn unique_violation(err: &SqlxError) -> Option<String> {
    if let SqlxError::Database(db_err) = err {
        if db_err.code().is_some_and(|c| c == "23505") {
            return db_err.constraint().map(ToString::to_string);
        }
    }
    None
}

/// Creates a not found error for the given entity type and ID.
pub const fn not_found(entity_type: &'static str, id: Uuid) -> StorageError {
    StorageError::not_found(entity_type, id)
}
