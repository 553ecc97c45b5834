//! # agora-storage
//!
//! Storage abstraction traits for the Agora forum backend.
//!
//! This crate defines the persistence interfaces consumed by the auth
//! core and the HTTP layer. The primary implementation is
//! PostgreSQL-based (see `agora-storage-sql`).
//!
//! Uniqueness is enforced by the store itself: providers react to the
//! resulting constraint violation instead of pre-checking, and report
//! which field conflicted via [`StorageError::Duplicate`].

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod category;
pub mod dashboard;
pub mod error;
pub mod forum;
pub mod post;
pub mod role;
pub mod thread;
pub mod user;

pub use category::CategoryProvider;
pub use dashboard::{DashboardCounts, DashboardProvider};
pub use error::{StorageError, StorageResult};
pub use forum::{ForumPatch, ForumProvider};
pub use post::PostProvider;
pub use role::RoleProvider;
pub use thread::ThreadProvider;
pub use user::UserProvider;
