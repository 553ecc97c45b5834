//! # agora-storage-sql
//!
//! `PostgreSQL` storage implementation for the Agora forum backend.
//!
//! This crate implements the provider traits defined in `agora-storage`
//! using `SQLx`. Uniqueness is enforced by the database; unique
//! constraint violations are inspected by constraint name and surfaced
//! as `StorageError::Duplicate` with the violated field.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod category;
pub mod convert;
pub mod dashboard;
pub mod entities;
pub mod error;
pub mod forum;
pub mod pool;
pub mod post;
pub mod role;
pub mod thread;
pub mod user;

pub use category::PgCategoryProvider;
pub use dashboard::PgDashboardProvider;
pub use forum::PgForumProvider;
pub use pool::{create_pool, PoolConfig};
pub use post::PgPostProvider;
pub use role::PgRoleProvider;
pub use thread::PgThreadProvider;
pub use user::PgUserProvider;
