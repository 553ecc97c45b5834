//! # agora-cache
//!
//! Cache abstraction traits for the Agora forum backend.
//!
//! This crate defines the interfaces for the cache store. The primary
//! implementation is Redis-based (see `agora-cache-redis`).
//!
//! ## Cache Providers
//!
//! - [`CacheProvider`] - Basic key-value cache operations with TTL
//! - [`AtomicCacheProvider`] - Atomic operations (counters, get-and-delete)
//! - [`SetCacheProvider`] - Set operations
//! - [`ListCacheProvider`] - List operations
//!
//! ## Specialized Caches
//!
//! - [`SessionStore`] - Refresh-token sessions and permission sets
//! - [`StatsCache`] - Recent-registration feed and content counters

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod provider;
pub mod session;
pub mod stats;

pub use error::{CacheError, CacheResult};
pub use provider::{AtomicCacheProvider, CacheProvider, ListCacheProvider, SetCacheProvider};
pub use session::{RefreshSession, SessionStore};
pub use stats::{ForumStats, RecentUser, StatsCache, RECENT_USERS_CAP};
