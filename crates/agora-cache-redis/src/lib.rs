//! # agora-cache-redis
//!
//! Redis cache implementation for the Agora forum backend.
//!
//! This crate provides Redis-based caching using the `fred` crate,
//! implementing the cache traits defined in `agora-cache`.
//!
//! ## Features
//!
//! - Automatic reconnection with exponential backoff
//! - TLS support
//! - Key prefixing
//! - Atomic `GETDEL` for single-use refresh-token redemption
//!
//! ## Example
//!
//! ```ignore
//! use agora_cache_redis::{RedisCacheProvider, RedisConfig};
//! use agora_cache::CacheProvider;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RedisConfig::default().host("localhost").port(6379);
//!     let cache = RedisCacheProvider::new(config).await?;
//!
//!     cache.set("key", &"value", Some(Duration::from_secs(3600))).await?;
//!     let value: Option<String> = cache.get("key").await?;
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod provider;
pub mod session;
pub mod stats;

pub use config::RedisConfig;
pub use provider::RedisCacheProvider;
pub use session::RedisSessionStore;
pub use stats::RedisStatsCache;
