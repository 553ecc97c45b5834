//! Cache provider traits.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::CacheResult;

/// Cache provider trait for key-value caching.
///
/// Implementations must be thread-safe and support concurrent access.
/// All operations are async to support remote cache backends.
///
/// Values are any type that implements `Serialize` + `DeserializeOwned`;
/// the implementation is responsible for the on-wire encoding.
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Gets a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get<T>(&self, key: &str) -> CacheResult<Option<T>>
    where
        T: DeserializeOwned + Send;

    /// Sets a value in the cache with optional TTL.
    ///
    /// If `ttl` is `None`, the value will not expire automatically.
    async fn set<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> CacheResult<()>
    where
        T: Serialize + Sync;

    /// Deletes a value from the cache.
    ///
    /// Returns `Ok(())` even if the key doesn't exist.
    async fn delete(&self, key: &str) -> CacheResult<()>;
}

/// Extended cache operations for atomic updates.
#[async_trait]
pub trait AtomicCacheProvider: CacheProvider {
    /// Atomically increments a counter, creating it if absent.
    async fn incr(&self, key: &str, delta: i64) -> CacheResult<i64>;

    /// Atomically decrements a counter, creating it if absent.
    async fn decr(&self, key: &str, delta: i64) -> CacheResult<i64>;

    /// Gets and deletes a value atomically.
    ///
    /// When several callers race on the same key, at most one of them
    /// observes the value; the rest see `None`.
    async fn get_del<T>(&self, key: &str) -> CacheResult<Option<T>>
    where
        T: DeserializeOwned + Send;
}

/// Set operations for collections.
#[async_trait]
pub trait SetCacheProvider: CacheProvider {
    /// Adds members to a set. Returns the number of members added.
    async fn sadd<T>(&self, key: &str, members: &[T]) -> CacheResult<u64>
    where
        T: Serialize + Sync;

    /// Gets all members of a set.
    async fn smembers<T>(&self, key: &str) -> CacheResult<Vec<T>>
    where
        T: DeserializeOwned + Send;
}

/// List operations for ordered collections.
#[async_trait]
pub trait ListCacheProvider: CacheProvider {
    /// Pushes a value to the head of a list. Returns the new length.
    async fn lpush<T>(&self, key: &str, value: &T) -> CacheResult<u64>
    where
        T: Serialize + Sync;

    /// Trims a list to the given inclusive index range.
    async fn ltrim(&self, key: &str, start: i64, stop: i64) -> CacheResult<()>;

    /// Gets the values in the given inclusive index range.
    async fn lrange<T>(&self, key: &str, start: i64, stop: i64) -> CacheResult<Vec<T>>
    where
        T: DeserializeOwned + Send;
}
