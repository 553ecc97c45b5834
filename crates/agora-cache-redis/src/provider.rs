//! Redis cache provider implementation.

use std::time::Duration;

use agora_cache::{
    AtomicCacheProvider, CacheError, CacheProvider, CacheResult, ListCacheProvider,
    SetCacheProvider,
};
use async_trait::async_trait;
use fred::prelude::*;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::RedisConfig;
use crate::error::{from_redis_error, from_serde_error};

/// Redis-based cache provider.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    config: RedisConfig,
}

impl RedisCacheProvider {
    /// Creates a new Redis cache provider.
    ///
    /// ## Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn new(config: RedisConfig) -> CacheResult<Self> {
        let redis_config = Config::from_url(&config.connection_url())
            .map_err(|e| CacheError::Configuration(e.to_string()))?;

        let client = Client::new(
            redis_config,
            None,
            None,
            Some(ReconnectPolicy::new_exponential(0, 1000, 30_000, 2)),
        );

        client.init().await.map_err(from_redis_error)?;

        Ok(Self { client, config })
    }

    /// Formats a key with the configured prefix.
    fn key(&self, key: &str) -> String {
        self.config.prefixed_key(key)
    }
}

/// Safely convert seconds to i64 for Redis expiration.
#[allow(clippy::cast_possible_wrap)]
const fn seconds_to_i64(seconds: u64) -> i64 {
    seconds as i64
}

/// Safely convert a non-negative list length to u64.
#[allow(clippy::cast_sign_loss)]
const fn len_to_u64(len: i64) -> u64 {
    len as u64
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get<T>(&self, key: &str) -> CacheResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let key = self.key(key);
        let value: Option<String> = self.client.get(&key).await.map_err(from_redis_error)?;

        match value {
            Some(v) => {
                let parsed: T = serde_json::from_str(&v).map_err(from_serde_error)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    async fn set<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> CacheResult<()>
    where
        T: Serialize + Sync,
    {
        let key = self.key(key);
        let serialized = serde_json::to_string(value).map_err(from_serde_error)?;

        match ttl {
            Some(duration) => {
                let seconds = seconds_to_i64(duration.as_secs().max(1));
                self.client
                    .set::<(), _, _>(
                        &key,
                        serialized,
                        Some(Expiration::EX(seconds)),
                        None,
                        false,
                    )
                    .await
                    .map_err(from_redis_error)
            }
            None => self
                .client
                .set::<(), _, _>(&key, serialized, None, None, false)
                .await
                .map_err(from_redis_error),
        }
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let key = self.key(key);
        self.client
            .del::<(), _>(&key)
            .await
            .map_err(from_redis_error)
    }
}

#[async_trait]
impl AtomicCacheProvider for RedisCacheProvider {
    async fn incr(&self, key: &str, delta: i64) -> CacheResult<i64> {
        let key = self.key(key);
        self.client
            .incr_by(&key, delta)
            .await
            .map_err(from_redis_error)
    }

    async fn decr(&self, key: &str, delta: i64) -> CacheResult<i64> {
        let key = self.key(key);
        self.client
            .decr_by(&key, delta)
            .await
            .map_err(from_redis_error)
    }

    async fn get_del<T>(&self, key: &str) -> CacheResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let key = self.key(key);
        let value: Option<String> = self.client.getdel(&key).await.map_err(from_redis_error)?;

        match value {
            Some(v) => {
                let parsed: T = serde_json::from_str(&v).map_err(from_serde_error)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SetCacheProvider for RedisCacheProvider {
    async fn sadd<T>(&self, key: &str, members: &[T]) -> CacheResult<u64>
    where
        T: Serialize + Sync,
    {
        if members.is_empty() {
            return Ok(0);
        }

        let key = self.key(key);
        let mut serialized = Vec::with_capacity(members.len());
        for member in members {
            serialized.push(serde_json::to_string(member).map_err(from_serde_error)?);
        }

        let added: i64 = self
            .client
            .sadd(&key, serialized)
            .await
            .map_err(from_redis_error)?;
        Ok(len_to_u64(added))
    }

    async fn smembers<T>(&self, key: &str) -> CacheResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let key = self.key(key);
        let members: Vec<String> = self.client.smembers(&key).await.map_err(from_redis_error)?;

        let mut result = Vec::with_capacity(members.len());
        for member in members {
            let parsed: T = serde_json::from_str(&member).map_err(from_serde_error)?;
            result.push(parsed);
        }

        Ok(result)
    }
}

#[async_trait]
impl ListCacheProvider for RedisCacheProvider {
    async fn lpush<T>(&self, key: &str, value: &T) -> CacheResult<u64>
    where
        T: Serialize + Sync,
    {
        let key = self.key(key);
        let serialized = serde_json::to_string(value).map_err(from_serde_error)?;
        let len: i64 = self
            .client
            .lpush(&key, serialized)
            .await
            .map_err(from_redis_error)?;
        Ok(len_to_u64(len))
    }

    async fn ltrim(&self, key: &str, start: i64, stop: i64) -> CacheResult<()> {
        let key = self.key(key);
        self.client
            .ltrim::<(), _>(&key, start, stop)
            .await
            .map_err(from_redis_error)
    }

    async fn lrange<T>(&self, key: &str, start: i64, stop: i64) -> CacheResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let key = self.key(key);
        let values: Vec<String> = self
            .client
            .lrange(&key, start, stop)
            .await
            .map_err(from_redis_error)?;

        let mut result = Vec::with_capacity(values.len());
        for value in values {
            let parsed: T = serde_json::from_str(&value).map_err(from_serde_error)?;
            result.push(parsed);
        }

        Ok(result)
    }
}
