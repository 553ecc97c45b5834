//! # agora-server
//!
//! HTTP layer for the Agora forum backend.
//!
//! Wires the authentication core, the `PostgreSQL` storage providers,
//! and the Redis session/statistics caches into an Axum application.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use agora_auth::{AuthService, PasswordHasherService, TokenCodec};
use agora_cache_redis::{RedisCacheProvider, RedisConfig, RedisSessionStore, RedisStatsCache};
use agora_storage::RoleProvider;
use agora_storage_sql::{
    create_pool, PgCategoryProvider, PgDashboardProvider, PgForumProvider, PgPostProvider,
    PgRoleProvider, PgThreadProvider, PgUserProvider, PoolConfig,
};

pub use config::ServerConfig;
pub use router::create_router;
pub use state::AppState;

/// The assembled server: configuration plus application state.
pub struct Server {
    state: AppState,
}

impl Server {
    /// Connects to the database and cache, runs migrations, seeds the
    /// default roles, and builds the application state.
    ///
    /// # Errors
    ///
    /// Fails when the database or cache is unreachable or the token
    /// codec is misconfigured; all of these are fatal at startup.
    pub async fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let pool = create_pool(
            &PoolConfig::new(&config.database_url)
                .max_connections(config.db_max_connections)
                .min_connections(config.db_min_connections),
        )
        .await?;

        sqlx::migrate!("../../migrations").run(&pool).await?;

        let seeded = PgRoleProvider::new(pool.clone()).seed_defaults().await?;
        if !seeded.is_empty() {
            tracing::info!(roles = ?seeded, "seeded default roles");
        }

        let mut redis_config = RedisConfig::new()
            .host(&config.redis_host)
            .port(config.redis_port);
        if let Some(password) = &config.redis_password {
            redis_config = redis_config.password(password);
        }
        let cache = RedisCacheProvider::new(redis_config).await?;

        let sessions = Arc::new(RedisSessionStore::new(cache.clone()));
        let stats = Arc::new(RedisStatsCache::new(cache));

        let codec = TokenCodec::new(
            config.jwt_secret.as_bytes(),
            &config.jwt_algorithm,
            config.access_token_lifespan,
        )?;

        let auth = AuthService::new(
            Arc::new(PgUserProvider::new(pool.clone())),
            sessions,
            PasswordHasherService::with_defaults(),
            codec,
            config.refresh_token_duration(),
        )?;

        let state = AppState {
            config,
            auth: Arc::new(auth),
            categories: Arc::new(PgCategoryProvider::new(pool.clone())),
            forums: Arc::new(PgForumProvider::new(pool.clone())),
            threads: Arc::new(PgThreadProvider::new(pool.clone())),
            posts: Arc::new(PgPostProvider::new(pool.clone())),
            dashboard: Arc::new(PgDashboardProvider::new(pool)),
            stats,
        };

        Ok(Self { state })
    }

    /// Runs the server until the task is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error when binding or serving fails.
    pub async fn run(self) -> anyhow::Result<()> {
        let host = self.state.config.host.clone();
        let port = self.state.config.port;

        let app = create_router(self.state);

        let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "agora listening");

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;

        Ok(())
    }
}
