//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible
//! defaults. The database URL and the token signing secret are
//! required; everything else falls back.

use std::time::Duration;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Database connection URL.
    pub database_url: String,

    /// Minimum database connections.
    pub db_min_connections: u32,

    /// Maximum database connections.
    pub db_max_connections: u32,

    /// Redis host.
    pub redis_host: String,

    /// Redis port.
    pub redis_port: u16,

    /// Redis password (optional).
    pub redis_password: Option<String>,

    /// Token signing secret.
    pub jwt_secret: String,

    /// Token signing algorithm name (HS256, HS384, or HS512).
    pub jwt_algorithm: String,

    /// Access token lifespan in seconds.
    pub access_token_lifespan: i64,

    /// Refresh token lifespan in seconds.
    pub refresh_token_lifespan: u64,

    /// CORS allowed origins ("*" allows any).
    pub cors_origins: Vec<String>,

    /// Log level.
    pub log_level: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` or `AGORA_JWT_SECRET` is missing; a
    /// server without either cannot start.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = std::env::var("AGORA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("AGORA_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let db_min_connections = std::env::var("AGORA_DB_MIN_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let db_max_connections = std::env::var("AGORA_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let redis_host =
            std::env::var("AGORA_REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let redis_port = std::env::var("AGORA_REDIS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6379);
        let redis_password = std::env::var("AGORA_REDIS_PASSWORD").ok();

        let jwt_secret = std::env::var("AGORA_JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("AGORA_JWT_SECRET environment variable is required"))?;

        let jwt_algorithm =
            std::env::var("AGORA_JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());

        let access_token_lifespan = std::env::var("AGORA_ACCESS_TOKEN_LIFESPAN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(900); // 15 minutes

        let refresh_token_lifespan = std::env::var("AGORA_REFRESH_TOKEN_LIFESPAN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400); // 1 day

        let cors_origins = std::env::var("AGORA_CORS_ORIGINS")
            .map(|s| s.split(',').map(str::trim).map(String::from).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            db_min_connections,
            db_max_connections,
            redis_host,
            redis_port,
            redis_password,
            jwt_secret,
            jwt_algorithm,
            access_token_lifespan,
            refresh_token_lifespan,
            cors_origins,
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing(database_url: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            database_url: database_url.to_string(),
            db_min_connections: 1,
            db_max_connections: 5,
            redis_host: "127.0.0.1".to_string(),
            redis_port: 6379,
            redis_password: None,
            jwt_secret: "test-signing-secret".to_string(),
            jwt_algorithm: "HS256".to_string(),
            access_token_lifespan: 900,
            refresh_token_lifespan: 3600,
            cors_origins: vec!["*".to_string()],
            log_level: "debug".to_string(),
        }
    }

    /// Returns the refresh token duration.
    #[must_use]
    pub const fn refresh_token_duration(&self) -> Duration {
        Duration::from_secs(self.refresh_token_lifespan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testing_config() {
        let config = ServerConfig::for_testing("postgres://localhost/test");
        assert_eq!(config.jwt_algorithm, "HS256");
        assert_eq!(config.access_token_lifespan, 900);
        assert_eq!(
            config.refresh_token_duration(),
            Duration::from_secs(3600)
        );
    }
}
