//! # Agora Server
//!
//! Main entry point for the Agora forum backend.

#![forbid(unsafe_code)]
#![deny(warnings)]

use agora_server::{Server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Agora forum backend starting...");

    let config = ServerConfig::from_env()?;
    let server = Server::new(config).await?;

    server.run().await
}
