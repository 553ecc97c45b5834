//! Router configuration.
//!
//! This module creates the main Axum router that combines all
//! endpoints.

use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{delete, get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers::{auth, categories, dashboard, forums, posts, threads};
use crate::state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/users", get(auth::list_users))
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/forums",
            get(forums::list_forums).post(forums::create_forum),
        )
        .route(
            "/forums/{id}",
            get(forums::get_forum).patch(forums::update_forum),
        )
        .route("/forums/{id}/threads", get(threads::list_threads))
        .route("/threads", post(threads::create_thread))
        .route(
            "/threads/{id}",
            get(threads::get_thread).patch(threads::update_thread),
        )
        .route("/threads/{id}/pin", post(threads::pin_thread))
        .route("/threads/{id}/unpin", post(threads::unpin_thread))
        .route("/threads/{id}/lock", post(threads::lock_thread))
        .route("/threads/{id}/unlock", post(threads::unlock_thread))
        .route("/threads/{id}/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/{id}", delete(posts::delete_post))
        .route("/dashboard", get(dashboard::dashboard))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Health check response.
#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// `GET /healthcheck`
async fn health_check() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Builds the CORS layer from the configured origins.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
