//! Application state management.
//!
//! This module defines the shared state that is passed to all request
//! handlers.

use std::sync::Arc;

use agora_auth::AuthService;
use agora_cache::StatsCache;
use agora_storage::{
    CategoryProvider, DashboardProvider, ForumProvider, PostProvider, ThreadProvider,
};

use crate::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,

    /// Authentication core.
    pub auth: Arc<AuthService>,

    /// Category storage.
    pub categories: Arc<dyn CategoryProvider>,

    /// Forum storage.
    pub forums: Arc<dyn ForumProvider>,

    /// Thread storage.
    pub threads: Arc<dyn ThreadProvider>,

    /// Post storage.
    pub posts: Arc<dyn PostProvider>,

    /// Dashboard counters.
    pub dashboard: Arc<dyn DashboardProvider>,

    /// Statistics cache.
    pub stats: Arc<dyn StatsCache>,
}
