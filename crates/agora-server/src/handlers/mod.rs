//! Request handlers.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod forums;
pub mod posts;
pub mod threads;

use serde::Deserialize;

/// Common pagination query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

const fn default_page() -> u32 {
    1
}

const fn default_limit() -> u32 {
    20
}
