//! Admin dashboard endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use agora_cache::RecentUser;
use agora_storage::DashboardCounts;

use crate::error::ApiResult;
use crate::extract::AdminUser;
use crate::state::AppState;

/// Dashboard statistics.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Entity counts.
    #[serde(flatten)]
    pub counts: DashboardCounts,
    /// The most recent registrations, newest first.
    pub recent_users: Vec<RecentUser>,
}

/// `GET /dashboard`
pub async fn dashboard(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<DashboardResponse>> {
    let counts = state.dashboard.counts().await?;
    let recent_users = state.stats.recent_users().await?;

    Ok(Json(DashboardResponse {
        counts,
        recent_users,
    }))
}
