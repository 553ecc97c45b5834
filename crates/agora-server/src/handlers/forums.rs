//! Forum endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agora_cache::ForumStats;
use agora_model::Forum;
use agora_storage::ForumPatch;

use crate::error::{ApiError, ApiResult};
use crate::extract::AdminUser;
use crate::state::AppState;

/// A forum creation request.
#[derive(Debug, Deserialize)]
pub struct ForumCreate {
    /// Parent category.
    pub category_id: Uuid,
    /// Forum name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Display position. Appended after the last forum when absent.
    pub position: Option<i32>,
}

/// A forum update request. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct ForumUpdate {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New parent category.
    pub category_id: Option<Uuid>,
    /// New display position.
    pub position: Option<i32>,
}

/// A forum with its cached counters.
#[derive(Debug, Serialize)]
pub struct ForumDetail {
    /// The forum.
    #[serde(flatten)]
    pub forum: Forum,
    /// Cached thread/post counters.
    pub stats: ForumStats,
}

/// `GET /forums`
pub async fn list_forums(State(state): State<AppState>) -> ApiResult<Json<Vec<Forum>>> {
    Ok(Json(state.forums.list().await?))
}

/// `POST /forums`
pub async fn create_forum(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(req): Json<ForumCreate>,
) -> ApiResult<impl IntoResponse> {
    if state.categories.get_by_id(req.category_id).await?.is_none() {
        return Err(ApiError::not_found("Category"));
    }

    let position = match req.position {
        Some(position) => position,
        None => state.forums.max_position().await?.unwrap_or(0) + 1,
    };

    let mut forum = Forum::new(req.category_id, req.name, position);
    if let Some(description) = req.description {
        forum = forum.with_description(description);
    }

    state.forums.create(&forum).await?;

    Ok((StatusCode::CREATED, Json(forum)))
}

/// `GET /forums/{id}`
pub async fn get_forum(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ForumDetail>> {
    let forum = state
        .forums
        .get_by_id(id)
        .await?
        .ok_or(ApiError::not_found("Forum"))?;

    // Counters are advisory; a cache failure must not hide the forum.
    let stats = match state.stats.forum_stats(id).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::warn!(forum_id = %id, error = %e, "failed to read forum counters");
            ForumStats::default()
        }
    };

    Ok(Json(ForumDetail { forum, stats }))
}

/// `PATCH /forums/{id}`
pub async fn update_forum(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ForumUpdate>,
) -> ApiResult<Json<Forum>> {
    if let Some(category_id) = req.category_id {
        if state.categories.get_by_id(category_id).await?.is_none() {
            return Err(ApiError::not_found("Category"));
        }
    }

    let patch = ForumPatch {
        name: req.name,
        description: req.description,
        category_id: req.category_id,
        position: req.position,
    };

    Ok(Json(state.forums.update(id, &patch).await?))
}
