//! Thread endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use agora_model::{Page, Thread};

use crate::error::{ApiError, ApiResult};
use crate::extract::{CurrentUser, ModeratorUser};
use crate::handlers::PageParams;
use crate::state::AppState;

/// A thread creation request.
#[derive(Debug, Deserialize)]
pub struct ThreadCreate {
    /// Forum to create the thread in.
    pub forum_id: Uuid,
    /// Thread title.
    pub title: String,
}

/// A thread update request.
#[derive(Debug, Deserialize)]
pub struct ThreadUpdate {
    /// New title.
    pub title: String,
}

/// `POST /threads`
pub async fn create_thread(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<ThreadCreate>,
) -> ApiResult<impl IntoResponse> {
    if state.forums.get_by_id(req.forum_id).await?.is_none() {
        return Err(ApiError::not_found("Forum"));
    }

    let thread = Thread::new(req.forum_id, user.id, &user.username, req.title);
    state.threads.create(&thread).await?;

    if let Err(e) = state.stats.on_thread_created(req.forum_id).await {
        tracing::warn!(forum_id = %req.forum_id, error = %e, "failed to bump thread counter");
    }

    Ok((StatusCode::CREATED, Json(thread)))
}

/// `GET /forums/{id}/threads?page&limit`
pub async fn list_threads(
    State(state): State<AppState>,
    Path(forum_id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<Thread>>> {
    if state.forums.get_by_id(forum_id).await?.is_none() {
        return Err(ApiError::not_found("Forum"));
    }

    let offset = Page::<Thread>::offset(params.page, params.limit);
    let items = state
        .threads
        .list_by_forum(forum_id, offset, params.limit)
        .await?;
    let total = state.threads.count_by_forum(forum_id).await?;

    Ok(Json(Page::new(items, params.page, params.limit, total)))
}

/// `GET /threads/{id}`
pub async fn get_thread(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Thread>> {
    let thread = state
        .threads
        .get_by_id(id)
        .await?
        .ok_or(ApiError::not_found("Thread"))?;

    Ok(Json(thread))
}

/// `PATCH /threads/{id}`
pub async fn update_thread(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ThreadUpdate>,
) -> ApiResult<Json<Thread>> {
    let thread = state
        .threads
        .get_by_id(id)
        .await?
        .ok_or(ApiError::not_found("Thread"))?;

    if thread.author_id != user.id && !user.is_moderator() {
        return Err(ApiError::Forbidden(
            "You can only edit your own threads".to_string(),
        ));
    }

    Ok(Json(state.threads.update_title(id, &req.title).await?))
}

/// `POST /threads/{id}/pin`
pub async fn pin_thread(
    State(state): State<AppState>,
    ModeratorUser(_moderator): ModeratorUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Thread>> {
    Ok(Json(state.threads.set_pinned(id, true).await?))
}

/// `POST /threads/{id}/unpin`
pub async fn unpin_thread(
    State(state): State<AppState>,
    ModeratorUser(_moderator): ModeratorUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Thread>> {
    Ok(Json(state.threads.set_pinned(id, false).await?))
}

/// `POST /threads/{id}/lock`
pub async fn lock_thread(
    State(state): State<AppState>,
    ModeratorUser(_moderator): ModeratorUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Thread>> {
    Ok(Json(state.threads.set_locked(id, true).await?))
}

/// `POST /threads/{id}/unlock`
pub async fn unlock_thread(
    State(state): State<AppState>,
    ModeratorUser(_moderator): ModeratorUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Thread>> {
    Ok(Json(state.threads.set_locked(id, false).await?))
}
