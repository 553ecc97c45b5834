//! Post endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use agora_model::Post;

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentUser;
use crate::state::AppState;

/// A post creation request.
#[derive(Debug, Deserialize)]
pub struct PostCreate {
    /// Thread to post in.
    pub thread_id: Uuid,
    /// Post body.
    pub content: String,
}

/// `POST /posts`
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<PostCreate>,
) -> ApiResult<impl IntoResponse> {
    let thread = state
        .threads
        .get_by_id(req.thread_id)
        .await?
        .ok_or(ApiError::not_found("Thread"))?;

    if thread.is_locked {
        return Err(ApiError::ThreadLocked);
    }

    let post = Post::new(req.thread_id, user.id, &user.username, req.content);
    state.posts.create(&post).await?;

    if let Err(e) = state.stats.on_post_created(user.id, thread.forum_id).await {
        tracing::warn!(thread_id = %req.thread_id, error = %e, "failed to bump post counters");
    }

    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /threads/{id}/posts`
pub async fn list_posts(
    State(state): State<AppState>,
    Path(thread_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Post>>> {
    if state.threads.get_by_id(thread_id).await?.is_none() {
        return Err(ApiError::not_found("Thread"));
    }

    Ok(Json(state.posts.list_by_thread(thread_id).await?))
}

/// `DELETE /posts/{id}`
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or(ApiError::not_found("Post"))?;

    if post.author_id != user.id && !user.is_moderator() {
        return Err(ApiError::Forbidden(
            "You can only delete your own posts".to_string(),
        ));
    }

    let thread = state.threads.get_by_id(post.thread_id).await?;

    state.posts.delete(id).await?;

    if let Some(thread) = thread {
        if let Err(e) = state
            .stats
            .on_post_deleted(post.author_id, thread.forum_id)
            .await
        {
            tracing::warn!(post_id = %id, error = %e, "failed to decrement post counters");
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
