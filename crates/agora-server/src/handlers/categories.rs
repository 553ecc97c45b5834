//! Category endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use agora_model::Category;

use crate::error::ApiResult;
use crate::extract::AdminUser;
use crate::state::AppState;

/// A category creation request.
#[derive(Debug, Deserialize)]
pub struct CategoryCreate {
    /// Category name.
    pub name: String,
    /// Display position. Appended after the last category when absent.
    pub position: Option<i32>,
}

/// `GET /categories`
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.categories.list().await?))
}

/// `POST /categories`
pub async fn create_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(req): Json<CategoryCreate>,
) -> ApiResult<impl IntoResponse> {
    let position = match req.position {
        Some(position) => position,
        None => state.categories.max_position().await?.unwrap_or(0) + 1,
    };

    let category = Category::new(req.name, position);
    state.categories.create(&category).await?;

    Ok((StatusCode::CREATED, Json(category)))
}
