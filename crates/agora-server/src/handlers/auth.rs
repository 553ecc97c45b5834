//! Authentication endpoints: register, login, refresh, user listing.
//!
//! The refresh token travels in an `HttpOnly; Secure; SameSite=Strict`
//! cookie whose `Max-Age` equals the configured refresh lifespan; the
//! access token travels in the response body.

use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agora_auth::{AuthError, Credentials, Registration, TokenPair};
use agora_cache::RecentUser;
use agora_model::{Page, Role, User};

use crate::error::{ApiError, ApiResult};
use crate::extract::AdminUser;
use crate::handlers::PageParams;
use crate::state::AppState;

/// Name of the refresh-token cookie.
const REFRESH_COOKIE: &str = "refresh_token";

/// A registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Requested username.
    pub username: String,
    /// Requested email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// A login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// A user, as exposed over the API. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: Role,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// The access token, as returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    /// Signed access token.
    pub access_token: String,
    /// Token type, always "bearer".
    pub token_type: &'static str,
}

impl AccessTokenResponse {
    fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username and password must not be empty".to_string(),
        ));
    }
    if !req.email.contains('@') {
        return Err(ApiError::BadRequest("invalid email address".to_string()));
    }

    let user = state
        .auth
        .register(&Registration {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    // Feed the dashboard's recent-registrations list; never fail the
    // registration over it.
    if let Err(e) = state.stats.push_recent_user(&RecentUser::from(&user)).await {
        tracing::warn!(error = %e, "failed to cache recent registration");
    }

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Response> {
    let credentials = Credentials {
        username: req.username,
        password: req.password,
    };

    match state.auth.login(&credentials).await {
        Ok(pair) => token_response(&state, pair),
        Err(err @ AuthError::IncorrectUsernameOrPassword) => {
            tracing::warn!(
                username = %credentials.username,
                ip = %addr.ip(),
                "failed login attempt"
            );
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// `POST /auth/refresh`
pub async fn refresh(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    let token = cookie_value(&headers, REFRESH_COOKIE)
        .ok_or(ApiError::Auth(AuthError::InvalidRefreshToken))?;

    let pair = state.auth.refresh(&token).await?;
    token_response(&state, pair)
}

/// `GET /auth/users?page&limit`
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<UserResponse>>> {
    let Page {
        items,
        page,
        per_page,
        total,
    } = state.auth.list_users(params.page, params.limit).await?;

    let items = items.into_iter().map(UserResponse::from).collect();
    Ok(Json(Page::new(items, page, per_page, total)))
}

/// Builds the token response: access token in the body, rotated refresh
/// token in the cookie.
fn token_response(state: &AppState, pair: TokenPair) -> ApiResult<Response> {
    let cookie = refresh_cookie(&pair.refresh_token, state.config.refresh_token_lifespan)
        .map_err(|e| ApiError::Auth(AuthError::Internal(e.to_string())))?;

    Ok((
        [(SET_COOKIE, cookie)],
        Json(AccessTokenResponse::bearer(pair.access_token)),
    )
        .into_response())
}

/// Formats the refresh-token cookie.
fn refresh_cookie(
    token: &str,
    max_age: u64,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{REFRESH_COOKIE}={token}; Path=/auth; HttpOnly; Secure; SameSite=Strict; Max-Age={max_age}"
    ))
}

/// Reads a cookie from the Cookie header.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(name)?
            .strip_prefix('=')
            .map(String::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_cookie_attributes() {
        let cookie = refresh_cookie("abc123", 3600).unwrap();
        let value = cookie.to_str().unwrap();

        assert!(value.starts_with("refresh_token=abc123;"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Secure"));
        assert!(value.contains("SameSite=Strict"));
        assert!(value.contains("Max-Age=3600"));
    }

    #[test]
    fn cookie_value_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; refresh_token=tok-123; lang=en"),
        );

        assert_eq!(
            cookie_value(&headers, "refresh_token"),
            Some("tok-123".to_string())
        );
        assert_eq!(cookie_value(&headers, "theme"), Some("dark".to_string()));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_prefixed_names() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("refresh_token_old=stale; refresh_token=fresh"),
        );

        assert_eq!(
            cookie_value(&headers, "refresh_token"),
            Some("fresh".to_string())
        );
    }
}
