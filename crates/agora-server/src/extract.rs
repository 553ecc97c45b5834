//! Authentication extractors.
//!
//! Three composable guards, each a precondition on a handler:
//! a valid access token ([`CurrentUser`]), at least moderator role
//! ([`ModeratorUser`]), and admin role ([`AdminUser`]). A token that
//! fails signature, expiry, or subject checks is rejected uniformly as
//! "could not validate credentials".

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use agora_auth::AuthError;
use agora_model::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user, resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// An authenticated user holding at least the moderator role.
#[derive(Debug, Clone)]
pub struct ModeratorUser(pub User);

/// An authenticated user holding the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

/// Extracts the bearer token from the Authorization header.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let token = bearer_token(parts).ok_or(ApiError::Auth(AuthError::InvalidToken))?;
        let user = state.auth.authenticate_token(&token).await?;
        Ok(Self(user))
    }
}

impl FromRequestParts<AppState> for ModeratorUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if user.is_moderator() {
            Ok(Self(user))
        } else {
            Err(ApiError::Forbidden("You must be a moderator".to_string()))
        }
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if user.is_admin() {
            Ok(Self(user))
        } else {
            Err(ApiError::Forbidden("You must be an admin".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(value: &str) -> Parts {
        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, value)
            .body(())
            .unwrap();
        request.into_parts().0
    }

    #[test]
    fn bearer_token_extraction() {
        let parts = parts_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&parts), Some("abc.def.ghi".to_string()));

        let parts = parts_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&parts), None);

        let request = Request::builder().uri("/").body(()).unwrap();
        let (parts, ()) = request.into_parts();
        assert_eq!(bearer_token(&parts), None);
    }
}
