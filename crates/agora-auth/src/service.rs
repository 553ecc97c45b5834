//! Core authentication service.
//!
//! Orchestrates the credential hasher, the user store, the token codec,
//! and the session store. All security-relevant failures are translated
//! into the `AuthError` taxonomy here; nothing below this layer decides
//! what a caller gets to see.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use agora_cache::{RefreshSession, SessionStore};
use agora_model::{Page, Role, User};
use agora_storage::{StorageError, UserProvider};

use crate::error::{AuthError, AuthResult};
use crate::password::PasswordHasherService;
use crate::token::{generate_refresh_token, TokenCodec};

/// Password used to precompute the dummy hash. Never accepted at login;
/// it only exists so that failed lookups still pay for a verification.
const DUMMY_PASSWORD: &str = "incorrect-horse-battery-staple";

/// A registration request.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Requested username.
    pub username: String,
    /// Requested email.
    pub email: String,
    /// Plaintext password. Hashed immediately; never stored or logged.
    pub password: String,
}

/// A login request.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// The token pair returned by `login` and `refresh`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    /// Signed, short-lived access token.
    pub access_token: String,
    /// Opaque, single-use refresh token.
    pub refresh_token: String,
}

/// Core authentication service.
pub struct AuthService {
    users: Arc<dyn UserProvider>,
    sessions: Arc<dyn SessionStore>,
    hasher: PasswordHasherService,
    codec: TokenCodec,
    refresh_token_lifespan: Duration,
    /// Precomputed once at construction; compared against when a login
    /// names an unknown user so the two failure paths cost the same.
    dummy_hash: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if the dummy hash cannot be
    /// computed; callers treat this as fatal at startup.
    pub fn new(
        users: Arc<dyn UserProvider>,
        sessions: Arc<dyn SessionStore>,
        hasher: PasswordHasherService,
        codec: TokenCodec,
        refresh_token_lifespan: Duration,
    ) -> AuthResult<Self> {
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            users,
            sessions,
            hasher,
            codec,
            refresh_token_lifespan,
            dummy_hash,
        })
    }

    /// Registers a new user with the default role.
    ///
    /// The store enforces uniqueness; this method reacts to the
    /// conflict signal instead of pre-checking, and surfaces which
    /// field clashed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UsernameTaken` or `AuthError::EmailTaken` on
    /// a uniqueness violation.
    pub async fn register(&self, registration: &Registration) -> AuthResult<User> {
        let password_hash = self.hasher.hash(&registration.password)?;
        let user = User::new(&registration.username, &registration.email, password_hash);

        self.users.create(&user).await.map_err(|e| match e {
            StorageError::Duplicate { field: "username", .. } => AuthError::UsernameTaken,
            StorageError::Duplicate { field: "email", .. } => AuthError::EmailTaken,
            other => AuthError::Storage(other),
        })?;

        tracing::info!(user_id = %user.id, username = %user.username, "registered new user");
        Ok(user)
    }

    /// Authenticates a user and issues an access/refresh token pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::IncorrectUsernameOrPassword` when the user
    /// does not exist or the password is wrong; the two cases are not
    /// distinguishable by error or by timing.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<TokenPair> {
        let user = self
            .users
            .get_by_username(&credentials.username)
            .await
            .map_err(AuthError::Storage)?;

        let Some(user) = user else {
            // Unknown user: burn a verification against the dummy hash
            // so this path costs the same as a wrong password.
            let _ = self.hasher.verify(&credentials.password, &self.dummy_hash);
            tracing::warn!(username = %credentials.username, "failed login attempt");
            return Err(AuthError::IncorrectUsernameOrPassword);
        };

        if let Err(err) = self.hasher.verify(&credentials.password, &user.password_hash) {
            if matches!(err, AuthError::IncorrectUsernameOrPassword) {
                tracing::warn!(username = %credentials.username, "failed login attempt");
            }
            return Err(err);
        }

        self.issue_pair(user.id, user.role).await
    }

    /// Redeems a refresh token, rotating it.
    ///
    /// Redemption is atomic: the session store's get-and-delete ensures
    /// that of any concurrent redemptions of the same token, exactly one
    /// observes it. The redeemed token is invalid from that moment; the
    /// returned pair replaces it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidRefreshToken` when the token is
    /// unknown, expired, or already redeemed. The caller must
    /// re-authenticate via `login`.
    pub async fn refresh(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let session = self
            .sessions
            .take_refresh(refresh_token)
            .await
            .map_err(AuthError::Session)?;

        let Some(session) = session else {
            return Err(AuthError::InvalidRefreshToken);
        };

        self.issue_pair(session.user_id, session.role).await
    }

    /// Resolves an access token to its user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` when the token fails
    /// signature, expiry, or subject checks, or the subject no longer
    /// exists. The cases are not distinguished.
    pub async fn authenticate_token(&self, token: &str) -> AuthResult<User> {
        let claims = self.codec.validate_access_token(token)?;
        let user_id = claims.user_id()?;

        let user = self
            .users
            .get_by_id(user_id)
            .await
            .map_err(AuthError::Storage)?;

        user.ok_or(AuthError::InvalidToken)
    }

    /// Checks that a user holds every required permission.
    ///
    /// The session store's cached permission set is authoritative: an
    /// absent or empty set fails the check.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InsufficientPermission` when a required
    /// permission is missing, and `AuthError::Session` on a store
    /// failure (never silently authorized).
    pub async fn check_authorization(
        &self,
        user: &User,
        required: &HashSet<String>,
    ) -> AuthResult<bool> {
        let granted = self.sessions.permissions(user.id).await.map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "authorization check failed");
            AuthError::Session(e)
        })?;

        if !granted.is_empty() && required.is_subset(&granted) {
            Ok(true)
        } else {
            Err(AuthError::InsufficientPermission)
        }
    }

    /// Lists users, paginated, with the total count for page math.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` on a store failure.
    pub async fn list_users(&self, page: u32, limit: u32) -> AuthResult<Page<User>> {
        let offset = Page::<User>::offset(page, limit);

        let items = self
            .users
            .list(offset, limit)
            .await
            .map_err(AuthError::Storage)?;
        let total = self.users.count().await.map_err(AuthError::Storage)?;

        Ok(Page::new(items, page, limit, total))
    }

    /// Returns the configured refresh-token lifespan.
    #[must_use]
    pub const fn refresh_token_lifespan(&self) -> Duration {
        self.refresh_token_lifespan
    }

    /// Issues a fresh token pair and records the refresh token.
    async fn issue_pair(&self, user_id: Uuid, role: Role) -> AuthResult<TokenPair> {
        let access_token = self.codec.issue_access_token(user_id, role)?;
        let refresh_token = generate_refresh_token();

        self.sessions
            .store_refresh(
                &refresh_token,
                &RefreshSession { user_id, role },
                self.refresh_token_lifespan,
            )
            .await
            .map_err(AuthError::Session)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
