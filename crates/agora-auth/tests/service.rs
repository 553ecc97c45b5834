//! Scenario tests for the authentication service.
//!
//! Runs the service against in-memory user and session stores so every
//! protocol (registration, login, rotation, authorization) can be
//! exercised end to end without external services.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use uuid::Uuid;

use agora_auth::{AuthError, AuthService, Credentials, PasswordHasherService, PasswordPolicy, Registration, TokenCodec};
use agora_cache::{CacheResult, RefreshSession, SessionStore};
use agora_model::User;
use agora_storage::{StorageError, StorageResult, UserProvider};

/// In-memory user store enforcing the same uniqueness contract as the
/// SQL provider.
#[derive(Default)]
struct MemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserProvider for MemoryUsers {
    async fn create(&self, user: &User) -> StorageResult<()> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::duplicate("User", "username", &user.username));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(StorageError::duplicate("User", "email", &user.email));
        }

        users.push(user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn list(&self, offset: u64, limit: u32) -> StorageResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }
}

/// In-memory session store. TTLs are accepted but not enforced; these
/// tests only exercise presence and single-use semantics.
#[derive(Default)]
struct MemorySessions {
    refresh: Mutex<HashMap<String, RefreshSession>>,
    permissions: Mutex<HashMap<Uuid, HashSet<String>>>,
}

#[async_trait]
impl SessionStore for MemorySessions {
    async fn store_refresh(
        &self,
        token: &str,
        session: &RefreshSession,
        _ttl: Duration,
    ) -> CacheResult<()> {
        self.refresh
            .lock()
            .unwrap()
            .insert(token.to_string(), *session);
        Ok(())
    }

    async fn take_refresh(&self, token: &str) -> CacheResult<Option<RefreshSession>> {
        Ok(self.refresh.lock().unwrap().remove(token))
    }

    async fn revoke_refresh(&self, token: &str) -> CacheResult<()> {
        self.refresh.lock().unwrap().remove(token);
        Ok(())
    }

    async fn grant_permissions(&self, user_id: Uuid, permissions: &[String]) -> CacheResult<u64> {
        let mut all = self.permissions.lock().unwrap();
        let set = all.entry(user_id).or_default();
        let before = set.len();
        set.extend(permissions.iter().cloned());
        Ok((set.len() - before) as u64)
    }

    async fn permissions(&self, user_id: Uuid) -> CacheResult<HashSet<String>> {
        let all = self.permissions.lock().unwrap();
        Ok(all.get(&user_id).cloned().unwrap_or_default())
    }
}

struct TestEnv {
    service: AuthService,
    sessions: Arc<MemorySessions>,
    codec: TokenCodec,
}

const SECRET: &[u8] = b"test-signing-secret";

fn test_env() -> TestEnv {
    let users = Arc::new(MemoryUsers::default());
    let sessions = Arc::new(MemorySessions::default());

    // Low-cost argon2 parameters keep the suite fast; the production
    // defaults are exercised in the password module's own tests.
    let hasher = PasswordHasherService::new(PasswordPolicy::new().memory_cost(1024).time_cost(1));
    let codec = TokenCodec::new(SECRET, "HS256", 900).unwrap();

    let service = AuthService::new(
        users,
        sessions.clone(),
        hasher,
        TokenCodec::new(SECRET, "HS256", 900).unwrap(),
        Duration::from_secs(3600),
    )
    .unwrap();

    TestEnv {
        service,
        sessions,
        codec,
    }
}

fn alice() -> Registration {
    Registration {
        username: "alice".to_string(),
        email: "alice@x.com".to_string(),
        password: "Secret123".to_string(),
    }
}

fn login_as(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn register_never_stores_the_plaintext() {
    let env = test_env();

    let user = env.service.register(&alice()).await.unwrap();

    assert_ne!(user.password_hash, "Secret123");
    assert!(user.password_hash.starts_with("$argon2id$"));
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@x.com");
    assert_eq!(user.role, agora_model::Role::User);
}

#[tokio::test]
async fn duplicate_username_and_email_are_distinct_conflicts() {
    let env = test_env();
    env.service.register(&alice()).await.unwrap();

    let mut same_username = alice();
    same_username.email = "other@x.com".to_string();
    assert!(matches!(
        env.service.register(&same_username).await,
        Err(AuthError::UsernameTaken)
    ));

    let mut same_email = alice();
    same_email.username = "alice2".to_string();
    assert!(matches!(
        env.service.register(&same_email).await,
        Err(AuthError::EmailTaken)
    ));
}

#[tokio::test]
async fn login_issues_a_valid_token_pair() {
    let env = test_env();
    let user = env.service.register(&alice()).await.unwrap();

    let pair = env
        .service
        .login(&login_as("alice", "Secret123"))
        .await
        .unwrap();

    let claims = env.codec.validate_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.role, "user");
    assert_eq!(pair.refresh_token.len(), 43);
}

#[tokio::test]
async fn unknown_user_and_wrong_password_fail_identically() {
    let env = test_env();
    env.service.register(&alice()).await.unwrap();

    let wrong_password = env
        .service
        .login(&login_as("alice", "WrongPassword"))
        .await
        .unwrap_err();
    let unknown_user = env
        .service
        .login(&login_as("bob", "Secret123"))
        .await
        .unwrap_err();

    assert!(matches!(
        wrong_password,
        AuthError::IncorrectUsernameOrPassword
    ));
    assert!(matches!(unknown_user, AuthError::IncorrectUsernameOrPassword));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn failure_timing_is_the_same_order_of_magnitude() {
    let env = test_env();
    env.service.register(&alice()).await.unwrap();

    const SAMPLES: usize = 5;

    let mut wrong_password = Vec::with_capacity(SAMPLES);
    for _ in 0..SAMPLES {
        let start = Instant::now();
        let _ = env.service.login(&login_as("alice", "WrongPassword")).await;
        wrong_password.push(start.elapsed());
    }

    let mut unknown_user = Vec::with_capacity(SAMPLES);
    for _ in 0..SAMPLES {
        let start = Instant::now();
        let _ = env.service.login(&login_as("bob", "Secret123")).await;
        unknown_user.push(start.elapsed());
    }

    wrong_password.sort();
    unknown_user.sort();
    let wrong_median = wrong_password[SAMPLES / 2];
    let unknown_median = unknown_user[SAMPLES / 2];

    // Both paths run a full argon2 verification, so medians stay within
    // an order of magnitude of each other. Without the dummy-hash path
    // the unknown-user case would be several hundred times faster.
    let ratio = wrong_median.as_secs_f64() / unknown_median.as_secs_f64();
    assert!(
        (0.1..=10.0).contains(&ratio),
        "timing ratio out of bounds: {ratio} ({wrong_median:?} vs {unknown_median:?})"
    );
}

#[tokio::test]
async fn refresh_rotates_and_old_token_dies() {
    let env = test_env();
    env.service.register(&alice()).await.unwrap();
    let pair = env
        .service
        .login(&login_as("alice", "Secret123"))
        .await
        .unwrap();

    let rotated = env.service.refresh(&pair.refresh_token).await.unwrap();
    assert_ne!(rotated.refresh_token, pair.refresh_token);

    // The redeemed token is single-use.
    assert!(matches!(
        env.service.refresh(&pair.refresh_token).await,
        Err(AuthError::InvalidRefreshToken)
    ));

    // The replacement works exactly once more.
    let rotated_again = env.service.refresh(&rotated.refresh_token).await.unwrap();
    assert_ne!(rotated_again.refresh_token, rotated.refresh_token);
}

#[tokio::test]
async fn refresh_with_a_never_issued_token_fails() {
    let env = test_env();

    assert!(matches!(
        env.service.refresh("never-issued").await,
        Err(AuthError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn full_login_refresh_scenario() {
    let env = test_env();
    let user = env.service.register(&alice()).await.unwrap();

    let pair = env
        .service
        .login(&login_as("alice", "Secret123"))
        .await
        .unwrap();

    let rotated = env.service.refresh(&pair.refresh_token).await.unwrap();

    assert!(matches!(
        env.service.refresh(&pair.refresh_token).await,
        Err(AuthError::InvalidRefreshToken)
    ));

    // The rotated access token still resolves back to alice.
    let resolved = env
        .service
        .authenticate_token(&rotated.access_token)
        .await
        .unwrap();
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.username, "alice");
}

#[tokio::test]
async fn tampered_access_token_is_rejected() {
    let env = test_env();
    env.service.register(&alice()).await.unwrap();
    let pair = env
        .service
        .login(&login_as("alice", "Secret123"))
        .await
        .unwrap();

    let mut forged = pair.access_token.clone();
    forged.pop();
    forged.push('x');

    assert!(matches!(
        env.service.authenticate_token(&forged).await,
        Err(AuthError::InvalidToken)
    ));
}

#[tokio::test]
async fn authorization_requires_a_subset_of_cached_permissions() {
    let env = test_env();
    let user = env.service.register(&alice()).await.unwrap();

    env.sessions
        .grant_permissions(
            user.id,
            &["posts:read".to_string(), "posts:create".to_string()],
        )
        .await
        .unwrap();

    let read: HashSet<String> = ["posts:read".to_string()].into();
    assert!(env.service.check_authorization(&user, &read).await.unwrap());

    let both: HashSet<String> = ["posts:read".to_string(), "posts:create".to_string()].into();
    assert!(env.service.check_authorization(&user, &both).await.unwrap());

    let delete: HashSet<String> = ["posts:delete".to_string()].into();
    assert!(matches!(
        env.service.check_authorization(&user, &delete).await,
        Err(AuthError::InsufficientPermission)
    ));
}

#[tokio::test]
async fn authorization_fails_closed_on_an_empty_cache() {
    let env = test_env();
    let user = env.service.register(&alice()).await.unwrap();

    // Nothing was ever granted: even an empty requirement is refused.
    let none: HashSet<String> = HashSet::new();
    assert!(matches!(
        env.service.check_authorization(&user, &none).await,
        Err(AuthError::InsufficientPermission)
    ));

    let read: HashSet<String> = ["posts:read".to_string()].into();
    assert!(matches!(
        env.service.check_authorization(&user, &read).await,
        Err(AuthError::InsufficientPermission)
    ));
}

#[tokio::test]
async fn list_users_paginates_with_total_count() {
    let env = test_env();

    for name in ["alice", "bob", "carol"] {
        env.service
            .register(&Registration {
                username: name.to_string(),
                email: format!("{name}@x.com"),
                password: "Secret123".to_string(),
            })
            .await
            .unwrap();
    }

    let first = env.service.list_users(1, 2).await.unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total, 3);
    assert_eq!(first.page, 1);

    let second = env.service.list_users(2, 2).await.unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.total, 3);
}
