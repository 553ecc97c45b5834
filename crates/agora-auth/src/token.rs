//! Access-token codec and refresh-token generation.
//!
//! Access tokens are self-contained signed JWTs carrying the subject,
//! role, and expiry. Refresh tokens are opaque random strings with no
//! embedded claims; their state lives only in the session store.

use std::fmt;
use std::str::FromStr;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agora_model::Role;

use crate::error::{AuthError, AuthResult};

/// Number of random bytes in a refresh token (256 bits of entropy).
const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user id, stringified.
    pub sub: String,
    /// Absolute expiry timestamp (seconds since the epoch).
    pub exp: i64,
    /// Lowercased role name.
    pub role: String,
}

impl AccessClaims {
    /// Parses the subject back into a user id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` when the subject is not a UUID.
    pub fn user_id(&self) -> AuthResult<Uuid> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }

    /// Parses the role claim.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` when the role is unknown.
    pub fn role(&self) -> AuthResult<Role> {
        self.role.parse().map_err(|_| AuthError::InvalidToken)
    }
}

/// Codec for signing and validating access tokens.
///
/// Uses a symmetric HMAC scheme; the secret and algorithm name come
/// from configuration. Construction fails on a misconfigured key, which
/// callers treat as fatal at startup.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_token_lifespan: i64,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .field("access_token_lifespan", &self.access_token_lifespan)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from a shared secret.
    ///
    /// `access_token_lifespan` is in seconds.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` when the secret is empty or the
    /// algorithm name is not a supported HMAC algorithm.
    pub fn new(secret: &[u8], algorithm: &str, access_token_lifespan: i64) -> AuthResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::Internal(
                "signing secret must not be empty".to_string(),
            ));
        }

        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| AuthError::Internal(format!("unknown signing algorithm: {algorithm}")))?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(AuthError::Internal(format!(
                "signing algorithm must be symmetric, got {algorithm:?}"
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            access_token_lifespan,
        })
    }

    /// Issues a signed access token for a user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if signing fails.
    pub fn issue_access_token(&self, user_id: Uuid, role: Role) -> AuthResult<String> {
        let expire = Utc::now() + Duration::seconds(self.access_token_lifespan);
        let claims = AccessClaims {
            sub: user_id.to_string(),
            exp: expire.timestamp(),
            role: role.as_str().to_string(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Validates and decodes an access token.
    ///
    /// Signature, expiry, and subject failures are all reported as the
    /// same `AuthError::InvalidToken`; the caller learns nothing about
    /// which check failed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` when any check fails.
    pub fn validate_access_token(&self, token: &str) -> AuthResult<AccessClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = true;

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Returns the configured access-token lifespan in seconds.
    #[must_use]
    pub const fn access_token_lifespan(&self) -> i64 {
        self.access_token_lifespan
    }
}

/// Generates an opaque refresh token.
///
/// The token is 32 random bytes, URL-safe base64 encoded without
/// padding. It carries no claims; its meaning exists only in the
/// session store.
#[must_use]
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::rng().fill(&mut bytes[..]);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SECRET: &[u8] = b"test-signing-secret";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, "HS256", 900).unwrap()
    }

    #[test]
    fn round_trip() {
        let codec = codec();
        let user_id = Uuid::now_v7();

        let token = codec.issue_access_token(user_id, Role::Moderator).unwrap();
        let claims = codec.validate_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.role().unwrap(), Role::Moderator);
        assert_eq!(claims.role, "moderator");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn expired_token_is_rejected() {
        // A codec that issues tokens already an hour past expiry.
        let expired = TokenCodec::new(SECRET, "HS256", -3600).unwrap();
        let token = expired
            .issue_access_token(Uuid::now_v7(), Role::User)
            .unwrap();

        assert!(matches!(
            codec().validate_access_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let other = TokenCodec::new(b"another-secret", "HS256", 900).unwrap();
        let token = other
            .issue_access_token(Uuid::now_v7(), Role::User)
            .unwrap();

        assert!(matches!(
            codec().validate_access_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn missing_subject_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
            role: String,
        }

        let claims = NoSubject {
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
            role: "user".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            codec().validate_access_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn asymmetric_algorithm_is_a_startup_error() {
        assert!(TokenCodec::new(SECRET, "RS256", 900).is_err());
        assert!(TokenCodec::new(SECRET, "ES384", 900).is_err());
        assert!(TokenCodec::new(SECRET, "none", 900).is_err());
    }

    #[test]
    fn empty_secret_is_a_startup_error() {
        assert!(TokenCodec::new(b"", "HS256", 900).is_err());
    }

    #[test]
    fn refresh_token_is_url_safe() {
        let token = generate_refresh_token();

        // 32 bytes -> 43 base64url chars, no padding
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn refresh_tokens_are_unique() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_refresh_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
