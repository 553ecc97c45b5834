//! # agora-auth
//!
//! Authentication core for the Agora forum backend.
//!
//! This crate implements registration, login, refresh-token rotation,
//! and authorization checks.
//!
//! ## Features
//!
//! - Argon2id password hashing with a dummy-hash path for
//!   username-enumeration resistance
//! - Signed, short-lived access tokens (symmetric HMAC JWTs)
//! - Opaque, single-use refresh tokens rotated through the session store
//! - Role and permission-set authorization checks
//!
//! ## Example
//!
//! ```ignore
//! use agora_auth::{AuthService, Credentials, PasswordHasherService, TokenCodec};
//!
//! let codec = TokenCodec::new(b"secret", "HS256", 900)?;
//! let service = AuthService::new(users, sessions, PasswordHasherService::with_defaults(), codec, refresh_ttl)?;
//!
//! let pair = service.login(&Credentials {
//!     username: "alice".into(),
//!     password: "Secret123".into(),
//! }).await?;
//! let refreshed = service.refresh(&pair.refresh_token).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use password::{PasswordHasherService, PasswordPolicy};
pub use service::{AuthService, Credentials, Registration, TokenPair};
pub use token::{generate_refresh_token, AccessClaims, TokenCodec};
