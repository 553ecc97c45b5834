//! Password hashing and verification using Argon2id.
//!
//! - Memory-hard hashing with a random per-hash salt
//! - PHC-formatted hash strings
//! - Constant-time comparison during verification

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{AuthError, AuthResult};

/// Password hashing configuration.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    /// Time cost (iterations).
    pub time_cost: u32,
    /// Parallelism factor.
    pub parallelism: u32,
    /// Output hash length.
    pub hash_length: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        // OWASP recommended settings for Argon2id
        Self {
            memory_cost: 19 * 1024, // 19 MiB
            time_cost: 2,
            parallelism: 1,
            hash_length: 32,
        }
    }
}

impl PasswordPolicy {
    /// Creates a new password policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the memory cost in KiB.
    #[must_use]
    pub const fn memory_cost(mut self, kib: u32) -> Self {
        self.memory_cost = kib;
        self
    }

    /// Sets the time cost (iterations).
    #[must_use]
    pub const fn time_cost(mut self, iterations: u32) -> Self {
        self.time_cost = iterations;
        self
    }

    /// Sets the parallelism factor.
    #[must_use]
    pub const fn parallelism(mut self, p: u32) -> Self {
        self.parallelism = p;
        self
    }

    /// Builds the Argon2 parameters.
    #[allow(clippy::missing_const_for_fn)] // Params::new is not const
    fn build_params(&self) -> Result<Params, argon2::Error> {
        Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(self.hash_length as usize),
        )
    }
}

/// Password hasher using Argon2id.
pub struct PasswordHasherService {
    policy: PasswordPolicy,
}

impl PasswordHasherService {
    /// Creates a new password hasher with the given policy.
    #[must_use]
    pub const fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Creates a new password hasher with the default policy.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PasswordPolicy::default())
    }

    /// Hashes a password.
    ///
    /// Returns the PHC-formatted hash string. The salt is random, so
    /// hashing the same password twice yields different strings; hash
    /// equality is never a verification method.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if hashing fails.
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let params = self
            .policy
            .build_params()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::IncorrectUsernameOrPassword` on a mismatch
    /// and `AuthError::Internal` when the stored hash is malformed.
    pub fn verify(&self, password: &str, hash: &str) -> AuthResult<()> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::Internal(e.to_string()))?;

        // Argon2::default() can verify any Argon2 variant
        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(()),
            Err(argon2::password_hash::Error::Password) => {
                Err(AuthError::IncorrectUsernameOrPassword)
            }
            Err(e) => Err(AuthError::Internal(e.to_string())),
        }
    }
}

impl Default for PasswordHasherService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasherService {
        PasswordHasherService::new(PasswordPolicy::new().memory_cost(1024).time_cost(1))
    }

    #[test]
    fn hash_and_verify() {
        let hasher = fast_hasher();
        let password = "correct horse battery staple";

        let hash = hasher.hash(password).unwrap();

        // Hash should be PHC formatted
        assert!(hash.starts_with("$argon2id$"));

        // Correct password should verify
        assert!(hasher.verify(password, &hash).is_ok());

        // Wrong password should not verify
        assert!(matches!(
            hasher.verify("wrong password", &hash),
            Err(AuthError::IncorrectUsernameOrPassword)
        ));
    }

    #[test]
    fn same_password_produces_different_hashes() {
        let hasher = fast_hasher();

        let hash1 = hasher.hash("password1").unwrap();
        let hash2 = hasher.hash("password1").unwrap();

        // Salts are random
        assert_ne!(hash1, hash2);

        // Both still verify
        assert!(hasher.verify("password1", &hash1).is_ok());
        assert!(hasher.verify("password1", &hash2).is_ok());
    }

    #[test]
    fn malformed_hash_is_not_a_mismatch() {
        let hasher = fast_hasher();

        let err = hasher.verify("anything", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn custom_policy() {
        let policy = PasswordPolicy::new()
            .memory_cost(2 * 1024)
            .time_cost(1)
            .parallelism(2);

        let hasher = PasswordHasherService::new(policy);
        let hash = hasher.hash("password").unwrap();

        assert!(hasher.verify("password", &hash).is_ok());
    }
}
