// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argon2id password hashing for the Parlor chat backend.
//!
//! The rest of the workspace treats this as an opaque capability:
//! `hash(password) -> digest` and `verify(password, digest) -> bool`.
//! Digests use the PHC string format, so hashing parameters travel with
//! each digest and can be tightened without invalidating stored accounts.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use parlor_config::model::AuthConfig;
use parlor_core::ParlorError;

/// Hashes and verifies account passwords with Argon2id.
///
/// Parameters come from the `[auth]` config section (OWASP-shaped defaults,
/// minimums enforced by config validation).
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    memory_cost: u32,
    iterations: u32,
    parallelism: u32,
}

impl PasswordHasher {
    /// Create a hasher with explicit Argon2id parameters.
    pub fn new(memory_cost: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            iterations,
            parallelism,
        }
    }

    /// Create a hasher from the `[auth]` config section.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.memory_cost, config.iterations, config.parallelism)
    }

    fn argon2(&self) -> Result<Argon2<'static>, ParlorError> {
        let params = Params::new(self.memory_cost, self.iterations, self.parallelism, None)
            .map_err(|e| ParlorError::Config(format!("invalid Argon2id parameters: {e}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a password into a PHC digest string with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, ParlorError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ParlorError::Internal(format!("password hashing failed: {e}")))?;
        Ok(digest.to_string())
    }

    /// Verify a password against a stored PHC digest.
    ///
    /// Returns `Ok(false)` on a mismatch; parameters are read back from the
    /// digest itself, so digests hashed under older settings still verify.
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, ParlorError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| ParlorError::Internal(format!("malformed password digest: {e}")))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(ParlorError::Internal(format!(
                "password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}
