//! Argon2id password hashing and the registration password policy.
//!
//! Hashes are stored as PHC strings, so the salt and parameters travel with
//! the hash. Hashing is CPU-bound; handlers call the `*_blocking` wrappers,
//! which move the work off the async runtime.

use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use ludo_core::error::CoreError;

use crate::error::AppError;

/// Minimum password length applied when `PASSWORD_MIN_LENGTH` is unset.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Rules a new password must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Read `PASSWORD_MIN_LENGTH` (default `8`).
    ///
    /// # Panics
    ///
    /// Panics if the variable is set but not a valid `usize`.
    pub fn from_env() -> Self {
        let min_length = std::env::var("PASSWORD_MIN_LENGTH")
            .map(|raw| {
                raw.parse()
                    .expect("PASSWORD_MIN_LENGTH must be a valid usize")
            })
            .unwrap_or(DEFAULT_MIN_LENGTH);
        Self { min_length }
    }

    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> Result<(), CoreError> {
        if password.chars().count() < self.min_length {
            return Err(CoreError::Validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; only a malformed hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// [`hash_password`] on the blocking thread pool.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// [`verify_password`] on the blocking thread pool.
///
/// With no stored hash (unknown user) the password is checked against a fixed
/// dummy hash so both failure paths cost the same, and `false` is returned.
pub async fn verify_password_blocking(
    password: String,
    stored_hash: Option<String>,
) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            let _ = verify_password(&password, dummy_hash());
            Ok(false)
        }
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Verification task failed: {e}")))?
    .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))
}

fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("ludo-timing-equalizer").unwrap_or_default())
}
