//! Learner account rules applied at registration.

use crate::error::CoreError;

/// Matches `users.username VARCHAR(50)`.
pub const MAX_USERNAME_LENGTH: usize = 50;

pub const MIN_USERNAME_LENGTH: usize = 3;

/// Matches `languages.code VARCHAR(10)`.
pub const MAX_LANGUAGE_CODE_LENGTH: usize = 10;

/// Usernames are 3-50 characters of ASCII letters, digits, `_`, `-` or `.`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if let Some(bad) = username
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(CoreError::Validation(format!(
            "Username contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

/// Language codes are short lowercase tags such as `en` or `ja`.
///
/// Whether the code is actually offered is checked against the `languages`
/// table by the caller.
pub fn validate_language_code(code: &str) -> Result<(), CoreError> {
    if code.is_empty()
        || code.len() > MAX_LANGUAGE_CODE_LENGTH
        || !code.chars().all(|c| c.is_ascii_lowercase() || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "Invalid language code '{code}'"
        )));
    }
    Ok(())
}
