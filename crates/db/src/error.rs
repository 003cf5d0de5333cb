use ludo_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Error returned by repository operations that carry domain outcomes
/// (unknown entities, validation, uniqueness conflicts) on top of storage
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    /// Unique violations on `uq_`-prefixed constraints become
    /// [`CoreError::Conflict`]; everything else stays a storage error.
    fn from(err: sqlx::Error) -> Self {
        match unique_violation_constraint(&err) {
            Some(constraint) => DbError::Core(CoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ))),
            None => DbError::Sqlx(err),
        }
    }
}

/// The name of the violated `uq_` constraint, if `err` is a unique violation.
pub fn unique_violation_constraint(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return None;
    }
    db_err
        .constraint()
        .filter(|c| c.starts_with("uq_"))
        .map(str::to_string)
}
