//! Repository for the `users` table.

use ludo_core::accounts::{validate_language_code, validate_username};
use ludo_core::error::CoreError;
use ludo_core::level::CourseLevel;
use ludo_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::error::{unique_violation_constraint, DbError};
use crate::models::user::{CreateUser, User, UserProfile};
use crate::repositories::{LanguageRepo, ProgressRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, role, current_language, current_level, \
                       xp, gems, hearts, created_at, updated_at";

/// Provides account creation, lookups, and the gamification-state writes.
pub struct UserRepo;

impl UserRepo {
    /// Register a new learner, returning the created row.
    ///
    /// Fails with [`CoreError::Validation`] for a malformed username or an
    /// unknown language, and with [`CoreError::Conflict`] if the username is
    /// taken. The unique constraint is the source of truth for the latter.
    pub async fn register(pool: &PgPool, input: &CreateUser) -> Result<User, DbError> {
        validate_username(&input.username)?;

        if let Some(code) = input.current_language.as_deref() {
            validate_language_code(code)?;
            if !LanguageRepo::exists(pool, code).await? {
                let message = format!("Unsupported language '{code}'");
                return Err(CoreError::Validation(message).into());
            }
        }

        let query = format!(
            "INSERT INTO users (username, password_hash, current_language)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.current_language)
            .fetch_one(pool)
            .await
            .map_err(|err| match unique_violation_constraint(&err).as_deref() {
                Some("uq_users_username") => {
                    let message = format!("Username '{}' already exists", input.username);
                    DbError::Core(CoreError::Conflict(message))
                }
                _ => DbError::from(err),
            })
    }

    /// Find a user by internal ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<User>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username<'e, E>(
        executor: E,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(executor)
            .await
    }

    /// Overwrite the learner's current level.
    ///
    /// Setting the same level twice is a no-op in effect. Fails with
    /// [`CoreError::NotFound`] if the user does not exist.
    pub async fn set_level<'e, E>(executor: E, id: DbId, level: CourseLevel) -> Result<(), DbError>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "UPDATE users SET current_level = $2, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(level.as_str())
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("user", id).into());
        }
        Ok(())
    }

    /// Add `amount` XP to a user. Returns `true` if the row was updated.
    pub async fn add_xp<'e, E>(executor: E, id: DbId, amount: i32) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result =
            sqlx::query("UPDATE users SET xp = xp + $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(amount)
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Build the learner's profile from one consistent snapshot of the user
    /// row and their progress rows.
    pub async fn profile(pool: &PgPool, id: DbId) -> Result<UserProfile, DbError> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let user = Self::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| CoreError::not_found("user", id))?;

        let completed = ProgressRepo::list_for_user(&mut *tx, id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        tx.commit().await?;
        Ok(UserProfile::new(user, completed))
    }
}
