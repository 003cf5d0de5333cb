//! Repository for the `user_progress` table and the lesson-completion
//! operation.

use ludo_core::error::CoreError;
use ludo_core::progress::{decide_completion, validate_lesson_id, validate_score, CompletionOutcome};
use ludo_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::error::DbError;
use crate::models::progress::{CompletionResult, UserProgress};
use crate::repositories::{LessonRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, lesson_slug, score, completed_at";

pub struct ProgressRepo;

impl ProgressRepo {
    /// All progress rows of a user in first-completion order.
    ///
    /// Raising a score later does not move the lesson in this order.
    pub async fn list_for_user<'e, E>(
        executor: E,
        user_id: DbId,
    ) -> Result<Vec<UserProgress>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM user_progress
             WHERE user_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .fetch_all(executor)
            .await
    }

    /// Read the stored score for a key and lock the row until commit.
    async fn lock_score<'e, E>(
        executor: E,
        user_id: DbId,
        lesson_slug: &str,
    ) -> Result<Option<i32>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT score FROM user_progress
             WHERE user_id = $1 AND lesson_slug = $2
             FOR UPDATE",
        )
        .bind(user_id)
        .bind(lesson_slug)
        .fetch_optional(executor)
        .await?;
        Ok(row.map(|(score,)| score))
    }

    /// Insert the first record for a key. Returns `false` if another
    /// transaction inserted it first.
    async fn insert_first<'e, E>(
        executor: E,
        user_id: DbId,
        lesson_slug: &str,
        score: i32,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "INSERT INTO user_progress (user_id, lesson_slug, score)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_user_progress_user_lesson DO NOTHING",
        )
        .bind(user_id)
        .bind(lesson_slug)
        .bind(score)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn raise_score<'e, E>(
        executor: E,
        user_id: DbId,
        lesson_slug: &str,
        score: i32,
    ) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            "UPDATE user_progress SET score = $3, completed_at = NOW()
             WHERE user_id = $1 AND lesson_slug = $2 AND score < $3",
        )
        .bind(user_id)
        .bind(lesson_slug)
        .bind(score)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Record that `user_id` completed `lesson_slug` with `score`.
    ///
    /// Keeps the best score per (user, lesson) and grants XP only when the
    /// record is created. The read, the decision, and the writes run in one
    /// transaction: the existing row is locked with `FOR UPDATE`, and a first
    /// insert racing another first insert loses on
    /// `uq_user_progress_user_lesson`, then re-reads and applies the
    /// improve-or-keep rule instead. Completions of different keys never
    /// wait on each other apart from the short XP update on the user row.
    ///
    /// Errors: [`CoreError::Validation`] for a score outside `0..=100` or a
    /// blank lesson id, [`CoreError::NotFound`] for an unknown user or lesson.
    pub async fn record_completion(
        pool: &PgPool,
        user_id: DbId,
        lesson_slug: &str,
        score: i32,
    ) -> Result<CompletionResult, DbError> {
        validate_lesson_id(lesson_slug)?;
        validate_score(score)?;

        let mut tx = pool.begin().await?;

        if UserRepo::find_by_id(&mut *tx, user_id).await?.is_none() {
            return Err(CoreError::not_found("user", user_id).into());
        }
        if !LessonRepo::exists(&mut *tx, lesson_slug).await? {
            return Err(CoreError::not_found("lesson", lesson_slug).into());
        }

        let existing = Self::lock_score(&mut *tx, user_id, lesson_slug).await?;
        let mut outcome = decide_completion(existing, score);

        if let CompletionOutcome::FirstCompletion { .. } = outcome {
            if !Self::insert_first(&mut *tx, user_id, lesson_slug, score).await? {
                // Lost the race: the row now exists and is committed.
                let current = Self::lock_score(&mut *tx, user_id, lesson_slug)
                    .await?
                    .ok_or_else(|| CoreError::Internal("progress row vanished".into()))?;
                outcome = decide_completion(Some(current), score);
            }
        }

        match outcome {
            CompletionOutcome::FirstCompletion { .. } => {
                UserRepo::add_xp(&mut *tx, user_id, outcome.xp_awarded()).await?;
            }
            CompletionOutcome::Improved { .. } => {
                Self::raise_score(&mut *tx, user_id, lesson_slug, score).await?;
            }
            CompletionOutcome::Unchanged { .. } => {}
        }

        tx.commit().await?;

        tracing::info!(
            user_id,
            lesson_id = %lesson_slug,
            score,
            outcome = outcome.as_str(),
            xp_awarded = outcome.xp_awarded(),
            "Lesson completion recorded",
        );

        Ok(CompletionResult {
            lesson_id: lesson_slug.to_string(),
            outcome,
            xp_awarded: outcome.xp_awarded(),
        })
    }
}
