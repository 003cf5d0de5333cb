//! User progress model.

use ludo_core::progress::CompletionOutcome;
use ludo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_progress` table: a learner's best score for a lesson.
#[derive(Debug, Clone, FromRow)]
pub struct UserProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub lesson_slug: String,
    pub score: i32,
    pub completed_at: Timestamp,
}

/// `{lesson_id, score}` entry of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedLesson {
    pub lesson_id: String,
    pub score: i32,
}

impl From<UserProgress> for CompletedLesson {
    fn from(row: UserProgress) -> Self {
        Self {
            lesson_id: row.lesson_slug,
            score: row.score,
        }
    }
}

/// Result of applying one completion event.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResult {
    pub lesson_id: String,
    pub outcome: CompletionOutcome,
    pub xp_awarded: i32,
}
