//! Lesson entity model and views.

use ludo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::question::QuestionView;

/// A row from the `lessons` table.
#[derive(Debug, Clone, FromRow)]
pub struct Lesson {
    pub id: DbId,
    /// Externally stable id (e.g. `"lesson_basics_1"`).
    pub slug: String,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub order_index: i32,
    pub created_at: Timestamp,
}

/// Lesson metadata nested in a course listing.
#[derive(Debug, Clone, Serialize)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i32,
}

impl From<Lesson> for LessonSummary {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.slug,
            title: lesson.title,
            description: lesson.description,
            order: lesson.order_index,
        }
    }
}

/// A lesson with its quiz questions, options freshly shuffled.
#[derive(Debug, Clone, Serialize)]
pub struct LessonDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionView>,
}
