//! Course entity model and views.

use ludo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::lesson::LessonSummary;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: DbId,
    /// Externally stable id (e.g. `"c1"`, `"placement"`).
    pub slug: String,
    pub title: String,
    pub description: String,
    pub language_code: String,
    pub level: String,
    pub color_hex: String,
    pub created_at: Timestamp,
}

/// A course with its lessons in ascending order, as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithLessons {
    pub id: String,
    pub title: String,
    pub description: String,
    pub language_code: String,
    pub level: String,
    pub color: String,
    pub lessons: Vec<LessonSummary>,
}

impl CourseWithLessons {
    pub fn new(course: Course, lessons: Vec<LessonSummary>) -> Self {
        Self {
            id: course.slug,
            title: course.title,
            description: course.description,
            language_code: course.language_code,
            level: course.level,
            color: course.color_hex,
            lessons,
        }
    }
}
