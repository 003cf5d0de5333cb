//! Repository for the `courses` table.

use std::collections::HashMap;

use ludo_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::course::{Course, CourseWithLessons};
use crate::models::lesson::LessonSummary;
use crate::repositories::LessonRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, description, language_code, level, color_hex, created_at";

/// Provides read access to courses and the insert used by seeding.
pub struct CourseRepo;

impl CourseRepo {
    /// List courses, optionally restricted to one language code, each with
    /// its lessons in ascending order.
    pub async fn list_with_lessons(
        pool: &PgPool,
        language_code: Option<&str>,
    ) -> Result<Vec<CourseWithLessons>, sqlx::Error> {
        let courses = Self::list(pool, language_code).await?;
        let course_ids: Vec<DbId> = courses.iter().map(|c| c.id).collect();

        let mut lessons_by_course: HashMap<DbId, Vec<LessonSummary>> = HashMap::new();
        for lesson in LessonRepo::list_for_courses(pool, &course_ids).await? {
            lessons_by_course
                .entry(lesson.course_id)
                .or_default()
                .push(lesson.into());
        }

        Ok(courses
            .into_iter()
            .map(|course| {
                let lessons = lessons_by_course.remove(&course.id).unwrap_or_default();
                CourseWithLessons::new(course, lessons)
            })
            .collect())
    }

    /// List course rows in catalogue order, optionally filtered by language.
    pub async fn list<'e, E>(
        executor: E,
        language_code: Option<&str>,
    ) -> Result<Vec<Course>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE ($1::VARCHAR IS NULL OR language_code = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(language_code)
            .fetch_all(executor)
            .await
    }

    /// Number of course rows; zero means the catalogue has not been seeded.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM courses")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Insert a course and return its internal id.
    pub async fn create<'e, E>(
        executor: E,
        slug: &str,
        title: &str,
        description: &str,
        language_code: &str,
        level: &str,
        color_hex: &str,
    ) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO courses (slug, title, description, language_code, level, color_hex)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(slug)
        .bind(title)
        .bind(description)
        .bind(language_code)
        .bind(level)
        .bind(color_hex)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }
}
