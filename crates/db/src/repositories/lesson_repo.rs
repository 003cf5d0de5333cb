//! Repository for the `lessons` table.

use ludo_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::lesson::{Lesson, LessonDetail};
use crate::repositories::QuestionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, course_id, title, description, order_index, created_at";

/// Provides read access to lessons and the insert used by seeding.
pub struct LessonRepo;

impl LessonRepo {
    /// Find a lesson by its stable string id.
    pub async fn find_by_slug<'e, E>(executor: E, slug: &str) -> Result<Option<Lesson>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE slug = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    /// Whether a lesson with the given stable id exists.
    pub async fn exists<'e, E>(executor: E, slug: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM lessons WHERE slug = $1)")
                .bind(slug)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }

    /// Lessons of the given courses, ordered by course then ascending order.
    pub async fn list_for_courses<'e, E>(
        executor: E,
        course_ids: &[DbId],
    ) -> Result<Vec<Lesson>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons
             WHERE course_id = ANY($1)
             ORDER BY course_id, order_index, id"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_ids)
            .fetch_all(executor)
            .await
    }

    /// Lesson metadata plus its questions in ascending order, with options
    /// shuffled for this read.
    ///
    /// Returns `None` if no lesson has the given stable id.
    pub async fn find_detail(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<LessonDetail>, sqlx::Error> {
        let Some(lesson) = Self::find_by_slug(pool, slug).await? else {
            return Ok(None);
        };

        let questions = QuestionRepo::list_for_lesson(pool, lesson.id)
            .await?
            .into_iter()
            .map(|q| q.into_view())
            .collect();

        Ok(Some(LessonDetail {
            id: lesson.slug,
            title: lesson.title,
            description: lesson.description,
            questions,
        }))
    }

    /// Insert a lesson under a course and return its internal id.
    pub async fn create<'e, E>(
        executor: E,
        course_id: DbId,
        slug: &str,
        title: &str,
        description: &str,
        order_index: i32,
    ) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO lessons (course_id, slug, title, description, order_index)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(course_id)
        .bind(slug)
        .bind(title)
        .bind(description)
        .bind(order_index)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }
}
