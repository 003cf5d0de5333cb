//! One-time seeding of reference data.
//!
//! Each seeding step runs in its own transaction, serialized across processes
//! with a transaction-scoped advisory lock, and is skipped when its table
//! already has rows. A failure rolls the whole step back, so a table is
//! either fully seeded or untouched.

pub mod catalog;

use ludo_core::quiz::encode_options;
use sqlx::PgPool;

use crate::models::question::CreateQuestion;
use crate::repositories::{CourseRepo, LanguageRepo, LessonRepo, QuestionRepo, VocabularyRepo};

/// Advisory lock key held while the catalogue is seeded.
const CONTENT_SEED_LOCK: i64 = 0x4c55_444f_0001;

/// Advisory lock key held while languages and vocabulary are seeded.
const VOCABULARY_SEED_LOCK: i64 = 0x4c55_444f_0002;

/// What a seeding run inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub courses: usize,
    pub lessons: usize,
    pub questions: usize,
    pub languages: usize,
    pub vocabulary_items: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        *self == SeedReport::default()
    }
}

/// Seed languages, vocabulary, and the course catalogue.
///
/// Languages come first because vocabulary and users reference them.
pub async fn seed_all(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = seed_vocabulary(pool).await?;
    let content = seed_content(pool).await?;
    report.courses = content.courses;
    report.lessons = content.lessons;
    report.questions = content.questions;
    Ok(report)
}

/// Insert the built-in course catalogue unless `courses` already has rows.
pub async fn seed_content(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(CONTENT_SEED_LOCK)
        .execute(&mut *tx)
        .await?;

    let mut report = SeedReport::default();
    if CourseRepo::count(&mut *tx).await? > 0 {
        tracing::debug!("Course catalogue already present, skipping seed");
        return Ok(report);
    }

    for course in catalog::COURSES {
        let course_id = CourseRepo::create(
            &mut *tx,
            course.slug,
            course.title,
            course.description,
            course.language_code,
            course.level.as_str(),
            course.color_hex,
        )
        .await?;
        report.courses += 1;

        for lesson in course.lessons {
            let lesson_id = LessonRepo::create(
                &mut *tx,
                course_id,
                lesson.slug,
                lesson.title,
                lesson.description,
                lesson.order,
            )
            .await?;
            report.lessons += 1;

            for question in lesson.questions {
                let input = CreateQuestion {
                    lesson_id,
                    question_type: question.kind.as_str().to_string(),
                    statement: question.statement.to_string(),
                    instruction: question.instruction.to_string(),
                    options: encode_options(question.options),
                    correct_answer: question.correct_answer.to_string(),
                    order_index: question.order,
                };
                QuestionRepo::create(&mut *tx, &input).await?;
                report.questions += 1;
            }
        }
    }

    tx.commit().await?;
    tracing::info!(
        courses = report.courses,
        lessons = report.lessons,
        questions = report.questions,
        "Seeded course catalogue",
    );
    Ok(report)
}

/// Insert missing languages, then the starter vocabulary unless
/// `vocabulary_items` already has rows.
pub async fn seed_vocabulary(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(VOCABULARY_SEED_LOCK)
        .execute(&mut *tx)
        .await?;

    let mut report = SeedReport::default();
    for (code, name) in catalog::LANGUAGES {
        if LanguageRepo::insert_if_missing(&mut *tx, code, name).await? {
            report.languages += 1;
        }
    }

    if VocabularyRepo::count(&mut *tx).await? == 0 {
        for (code, word, translation, level) in catalog::VOCABULARY {
            VocabularyRepo::create(
                &mut *tx,
                code,
                word,
                translation,
                &catalog::audio_url(code, word),
                *level,
            )
            .await?;
            report.vocabulary_items += 1;
        }
    }

    tx.commit().await?;
    if report.languages > 0 || report.vocabulary_items > 0 {
        tracing::info!(
            languages = report.languages,
            vocabulary_items = report.vocabulary_items,
            "Seeded languages and vocabulary",
        );
    }
    Ok(report)
}
