//! Handlers for the course catalogue: languages, courses and lesson quizzes.
//!
//! All endpoints require authentication.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use ludo_core::error::CoreError;
use ludo_db::repositories::{CourseRepo, LanguageRepo, LessonRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /courses`.
#[derive(Debug, Default, Deserialize)]
pub struct CourseQuery {
    /// Exact language code; all courses when absent.
    pub language: Option<String>,
}

/// GET /api/v1/languages
pub async fn list_languages(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let languages = LanguageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: languages }))
}

/// GET /api/v1/courses?language=
///
/// Courses in catalogue order, each with its lessons in ascending order.
pub async fn list_courses(
    _user: AuthUser,
    State(state): State<AppState>,
    query: Result<Query<CourseQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query?;
    let courses = CourseRepo::list_with_lessons(&state.pool, query.language.as_deref()).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/lessons/{lesson_id}
///
/// Lesson detail with questions in order and options reshuffled per request.
pub async fn get_lesson(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let lesson = LessonRepo::find_detail(&state.pool, &lesson_id)
        .await?
        .ok_or_else(|| CoreError::not_found("lesson", &lesson_id))?;
    Ok(Json(DataResponse { data: lesson }))
}

/// GET /api/v1/courses/{course_id}/lessons/{lesson_id}
///
/// Same as [`get_lesson`]. Lesson ids are globally unique, so the course
/// segment is informational only.
pub async fn get_course_lesson(
    user: AuthUser,
    state: State<AppState>,
    Path((_course_id, lesson_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    get_lesson(user, state, Path(lesson_id)).await
}
