//! Handlers for the authenticated learner: profile, lesson completion, level.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ludo_core::level::CourseLevel;
use ludo_core::progress::CompletionOutcome;
use ludo_db::repositories::{ProgressRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, StatusAck, STATUS_SUCCESS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/me/progress`.
#[derive(Debug, Deserialize)]
pub struct CompleteLessonRequest {
    pub lesson_id: String,
    pub score: i32,
}

#[derive(Debug, Serialize)]
pub struct CompletionAck {
    pub status: &'static str,
    pub lesson_id: String,
    pub outcome: CompletionOutcome,
    pub xp_awarded: i32,
}

/// Request body for `POST /users/me/level`.
#[derive(Debug, Deserialize)]
pub struct SetLevelRequest {
    pub level: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users/me
pub async fn get_me(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = UserRepo::profile(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/users/me/progress
///
/// Record a lesson completion. The best score is kept and XP is granted only
/// on the first completion of the lesson.
pub async fn complete_lesson(
    user: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CompleteLessonRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(CompleteLessonRequest { lesson_id, score }) = payload?;
    let result =
        ProgressRepo::record_completion(&state.pool, user.user_id, &lesson_id, score).await?;

    Ok(Json(DataResponse {
        data: CompletionAck {
            status: STATUS_SUCCESS,
            lesson_id: result.lesson_id,
            outcome: result.outcome,
            xp_awarded: result.xp_awarded,
        },
    }))
}

/// POST /api/v1/users/me/level
///
/// Overwrite the learner's level, typically after the placement test.
pub async fn set_level(
    user: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<SetLevelRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let level: CourseLevel = input.level.parse()?;
    UserRepo::set_level(&state.pool, user.user_id, level).await?;

    tracing::info!(
        user_id = user.user_id,
        username = %user.username,
        level = %level,
        "Learner level updated"
    );

    Ok(Json(DataResponse {
        data: StatusAck::success(),
    }))
}
