//! Route definitions for the authenticated learner.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET  /me           -> get_me
/// POST /me/progress  -> complete_lesson
/// POST /me/level     -> set_level
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::get_me))
        .route("/me/progress", post(users::complete_lesson))
        .route("/me/level", post(users::set_level))
}
