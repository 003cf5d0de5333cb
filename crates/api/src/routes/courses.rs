//! Route definitions for the course catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Catalogue routes, merged at the API root.
///
/// ```text
/// GET /languages                                -> list_languages
/// GET /courses                                  -> list_courses
/// GET /courses/{course_id}/lessons/{lesson_id}  -> get_course_lesson
/// GET /lessons/{lesson_id}                      -> get_lesson
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/languages", get(courses::list_languages))
        .route("/courses", get(courses::list_courses))
        .route(
            "/courses/{course_id}/lessons/{lesson_id}",
            get(courses::get_course_lesson),
        )
        .route("/lessons/{lesson_id}", get(courses::get_lesson))
}
