pub mod auth;
pub mod courses;
pub mod health;
pub mod items;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /languages                                       list languages
/// /courses                                         list courses (?language=)
/// /courses/{course_id}/lessons/{lesson_id}         lesson detail
/// /lessons/{lesson_id}                             lesson detail
///
/// /items                                           vocabulary (?language=&level=)
///
/// /users/me                                        profile
/// /users/me/progress                               record completion (POST)
/// /users/me/level                                  set level (POST)
/// ```
///
/// Everything outside `/auth` requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(courses::router())
        .merge(items::router())
        .nest("/users", users::router())
}
