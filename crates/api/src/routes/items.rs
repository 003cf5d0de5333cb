use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Vocabulary routes, merged at the API root.
///
/// ```text
/// GET /items -> list_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/items", get(items::list_items))
}
