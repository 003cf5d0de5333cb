//! Handler for vocabulary items.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use ludo_db::models::vocabulary::VocabularyFilter;
use ludo_db::repositories::VocabularyRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /items`.
#[derive(Debug, Default, Deserialize)]
pub struct ItemsQuery {
    pub language: Option<String>,
    /// Kept as text: a non-numeric level means "no level filter".
    pub level: Option<String>,
}

impl ItemsQuery {
    fn into_filter(self) -> VocabularyFilter {
        VocabularyFilter {
            language: self.language,
            level: self.level.and_then(|raw| raw.trim().parse().ok()),
        }
    }
}

/// GET /api/v1/items?language=&level=
///
/// Items of the given language at or below the given level, easiest first.
pub async fn list_items(
    _user: AuthUser,
    State(state): State<AppState>,
    query: Result<Query<ItemsQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query?;
    let items = VocabularyRepo::list(&state.pool, &query.into_filter()).await?;
    Ok(Json(DataResponse { data: items }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(language: Option<&str>, level: Option<&str>) -> ItemsQuery {
        ItemsQuery {
            language: language.map(String::from),
            level: level.map(String::from),
        }
    }

    #[test]
    fn numeric_level_becomes_a_filter() {
        let filter = query(Some("en"), Some("2")).into_filter();
        assert_eq!(filter.language.as_deref(), Some("en"));
        assert_eq!(filter.level, Some(2));
    }

    #[test]
    fn non_numeric_level_is_ignored() {
        for raw in ["abc", "", "2.5"] {
            assert_eq!(query(None, Some(raw)).into_filter().level, None, "{raw:?}");
        }
    }
}
