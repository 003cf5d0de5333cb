use serde::Serialize;
use sqlx::FromRow;

/// A row from the `languages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}
