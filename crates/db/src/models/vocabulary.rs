//! Vocabulary item model and list filter.

use ludo_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `vocabulary_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VocabularyItem {
    pub id: DbId,
    pub word: String,
    pub translation: String,
    pub audio_url: String,
    pub level: i32,
    pub language_code: String,
}

/// Optional filters for listing vocabulary. Both default to "no filter".
#[derive(Debug, Clone, Default)]
pub struct VocabularyFilter {
    /// Exact language code match.
    pub language: Option<String>,
    /// Maximum level, inclusive.
    pub level: Option<i32>,
}
