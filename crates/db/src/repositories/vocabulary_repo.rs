//! Repository for the `vocabulary_items` table.

use ludo_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::vocabulary::{VocabularyFilter, VocabularyItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, word, translation, audio_url, level, language_code";

pub struct VocabularyRepo;

impl VocabularyRepo {
    /// List items matching the filter: exact language (if given) and
    /// `level <= filter.level` (if given). Ordered by level, then word.
    pub async fn list<'e, E>(
        executor: E,
        filter: &VocabularyFilter,
    ) -> Result<Vec<VocabularyItem>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM vocabulary_items
             WHERE ($1::VARCHAR IS NULL OR language_code = $1)
               AND ($2::INTEGER IS NULL OR level <= $2)
             ORDER BY level, word, id"
        );
        sqlx::query_as::<_, VocabularyItem>(&query)
            .bind(filter.language.as_deref())
            .bind(filter.level)
            .fetch_all(executor)
            .await
    }

    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vocabulary_items")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Insert one item and return its id.
    pub async fn create<'e, E>(
        executor: E,
        language_code: &str,
        word: &str,
        translation: &str,
        audio_url: &str,
        level: i32,
    ) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO vocabulary_items (language_code, word, translation, audio_url, level)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(language_code)
        .bind(word)
        .bind(translation)
        .bind(audio_url)
        .bind(level)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }
}
