//! Repository for the `languages` table.

use sqlx::PgExecutor;

use crate::models::language::Language;

pub struct LanguageRepo;

impl LanguageRepo {
    /// All offered languages ordered by code.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Language>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Language>("SELECT code, name FROM languages ORDER BY code")
            .fetch_all(executor)
            .await
    }

    pub async fn exists<'e, E>(executor: E, code: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM languages WHERE code = $1)")
                .bind(code)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }

    /// Insert a language unless its code is already present.
    ///
    /// Returns `true` if a row was inserted.
    pub async fn insert_if_missing<'e, E>(
        executor: E,
        code: &str,
        name: &str,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "INSERT INTO languages (code, name) VALUES ($1, $2)
             ON CONFLICT (code) DO NOTHING",
        )
        .bind(code)
        .bind(name)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
