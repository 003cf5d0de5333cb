//! Repository for the `questions` table.

use ludo_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::question::{CreateQuestion, Question};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, lesson_id, question_type, statement, instruction, options, \
                       correct_answer, order_index, created_at";

pub struct QuestionRepo;

impl QuestionRepo {
    /// Questions of a lesson (internal id) in ascending order.
    pub async fn list_for_lesson<'e, E>(
        executor: E,
        lesson_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE lesson_id = $1
             ORDER BY order_index"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(lesson_id)
            .fetch_all(executor)
            .await
    }

    /// Insert a question, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateQuestion) -> Result<Question, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO questions
                (lesson_id, question_type, statement, instruction, options,
                 correct_answer, order_index)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(input.lesson_id)
            .bind(&input.question_type)
            .bind(&input.statement)
            .bind(&input.instruction)
            .bind(&input.options)
            .bind(&input.correct_answer)
            .bind(input.order_index)
            .fetch_one(executor)
            .await
    }
}
