//! Question entity model and the client-facing quiz view.

use ludo_core::quiz::randomized_options;
use ludo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: DbId,
    pub lesson_id: DbId,
    pub question_type: String,
    pub statement: String,
    pub instruction: String,
    /// JSON array of strings, as stored.
    pub options: String,
    pub correct_answer: String,
    pub order_index: i32,
    pub created_at: Timestamp,
}

/// A question as served to a learner.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: DbId,
    #[serde(rename = "type")]
    pub question_type: String,
    pub statement: String,
    pub instruction: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub order: i32,
}

impl Question {
    /// Build the served view. Options are reshuffled on every call; a corrupt
    /// option payload is logged and served as an empty list.
    pub fn into_view(self) -> QuestionView {
        let (options, payload) = randomized_options(&self.options);
        if let Some(reason) = payload.corruption() {
            tracing::warn!(
                question_id = self.id,
                lesson_id = self.lesson_id,
                error = %reason,
                "Malformed question options, serving empty list",
            );
        }
        QuestionView {
            id: self.id,
            question_type: self.question_type,
            statement: self.statement,
            instruction: self.instruction,
            options,
            correct_answer: self.correct_answer,
            order: self.order_index,
        }
    }
}

/// DTO for inserting a question (seeding only).
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub lesson_id: DbId,
    pub question_type: String,
    pub statement: String,
    pub instruction: String,
    pub options: String,
    pub correct_answer: String,
    pub order_index: i32,
}
