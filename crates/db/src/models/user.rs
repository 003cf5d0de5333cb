//! User entity model and DTOs.

use ludo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::progress::CompletedLesson;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub current_language: Option<String>,
    pub current_level: String,
    pub xp: i32,
    pub gems: i32,
    pub hearts: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password is already hashed.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub current_language: Option<String>,
}

/// Read-only projection of a learner and every lesson they completed.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub current_language: Option<String>,
    pub current_level: String,
    pub xp: i32,
    pub gems: i32,
    pub hearts: i32,
    pub completed_lessons: Vec<CompletedLesson>,
}

impl UserProfile {
    pub fn new(user: User, completed_lessons: Vec<CompletedLesson>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            current_language: user.current_language,
            current_level: user.current_level,
            xp: user.xp,
            gems: user.gems,
            hearts: user.hearts,
            completed_lessons,
        }
    }
}
