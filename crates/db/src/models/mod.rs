//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The serializable views handed to the API layer
//! - `Create*` DTOs where rows are inserted by application code

pub mod course;
pub mod language;
pub mod lesson;
pub mod progress;
pub mod question;
pub mod user;
pub mod vocabulary;
