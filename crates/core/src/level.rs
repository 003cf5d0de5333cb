//! Proficiency levels shared by courses and learners.
//!
//! A course is tagged with the level it targets; a learner carries the level
//! they were placed at. `UNKNOWN` is both the default learner level and the
//! tag of the placement course.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Unknown,
}

/// Every accepted level string, in the form stored in the database.
pub const VALID_LEVELS: &[&str] = &["BEGINNER", "INTERMEDIATE", "ADVANCED", "UNKNOWN"];

impl CourseLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "BEGINNER",
            CourseLevel::Intermediate => "INTERMEDIATE",
            CourseLevel::Advanced => "ADVANCED",
            CourseLevel::Unknown => "UNKNOWN",
        }
    }
}

impl Default for CourseLevel {
    fn default() -> Self {
        CourseLevel::Unknown
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = CoreError;

    /// Exact, case-sensitive match against [`VALID_LEVELS`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNER" => Ok(CourseLevel::Beginner),
            "INTERMEDIATE" => Ok(CourseLevel::Intermediate),
            "ADVANCED" => Ok(CourseLevel::Advanced),
            "UNKNOWN" => Ok(CourseLevel::Unknown),
            other => Err(CoreError::Validation(format!(
                "Invalid level '{other}'. Must be one of: {VALID_LEVELS:?}"
            ))),
        }
    }
}
