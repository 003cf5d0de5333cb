//! Lesson-completion rules.
//!
//! A learner holds at most one progress record per lesson, keeping their best
//! score. XP is granted only when the record is first created:
//!
//! ```text
//! ABSENT        --complete(s)-->               RECORDED(s)    +XP_PER_LESSON
//! RECORDED(old) --complete(s), s > old-->      RECORDED(s)
//! RECORDED(old) --complete(s), s <= old-->     RECORDED(old)
//! ```
//!
//! [`decide_completion`] is the pure transition; the repository layer applies
//! it inside a transaction.

use serde::Serialize;

use crate::error::CoreError;

/// XP granted on the first completion of a lesson.
pub const XP_PER_LESSON: i32 = 10;

/// Lowest accepted completion score.
pub const MIN_SCORE: i32 = 0;

/// Highest accepted completion score.
pub const MAX_SCORE: i32 = 100;

/// What a completion event does to the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionOutcome {
    /// No record existed; one is created and XP is granted.
    FirstCompletion { score: i32 },
    /// The new score beats the stored one and replaces it.
    Improved { previous: i32, score: i32 },
    /// The stored score is kept.
    Unchanged { best: i32 },
}

impl CompletionOutcome {
    /// XP to add to the learner for this outcome.
    pub fn xp_awarded(self) -> i32 {
        match self {
            CompletionOutcome::FirstCompletion { .. } => XP_PER_LESSON,
            _ => 0,
        }
    }

    /// The score stored once the outcome is applied.
    pub fn best_score(self) -> i32 {
        match self {
            CompletionOutcome::FirstCompletion { score } => score,
            CompletionOutcome::Improved { score, .. } => score,
            CompletionOutcome::Unchanged { best } => best,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompletionOutcome::FirstCompletion { .. } => "first_completion",
            CompletionOutcome::Improved { .. } => "improved",
            CompletionOutcome::Unchanged { .. } => "unchanged",
        }
    }
}

/// Decide the transition for a completion with `score` given the stored score.
pub fn decide_completion(existing: Option<i32>, score: i32) -> CompletionOutcome {
    match existing {
        None => CompletionOutcome::FirstCompletion { score },
        Some(previous) if score > previous => CompletionOutcome::Improved { previous, score },
        Some(best) => CompletionOutcome::Unchanged { best },
    }
}

/// Reject scores outside `MIN_SCORE..=MAX_SCORE`.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CoreError::Validation(format!(
            "Score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )));
    }
    Ok(())
}

/// Reject blank lesson ids before touching storage.
pub fn validate_lesson_id(lesson_id: &str) -> Result<(), CoreError> {
    if lesson_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Lesson id must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fold a sequence of scores through the state machine, returning the
    /// final stored score and the total XP granted.
    fn replay(scores: &[i32]) -> (Option<i32>, i32) {
        let mut stored = None;
        let mut xp = 0;
        for &score in scores {
            let outcome = decide_completion(stored, score);
            xp += outcome.xp_awarded();
            stored = Some(outcome.best_score());
        }
        (stored, xp)
    }

    #[test]
    fn first_completion_grants_xp() {
        let outcome = decide_completion(None, 80);
        assert_eq!(outcome, CompletionOutcome::FirstCompletion { score: 80 });
        assert_eq!(outcome.xp_awarded(), XP_PER_LESSON);
        assert_eq!(outcome.best_score(), 80);
    }

    #[test]
    fn higher_score_replaces_without_xp() {
        let outcome = decide_completion(Some(40), 70);
        assert_eq!(
            outcome,
            CompletionOutcome::Improved {
                previous: 40,
                score: 70,
            }
        );
        assert_eq!(outcome.xp_awarded(), 0);
    }

    #[test]
    fn equal_or_lower_score_is_a_no_op() {
        assert_eq!(
            decide_completion(Some(80), 80),
            CompletionOutcome::Unchanged { best: 80 }
        );
        assert_eq!(
            decide_completion(Some(80), 60),
            CompletionOutcome::Unchanged { best: 80 }
        );
    }

    #[test]
    fn score_sequence_is_monotonic_with_single_grant() {
        assert_eq!(replay(&[40, 70, 55]), (Some(70), XP_PER_LESSON));
        assert_eq!(replay(&[80, 80]), (Some(80), XP_PER_LESSON));
        assert_eq!(replay(&[0, 0, 100, 99]), (Some(100), XP_PER_LESSON));
    }

    #[test]
    fn zero_is_a_valid_first_score() {
        let outcome = decide_completion(None, 0);
        assert_eq!(outcome.xp_awarded(), XP_PER_LESSON);
    }

    #[test]
    fn score_bounds() {
        assert!(validate_score(MIN_SCORE).is_ok());
        assert!(validate_score(MAX_SCORE).is_ok());
        assert!(validate_score(-1).is_err());
        assert!(validate_score(MAX_SCORE + 1).is_err());
    }

    #[test]
    fn blank_lesson_ids_are_rejected() {
        assert!(validate_lesson_id("lesson_basics_1").is_ok());
        assert!(validate_lesson_id("").is_err());
        assert!(validate_lesson_id("  ").is_err());
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let outcome = CompletionOutcome::Improved {
            previous: 40,
            score: 70,
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["kind"], "improved");
        assert_eq!(json["previous"], 40);
        assert_eq!(json["score"], 70);
    }
}
