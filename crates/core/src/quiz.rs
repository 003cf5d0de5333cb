//! Quiz option handling.
//!
//! Question options are persisted as a JSON array of strings. Reading them
//! back is lenient: a payload that does not decode to `Vec<String>` is
//! reported as [`OptionsPayload::Corrupt`] and the caller serves an empty
//! list instead of failing the request.
//!
//! Served options are a fresh uniform permutation on every read.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    Translate,
    MultipleChoice,
    FillGap,
    Listening,
    TrueFalse,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Translate => "TRANSLATE",
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::FillGap => "FILL_GAP",
            QuestionType::Listening => "LISTENING",
            QuestionType::TrueFalse => "TRUE_FALSE",
        }
    }
}

// ---------------------------------------------------------------------------
// Option payloads
// ---------------------------------------------------------------------------

/// Result of decoding a stored option payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsPayload {
    Parsed(Vec<String>),
    /// The stored text was not a JSON array of strings. Carries the decode
    /// error message for logging.
    Corrupt(String),
}

impl OptionsPayload {
    /// The usable option list: the parsed values, or nothing when corrupt.
    pub fn into_options(self) -> Vec<String> {
        match self {
            OptionsPayload::Parsed(options) => options,
            OptionsPayload::Corrupt(_) => Vec::new(),
        }
    }

    /// The decode error, if the payload was corrupt.
    pub fn corruption(&self) -> Option<&str> {
        match self {
            OptionsPayload::Parsed(_) => None,
            OptionsPayload::Corrupt(reason) => Some(reason),
        }
    }
}

/// Decode a stored option payload without ever failing.
pub fn parse_options(raw: &str) -> OptionsPayload {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(options) => OptionsPayload::Parsed(options),
        Err(e) => OptionsPayload::Corrupt(e.to_string()),
    }
}

/// Encode an option list for storage.
pub fn encode_options<S: AsRef<str>>(options: &[S]) -> String {
    let values: Vec<&str> = options.iter().map(AsRef::as_ref).collect();
    // A slice of &str always serializes.
    serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string())
}

// ---------------------------------------------------------------------------
// Randomization
// ---------------------------------------------------------------------------

/// Return a uniformly random permutation of `options` using the thread RNG.
pub fn shuffle_options(options: Vec<String>) -> Vec<String> {
    shuffle_options_with(options, &mut rand::rng())
}

/// Same as [`shuffle_options`] with a caller-supplied RNG.
pub fn shuffle_options_with<R: Rng + ?Sized>(mut options: Vec<String>, rng: &mut R) -> Vec<String> {
    options.shuffle(rng);
    options
}

/// Decode a stored payload and shuffle it in one step.
///
/// Returns the served options together with the decode outcome so the caller
/// can log corrupt rows.
pub fn randomized_options(raw: &str) -> (Vec<String>, OptionsPayload) {
    let payload = parse_options(raw);
    let options = shuffle_options(payload.clone().into_options());
    (options, payload)
}
