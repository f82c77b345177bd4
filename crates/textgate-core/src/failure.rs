//! Validation failures.
//!
//! A [`ValidationFailure`] is created at the point a check fails and is
//! returned unchanged to the caller. It always carries a non-empty message,
//! a code from the closed [`FailureCode`] set, and a non-empty suggestion.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCode {
    /// Blank or whitespace-only text
    EmptyText,

    /// Value has the wrong shape (e.g. a string where an array was expected)
    InvalidType,

    /// Text contains characters from a restricted script
    NonEnglishText,
}

impl FailureCode {
    /// Wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::EmptyText => "EMPTY_TEXT",
            FailureCode::InvalidType => "INVALID_TYPE",
            FailureCode::NonEnglishText => "NON_ENGLISH_TEXT",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected violation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
    code: FailureCode,
    suggestion: String,
}

impl ValidationFailure {
    /// Build a failure from its parts.
    ///
    /// `message` and `suggestion` must both be non-empty.
    pub fn new(
        message: impl Into<String>,
        code: FailureCode,
        suggestion: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let suggestion = suggestion.into();
        debug_assert!(!message.trim().is_empty(), "validation failure without a message");
        debug_assert!(
            !suggestion.trim().is_empty(),
            "validation failure without a suggestion"
        );

        Self {
            message,
            code,
            suggestion,
        }
    }

    /// `<field> cannot be empty`
    pub fn empty_text(field: &str) -> Self {
        Self::new(
            format!("{} cannot be empty", field),
            FailureCode::EmptyText,
            format!("Please provide a descriptive, non-empty {}", field),
        )
    }

    /// `<field> only accepts English text`
    pub fn non_english_text(field: &str) -> Self {
        Self::new(
            format!("{} only accepts English text", field),
            FailureCode::NonEnglishText,
            format!(
                "Use your LLM to translate the {} to English, then call this tool again",
                field
            ),
        )
    }

    /// `<field> must be an array`
    pub fn not_an_array(field: &str) -> Self {
        Self::new(
            format!("{} must be an array", field),
            FailureCode::InvalidType,
            format!(
                "Provide {} as an array of strings, for example [\"first item\", \"second item\"]",
                field
            ),
        )
    }

    /// `<field> must be a string`
    pub fn not_a_string(field: &str) -> Self {
        Self::new(
            format!("{} must be a string", field),
            FailureCode::InvalidType,
            format!("Provide {} as a single text value", field),
        )
    }

    /// `<field> must contain only strings`
    pub fn non_string_element(field: &str) -> Self {
        Self::new(
            format!("{} must contain only strings", field),
            FailureCode::InvalidType,
            format!("Make sure every entry in {} is a text value", field),
        )
    }

    /// `<field> must be an object`
    pub fn not_an_object(field: &str) -> Self {
        Self::new(
            format!("{} must be an object", field),
            FailureCode::InvalidType,
            "Pass tool arguments as a JSON object keyed by field name",
        )
    }

    /// Human-readable description of what failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Category of the failure.
    pub fn code(&self) -> FailureCode {
        self.code
    }

    /// Remediation shown to the caller.
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }
}
