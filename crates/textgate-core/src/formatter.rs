//! Presentation of failures as tool error results.
//!
//! The output mirrors the error shape tool-calling hosts expect:
//!
//! ```json
//! { "isError": true, "content": [{ "type": "text", "text": "..." }] }
//! ```

use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::failure::ValidationFailure;

/// Static guidance appended to every validation failure.
pub const USAGE_EXAMPLE: &str = r#"{
  "prompt": "A modern minimalist living room with natural light and blue accents"
}"#;

/// One block of tool-response content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            ContentBlock::Text { text } => text,
        }
    }
}

/// A presentation-ready tool response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationResponse {
    pub is_error: bool,
    pub content: Vec<ContentBlock>,
}

impl PresentationResponse {
    /// An error response with a single text block.
    pub fn error_text(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            content: vec![ContentBlock::text(text)],
        }
    }
}

/// Format any error for a tool response.
///
/// A [`ValidationFailure`] gets the full header, suggestion and example
/// layout. Any other error is rendered as `Error: <message>`.
pub fn format_failure(error: &(dyn Error + 'static)) -> PresentationResponse {
    match error.downcast_ref::<ValidationFailure>() {
        Some(failure) => format_validation_failure(failure),
        None => PresentationResponse::error_text(format!("Error: {}", error)),
    }
}

/// Format a validation failure for a tool response.
pub fn format_validation_failure(failure: &ValidationFailure) -> PresentationResponse {
    PresentationResponse::error_text(render(failure))
}

fn render(failure: &ValidationFailure) -> String {
    format!(
        "❌ Validation Error\n\n{}\n\n💡 Suggestion:\n{}\n\n📝 Example of correct usage:\n{}",
        failure.message(),
        failure.suggestion(),
        USAGE_EXAMPLE
    )
}
