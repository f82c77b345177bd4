//! Text validation against a [`Policy`].
//!
//! Every check is fail-fast: the first violation, in input order, is the one
//! returned. Emptiness is always checked before script restriction.

use serde_json::Value;

use crate::failure::ValidationFailure;
use crate::policy::Policy;
use crate::script;

/// Field label used in messages when the caller does not name the field.
pub const DEFAULT_FIELD_NAME: &str = "input";

/// Validate a single text value.
///
/// # Errors
///
/// * `EMPTY_TEXT` if `text` is blank after trimming
/// * `NON_ENGLISH_TEXT` if the policy restricts scripts and `text` contains
///   a restricted character
pub fn validate_single(
    text: &str,
    field_name: Option<&str>,
    policy: Policy,
) -> Result<(), ValidationFailure> {
    let field = field_name.unwrap_or(DEFAULT_FIELD_NAME);

    if is_blank(text) {
        tracing::debug!(field, code = "EMPTY_TEXT", "Rejected blank text");
        return Err(ValidationFailure::empty_text(field));
    }

    if policy.restricts_script() {
        if let Some(hit) = script::find_restricted(text) {
            tracing::debug!(
                field,
                code = "NON_ENGLISH_TEXT",
                script = %hit.script,
                offset = hit.offset,
                "Rejected restricted script"
            );
            return Err(ValidationFailure::non_english_text(field));
        }
    }

    Ok(())
}

/// Validate every item of a sequence, in order.
///
/// An empty sequence passes. The first failing item's failure is returned
/// unchanged.
pub fn validate_array<S: AsRef<str>>(
    items: &[S],
    field_name: Option<&str>,
    policy: Policy,
) -> Result<(), ValidationFailure> {
    for (index, item) in items.iter().enumerate() {
        validate_single(item.as_ref(), field_name, policy)
            .inspect_err(|failure| log_element_rejected(field_name, index, failure))?;
    }

    Ok(())
}

/// Validate an untyped value that should be a string.
pub fn validate_value(
    value: &Value,
    field_name: Option<&str>,
    policy: Policy,
) -> Result<(), ValidationFailure> {
    match value {
        Value::String(text) => validate_single(text, field_name, policy),
        other => {
            let field = field_name.unwrap_or(DEFAULT_FIELD_NAME);
            tracing::debug!(field, kind = json_kind(other), "Expected a string");
            Err(ValidationFailure::not_a_string(field))
        }
    }
}

/// Validate an untyped value that should be an array of strings.
///
/// # Errors
///
/// * `INVALID_TYPE` if `value` is not an array, or an element is not a string
/// * any failure of [`validate_single`] for the first failing element
pub fn validate_array_value(
    value: &Value,
    field_name: Option<&str>,
    policy: Policy,
) -> Result<(), ValidationFailure> {
    let field = field_name.unwrap_or(DEFAULT_FIELD_NAME);

    let Value::Array(items) = value else {
        tracing::debug!(field, kind = json_kind(value), "Expected an array");
        return Err(ValidationFailure::not_an_array(field));
    };

    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(text) => validate_single(text, Some(field), policy)
                .inspect_err(|failure| log_element_rejected(Some(field), index, failure))?,
            other => {
                tracing::debug!(field, index, kind = json_kind(other), "Non-string array element");
                return Err(ValidationFailure::non_string_element(field));
            }
        }
    }

    Ok(())
}

/// Policy B entry point for a single value.
pub fn validate_english_only(text: &str, field_name: Option<&str>) -> Result<(), ValidationFailure> {
    validate_single(text, field_name, Policy::ENGLISH_ONLY)
}

/// Policy B entry point for a sequence.
pub fn validate_english_only_array<S: AsRef<str>>(
    items: &[S],
    field_name: Option<&str>,
) -> Result<(), ValidationFailure> {
    validate_array(items, field_name, Policy::ENGLISH_ONLY)
}

/// Blank after trimming whitespace and byte order marks.
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

fn log_element_rejected(field_name: Option<&str>, index: usize, failure: &ValidationFailure) {
    tracing::debug!(
        field = field_name.unwrap_or(DEFAULT_FIELD_NAME),
        index,
        code = %failure.code(),
        "Array element rejected"
    );
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
