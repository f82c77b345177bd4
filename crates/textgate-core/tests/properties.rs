//! Property tests for the text validator.

use proptest::prelude::*;
use textgate_core::{
    format_failure, validate_array, validate_array_value, validate_single, FailureCode, Policy,
};

const POLICIES: [Policy; 2] = [Policy::NON_EMPTY, Policy::ENGLISH_ONLY];

/// Non-empty text built only from accepted characters.
fn accepted_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9éèñüçàô][a-zA-Z0-9 ,.!?'$%@()éèñüçàô😊🌟🌅-]{0,30}"
}

fn blank_text() -> impl Strategy<Value = String> {
    "[ \t\r\n\u{FEFF}]{0,8}"
}

fn restricted_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'こ', 'カ', '你', '美', '안', '풍', 'م', 'ر', 'ש', 'ל', '。',
        '\u{0870}', '\u{0710}', '\u{0780}', '\u{0E81}', '\u{0F40}', '\u{1000}', '\u{1200}',
        '\u{1780}', '\u{1820}', '\u{A000}', '\u{1B132}', '\u{FF61}', '\u{FE10}',
    ])
}

/// Text with at least one restricted character somewhere in it.
fn restricted_text() -> impl Strategy<Value = String> {
    ("[a-zA-Z ]{0,10}", restricted_char(), "[a-zA-Z ]{0,10}")
        .prop_map(|(head, c, tail)| format!("{}{}{}", head, c, tail))
}

proptest! {
    #[test]
    fn accepted_text_passes_both_policies(text in accepted_text()) {
        for policy in POLICIES {
            prop_assert!(validate_single(&text, None, policy).is_ok());
        }
    }

    #[test]
    fn blank_text_is_empty_under_both_policies(text in blank_text()) {
        for policy in POLICIES {
            let failure = validate_single(&text, Some("prompt"), policy).unwrap_err();
            prop_assert_eq!(failure.code(), FailureCode::EmptyText);
        }
    }

    #[test]
    fn restricted_text_fails_english_only(text in restricted_text()) {
        let failure = validate_single(&text, None, Policy::ENGLISH_ONLY).unwrap_err();
        prop_assert_eq!(failure.code(), FailureCode::NonEnglishText);
    }

    #[test]
    fn restricted_text_passes_non_empty(text in restricted_text()) {
        prop_assert!(validate_single(&text, None, Policy::NON_EMPTY).is_ok());
    }

    #[test]
    fn array_reports_first_failing_element(
        good in prop::collection::vec(accepted_text(), 0..5),
        bad in restricted_text(),
        rest in prop::collection::vec(blank_text(), 0..3),
    ) {
        let mut items = good.clone();
        items.push(bad);
        items.extend(rest);

        let failure = validate_array(&items, Some("items"), Policy::ENGLISH_ONLY).unwrap_err();
        prop_assert_eq!(failure.code(), FailureCode::NonEnglishText);
        prop_assert!(validate_array(&good, Some("items"), Policy::ENGLISH_ONLY).is_ok());
    }

    #[test]
    fn scalars_are_not_arrays(text in ".*", number in any::<i64>()) {
        for policy in POLICIES {
            let as_string = validate_array_value(&serde_json::json!(text), None, policy).unwrap_err();
            prop_assert_eq!(as_string.code(), FailureCode::InvalidType);

            let as_number = validate_array_value(&serde_json::json!(number), None, policy).unwrap_err();
            prop_assert_eq!(as_number.code(), FailureCode::InvalidType);
        }
    }

    #[test]
    fn formatted_failures_are_errors(text in blank_text()) {
        let failure = validate_single(&text, None, Policy::ENGLISH_ONLY).unwrap_err();
        let response = format_failure(&failure);
        prop_assert!(response.is_error);
        prop_assert_eq!(response.content.len(), 1);
    }
}

#[test]
fn mixed_array_depends_on_policy() {
    let items = ["Hello", "こんにちは"];
    assert!(validate_array(&items, None, Policy::NON_EMPTY).is_ok());

    let failure = validate_array(&items, None, Policy::ENGLISH_ONLY).unwrap_err();
    assert_eq!(failure.code(), FailureCode::NonEnglishText);
}

#[test]
fn empty_array_always_passes() {
    for policy in POLICIES {
        assert!(validate_array::<&str>(&[], None, policy).is_ok());
        assert!(validate_array_value(&serde_json::json!([]), None, policy).is_ok());
    }
}
