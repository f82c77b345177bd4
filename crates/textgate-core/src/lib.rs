//! # textgate-core
//!
//! Deterministic validation gate for free-text tool inputs.
//!
//! A tool-calling host runs candidate field values through the validator
//! before using them, and turns any failure into a tool error result with
//! the formatter.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces the same result
//! 2. **Fail-fast**: The first violation in input order is the one reported
//! 3. **Closed taxonomy**: Every failure is `EMPTY_TEXT`, `INVALID_TYPE` or
//!    `NON_ENGLISH_TEXT`
//! 4. **Stateless**: No I/O, no shared state; safe to call from any thread
//!
//! ## Example
//!
//! ```rust
//! use textgate_core::{format_validation_failure, validate_single, Policy};
//!
//! let result = validate_single("こんにちは", Some("prompt"), Policy::ENGLISH_ONLY);
//!
//! if let Err(failure) = result {
//!     let response = format_validation_failure(&failure);
//!     assert!(response.is_error);
//! }
//! ```

pub mod config;
pub mod failure;
pub mod formatter;
pub mod policy;
pub mod script;
pub mod validator;

// Re-export main types at crate root
pub use config::{ConfigError, FieldKind, FieldRule, GateConfig, SchemaError};
pub use failure::{FailureCode, ValidationFailure};
pub use formatter::{
    format_failure, format_validation_failure, ContentBlock, PresentationResponse,
};
pub use policy::{Policy, ScriptRestriction, UnknownPolicy};
pub use script::{find_restricted, Script, ScriptHit};
pub use validator::{
    validate_array, validate_array_value, validate_english_only, validate_english_only_array,
    validate_single, validate_value, DEFAULT_FIELD_NAME,
};
