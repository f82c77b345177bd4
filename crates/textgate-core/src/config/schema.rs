//! JSON Schema validation for gate configs.
//!
//! Every config document is checked against `schema/gate.schema.json`
//! before it is deserialized.

use std::sync::OnceLock;
use thiserror::Error;

/// Embedded gate config schema (loaded at compile time).
const GATE_SCHEMA_JSON: &str = include_str!("../../schema/gate.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// Errors from schema validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to load schema: {0}")]
    LoadError(String),

    #[error("Config does not match schema: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

fn get_validator() -> Result<&'static jsonschema::Validator, SchemaError> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = match serde_json::from_str(GATE_SCHEMA_JSON) {
            Ok(v) => v,
            Err(e) => return Err(format!("Invalid schema JSON: {}", e)),
        };

        match jsonschema::options().build(&schema_value) {
            Ok(v) => Ok(v),
            Err(e) => Err(format!("Failed to compile schema: {}", e)),
        }
    });

    match result {
        Ok(v) => Ok(v),
        Err(e) => Err(SchemaError::LoadError(e.clone())),
    }
}

/// Validate a config document against the schema.
///
/// All violations are collected, each as `<error> at <instance path>`.
pub fn validate_config_schema(config_json: &serde_json::Value) -> Result<(), SchemaError> {
    let validator = get_validator()?;

    let errors: Vec<String> = validator
        .iter_errors(config_json)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Invalid(errors))
    }
}
