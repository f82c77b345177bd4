//! Gate config parsing from YAML/JSON, and tool-argument checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::{validate_config_schema, SchemaError};
use crate::failure::ValidationFailure;
use crate::policy::Policy;
use crate::validator::{validate_array_value, validate_value};

/// Errors that can occur when loading a gate config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    SchemaError(#[from] SchemaError),

    #[error("Config validation failed: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Shape of a gated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A single string
    #[default]
    Text,

    /// An array of strings
    TextArray,
}

/// How one tool argument is gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Argument name, also used as the label in failure messages
    pub name: String,

    #[serde(default)]
    pub kind: FieldKind,

    /// Overrides the config's default policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,

    /// Missing or null required fields fail as empty text
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

fn default_policy() -> Policy {
    Policy::ENGLISH_ONLY
}

/// A gate config: the set of text fields a tool accepts and their policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Version of this config
    pub config_version: String,

    /// Human-readable name, usually the tool or tool group
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Policy for fields that do not set their own
    #[serde(default = "default_policy")]
    pub default_policy: Policy,

    /// Gated fields, checked in this order
    pub fields: Vec<FieldRule>,
}

impl GateConfig {
    /// Parse a config from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse a config from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn from_value(value: Value) -> Result<Self, ConfigError> {
        validate_config_schema(&value)?;
        let config: GateConfig = serde_json::from_value(value)?;
        config.validate()?;
        tracing::debug!(
            config = %config.name,
            fields = config.fields.len(),
            default_policy = %config.default_policy,
            "Loaded gate config"
        );
        Ok(config)
    }

    /// Validate the config structure.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingField("name".to_string()));
        }

        if self.fields.is_empty() {
            return Err(ConfigError::MissingField("fields".to_string()));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(ConfigError::MissingField("fields[].name".to_string()));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate field name: {}",
                    field.name
                )));
            }
        }

        Ok(())
    }

    /// Policy that applies to `field`.
    pub fn policy_for(&self, field: &FieldRule) -> Policy {
        field.policy.unwrap_or(self.default_policy)
    }

    /// Check a tool-call argument object against every gated field.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned. Arguments that are not gated are ignored.
    pub fn check(&self, arguments: &Value) -> Result<(), ValidationFailure> {
        let Value::Object(map) = arguments else {
            return Err(ValidationFailure::not_an_object("arguments"));
        };

        for field in &self.fields {
            let value = match map.get(&field.name) {
                Some(Value::Null) | None if field.required => {
                    tracing::debug!(field = %field.name, "Required field missing");
                    return Err(ValidationFailure::empty_text(&field.name));
                }
                Some(Value::Null) | None => continue,
                Some(value) => value,
            };

            let policy = self.policy_for(field);
            match field.kind {
                FieldKind::Text => validate_value(value, Some(&field.name), policy)?,
                FieldKind::TextArray => validate_array_value(value, Some(&field.name), policy)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureCode;
    use serde_json::json;

    const IMAGE_TOOLS: &str = r#"
config_version: "1.0"
name: "image-tools"
fields:
  - name: prompt
  - name: questions
    kind: text_array
    required: false
  - name: notes
    policy: non_empty
    required: false
"#;

    #[test]
    fn test_parse_yaml_config() {
        let config = GateConfig::from_yaml(IMAGE_TOOLS).unwrap();
        assert_eq!(config.name, "image-tools");
        assert_eq!(config.default_policy, Policy::ENGLISH_ONLY);
        assert_eq!(config.fields.len(), 3);
        assert_eq!(config.fields[0].kind, FieldKind::Text);
        assert!(config.fields[0].required);
        assert_eq!(config.fields[1].kind, FieldKind::TextArray);
        assert_eq!(config.policy_for(&config.fields[2]), Policy::NON_EMPTY);
    }

    #[test]
    fn test_parse_json_config() {
        let config = GateConfig::from_json(
            r#"{"config_version": "1.0", "name": "search", "default_policy": "non_empty",
                "fields": [{"name": "query"}]}"#,
        )
        .unwrap();
        assert_eq!(config.policy_for(&config.fields[0]), Policy::NON_EMPTY);
    }

    #[test]
    fn test_schema_violation() {
        let yaml = r#"
config_version: "1.0"
name: "image-tools"
fields:
  - name: prompt
    kind: paragraph
"#;
        assert!(matches!(
            GateConfig::from_yaml(yaml),
            Err(ConfigError::SchemaError(SchemaError::Invalid(_)))
        ));
    }

    #[test]
    fn test_duplicate_field_names() {
        let yaml = r#"
config_version: "1.0"
name: "image-tools"
fields:
  - name: prompt
  - name: prompt
    kind: text_array
"#;
        assert!(matches!(
            GateConfig::from_yaml(yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let yaml = r#"
config_version: "1.0"
name: "   "
fields:
  - name: prompt
"#;
        assert!(matches!(
            GateConfig::from_yaml(yaml),
            Err(ConfigError::MissingField(_))
        ));
    }

    #[test]
    fn test_check_valid_arguments() {
        let config = GateConfig::from_yaml(IMAGE_TOOLS).unwrap();
        let args = json!({
            "prompt": "A serene lake at dawn",
            "questions": ["What mood?", "Which colors?"],
            "notes": "日本語のメモ",
            "size": 1024
        });
        assert!(config.check(&args).is_ok());
    }

    #[test]
    fn test_check_reports_first_field_in_order() {
        let config = GateConfig::from_yaml(IMAGE_TOOLS).unwrap();
        let args = json!({
            "prompt": "こんにちは",
            "questions": "not an array"
        });
        let failure = config.check(&args).unwrap_err();
        assert_eq!(failure.code(), FailureCode::NonEnglishText);
        assert!(failure.message().starts_with("prompt"));
    }

    #[test]
    fn test_check_array_field() {
        let config = GateConfig::from_yaml(IMAGE_TOOLS).unwrap();
        let args = json!({ "prompt": "Hello", "questions": "not an array" });
        let failure = config.check(&args).unwrap_err();
        assert_eq!(failure.code(), FailureCode::InvalidType);
        assert_eq!(failure.message(), "questions must be an array");
    }

    #[test]
    fn test_missing_fields() {
        let config = GateConfig::from_yaml(IMAGE_TOOLS).unwrap();

        let failure = config.check(&json!({})).unwrap_err();
        assert_eq!(failure.code(), FailureCode::EmptyText);
        assert_eq!(failure.message(), "prompt cannot be empty");

        let failure = config.check(&json!({ "prompt": null })).unwrap_err();
        assert_eq!(failure.code(), FailureCode::EmptyText);

        assert!(config
            .check(&json!({ "prompt": "Hello", "questions": null }))
            .is_ok());
    }

    #[test]
    fn test_arguments_must_be_object() {
        let config = GateConfig::from_yaml(IMAGE_TOOLS).unwrap();
        let failure = config.check(&json!(["prompt"])).unwrap_err();
        assert_eq!(failure.code(), FailureCode::InvalidType);
        assert_eq!(failure.message(), "arguments must be an object");
    }
}
