//! Gate configuration.
//!
//! A gate config declares which tool arguments carry free text and which
//! policy applies to each. Configs are YAML or JSON documents validated
//! against an embedded JSON Schema.

mod parser;
mod schema;

pub use parser::{ConfigError, FieldKind, FieldRule, GateConfig};
pub use schema::{validate_config_schema, SchemaError};
