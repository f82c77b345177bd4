//! Validation policies.
//!
//! The emptiness check is always on. A policy only decides whether the
//! script restriction runs on top of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether text is restricted to a script family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptRestriction {
    /// Any script is accepted
    #[default]
    Off,

    /// Latin text, neutral symbols and emoji only
    EnglishOnly,
}

/// A validation policy.
///
/// Parsed from and serialized to `non_empty` / `english_only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Policy {
    pub script_restriction: ScriptRestriction,
}

impl Policy {
    /// Policy A: text must be non-empty.
    pub const NON_EMPTY: Policy = Policy {
        script_restriction: ScriptRestriction::Off,
    };

    /// Policy B: text must be non-empty and free of restricted scripts.
    pub const ENGLISH_ONLY: Policy = Policy {
        script_restriction: ScriptRestriction::EnglishOnly,
    };

    pub fn restricts_script(&self) -> bool {
        self.script_restriction == ScriptRestriction::EnglishOnly
    }

    pub fn name(&self) -> &'static str {
        match self.script_restriction {
            ScriptRestriction::Off => "non_empty",
            ScriptRestriction::EnglishOnly => "english_only",
        }
    }
}

/// Unrecognized policy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown policy '{0}' (expected 'non_empty' or 'english_only')")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "non_empty" | "non-empty" => Ok(Policy::NON_EMPTY),
            "english_only" | "english-only" => Ok(Policy::ENGLISH_ONLY),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for Policy {
    type Error = UnknownPolicy;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Policy> for String {
    fn from(policy: Policy) -> Self {
        policy.name().to_string()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
