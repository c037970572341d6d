//! Runtime environments used for output gating

use super::error::PrintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Process variable consulted for the ambient environment when a facade is
/// built without an explicit one.
pub const ENVIRONMENT_VAR: &str = "RUST_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
    Staging,
    /// Sentinel: print regardless of the ambient environment
    #[default]
    #[serde(rename = "no-filter")]
    NoFilter,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::NoFilter => "no-filter",
        }
    }

    /// Whether a call configured for `self` is suppressed under `ambient`.
    ///
    /// An unset ambient environment never suppresses, and neither does the
    /// `NoFilter` sentinel.
    pub fn is_gated_by(&self, ambient: Option<&str>) -> bool {
        match ambient {
            Some(ambient) => *self != Environment::NoFilter && ambient != self.as_str(),
            None => false,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = PrintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "no-filter" => Ok(Environment::NoFilter),
            _ => Err(PrintError::InvalidEnvironment(s.to_string())),
        }
    }
}

/// Read the ambient environment from [`ENVIRONMENT_VAR`].
pub fn ambient_from_process() -> Option<String> {
    std::env::var(ENVIRONMENT_VAR).ok()
}
