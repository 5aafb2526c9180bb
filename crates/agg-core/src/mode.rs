use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Severity applied to logo-file existence checks.
///
/// `Strict` treats a missing or empty logo file as an error; `Lenient`
/// downgrades the same finding to a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Strict,
    Lenient,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "production" => Ok(Self::Strict),
            "lenient" | "development" => Ok(Self::Lenient),
            other => Err(CoreError::Validation(format!(
                "unknown validation mode '{other}' (expected strict or lenient)"
            ))),
        }
    }
}
