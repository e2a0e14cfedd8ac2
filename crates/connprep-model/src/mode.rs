use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which fixed output schema a conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Endpoint definitions: hosts and ports to probe.
    Endpoints,
    /// Connectivity-test definitions: source/destination pairs.
    Tests,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Endpoints => "endpoints",
            Self::Tests => "tests",
        }
    }

    /// Noun used in user-facing counts ("Processed 3 test cases").
    #[must_use]
    pub fn unit_noun(self) -> &'static str {
        match self {
            Self::Endpoints => "endpoints",
            Self::Tests => "test cases",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized conversion type string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown conversion type `{0}` (expected `endpoints` or `tests`)")]
pub struct ModeParseError(String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "endpoints" => Ok(Self::Endpoints),
            "tests" => Ok(Self::Tests),
            _ => Err(ModeParseError(raw.to_string())),
        }
    }
}
