use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ConfigError;

/// Wire codec behaviour that is a policy choice rather than protocol.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// How compression pointers in domain names are turned into text
    #[serde(default)]
    pub pointer_mode: PointerMode,

    /// What to do with a value that does not fit its bit field
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    /// Render every pointer as `<offset>`.
    Offset,

    /// Substitute names decoded earlier in the same message, render the
    /// rest as `<offset>`.
    #[default]
    Cached,

    /// Follow pointers through every byte read so far.
    Resolve,
}

impl PointerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offset => "offset",
            Self::Cached => "cached",
            Self::Resolve => "resolve",
        }
    }
}

impl fmt::Display for PointerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "offset" => Ok(Self::Offset),
            "cached" => Ok(Self::Cached),
            "resolve" => Ok(Self::Resolve),
            _ => Err(ConfigError::InvalidValue {
                key: "codec.pointer_mode",
                value: s.to_string(),
                expected: "offset, cached, resolve",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the write with a field overflow error.
    #[default]
    Reject,

    /// Drop the high-order bits that do not fit.
    Truncate,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Truncate => "truncate",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
