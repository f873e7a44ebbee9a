//! Log severity levels

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered log severity
///
/// A record is emitted iff the logger's threshold is above [`Severity::None`]
/// and the record's severity is at or above that threshold. `None` is only
/// meaningful as a threshold ("log nothing").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    None = 0,
    Debug = 10,
    Info = 11,
    Warn = 12,
    Error = 13,
    Fatal = 14,
}

impl Severity {
    /// Raw numeric code; the gate compares these
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Build a severity from its raw numeric code.
    ///
    /// Codes above `Fatal` clamp to `Info`. Codes strictly between `None`
    /// and `Debug` gate identically to `Debug` for every defined severity,
    /// so they map to `Debug`.
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Severity::None,
            1..=10 => Severity::Debug,
            11 => Severity::Info,
            12 => Severity::Warn,
            13 => Severity::Error,
            14 => Severity::Fatal,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    /// Fixed 5-character label, short names right-aligned
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::None => write!(f, " NONE"),
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Info => write!(f, " INFO"),
            Severity::Warn => write!(f, " WARN"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Unrecognized severity name
#[derive(Debug, Error)]
#[error("unknown log level: {0}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Severity::None),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
