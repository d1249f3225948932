//! Log severity levels.

use crate::errors::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose diagnostic output.
    Trace,
    /// Debugging information.
    Debug,
    /// Normal operational messages.
    Information,
    /// Unexpected but recoverable situations.
    Warning,
    /// A failure in the current operation.
    Error,
    /// An unrecoverable failure.
    Critical,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Information
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" | "information" => Ok(Self::Information),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            other => Err(ParseLevelError::UnknownLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Information.to_string(), "information");
        assert_eq!(LogLevel::Critical.to_string(), "critical");
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Information);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Critical);
    }

    #[test]
    fn test_level_from_str_unknown() {
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseLevelError::UnknownLevel("loud".to_string()));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn test_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let level: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, LogLevel::Warning);
    }
}
