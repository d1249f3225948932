//! Error types for the logscope crate.
//!
//! The scope and enrichment core itself never fails: malformed scope state
//! is skipped and enrichment never aborts event emission. The errors here
//! belong to the boundary surface only.

use thiserror::Error;

/// Errors that can occur when parsing a log level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLevelError {
    /// The input does not name a known level.
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}
