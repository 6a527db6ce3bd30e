//! Error taxonomy
//!
//! Every failure is an input-contract violation surfaced directly to the
//! caller. No retries, no recovery, no partial output.

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, ClockError>;

/// Errors raised by time construction, parsing and row selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    /// The supplied value is not a well-formed time.
    #[error("invalid time input: {0}")]
    InvalidInput(String),

    /// The row key does not name any of the five rows.
    #[error("unsupported row key: {0:?}")]
    UnsupportedFormat(String),
}
