//! Error types for the interval notation

use thiserror::Error;

/// Minimum length of a notation string, e.g. `[a,b)`
pub const MIN_NOTATION_LEN: usize = 5;

/// Errors that can occur while parsing interval notation
///
/// Every variant is terminal for that parse call; no interval is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Input is shorter than the smallest valid notation
    #[error("Interval string too short: {len} bytes (min: {min})", min = MIN_NOTATION_LEN)]
    TooShort {
        /// Length of the rejected input in bytes
        len: usize,
    },

    /// Body did not split into exactly two comma-separated values
    #[error("Interval value error: expected 2 comma-separated values, found {parts}")]
    ValueFormat {
        /// Number of parts found after splitting
        parts: usize,
    },

    /// First or last character is not a boundary marker
    #[error("Invalid boundary flag: {marker:?}")]
    BoundaryFlag {
        /// The rejected character
        marker: char,
    },

    /// A value was rejected by the type-specific parser
    #[error("Invalid interval value {value:?}: {reason}")]
    ValueParse {
        /// The trimmed value text
        value: String,
        /// Why the value parser rejected it
        reason: String,
    },
}

impl NotationError {
    /// Build a value parse error
    pub fn value_parse(value: &str, reason: impl Into<String>) -> Self {
        NotationError::ValueParse {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
