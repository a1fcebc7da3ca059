//! Error types for the records crate.
//!
//! There is exactly one failure class here: a malformed record at the input
//! boundary. A malformed record aborts validation for the whole batch —
//! callers get either a complete set of well-formed records or an error,
//! never partial results.

use thiserror::Error;

/// Errors produced while validating raw account records.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A required field was absent from the raw record.
    ///
    /// This variant stores the position of the offending record so callers
    /// can point back at the source collection.
    #[error("Record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: String },

    /// A count field was present but not representable as a non-negative
    /// integer.
    #[error("Record {index} has invalid {field} count: {value}")]
    NegativeCount {
        index: usize,
        field: String,
        value: i64,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, RecordError>;
