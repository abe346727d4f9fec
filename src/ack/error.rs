//! Error types for fixed-width record parsing.

use thiserror::Error;

/// Errors raised while parsing one acknowledgement record line. All are
/// immediate and non-retryable; the file-level caller decides whether the
/// line (or the whole file) is rejected.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The line is shorter than the fixed record layout.
    #[error("line too short: expected at least {expected} characters, got {found}")]
    LineTooShort { expected: usize, found: usize },

    /// The record-type tag at offset 0 belongs to a different record type.
    #[error("record type mismatch: expected tag {expected:?}, found {found:?}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A field's substring does not convert to its semantic type.
    #[error("malformed {field} field: {value:?}")]
    FieldFormat {
        field: &'static str,
        value: String,
    },
}
