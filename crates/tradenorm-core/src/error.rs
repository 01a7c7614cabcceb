use thiserror::Error;

/// Validation errors for values supplied by the caller rather than read from an export.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency code cannot be empty")]
    EmptyCurrency,

    #[error("timestamp must be RFC3339: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("timestamp year must be within 0000..=9999")]
    TimestampOutOfRange,
}
