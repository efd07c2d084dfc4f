use thiserror::Error;

/// Errors surfaced by ingestion and the frame transformations. None of these
/// are retried or logged here; callers decide how to present them.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {expected} fields but found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column:?}: {value:?} is not a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("could not parse timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid sampling interval {label:?}, valid options are: {valid}")]
    InvalidInterval { label: String, valid: String },

    #[error("no column named {0:?}")]
    UnknownColumn(String),

    #[error("unknown frame handle")]
    UnknownHandle,
}

pub type Result<T> = std::result::Result<T, DataError>;
