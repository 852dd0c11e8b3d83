//! Error types for the converter.

use thiserror::Error;

/// Result type alias for conversion runs
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A source row could not be mapped
    #[error("Invalid record at row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: MappingError,
    },
}

/// Reasons a single source record fails to map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("failed to parse {field}: malformed money value {raw:?}")]
    MalformedMoney { field: &'static str, raw: String },

    #[error("failed to parse date: {raw:?} is not YYYY-MM-DD HH:MM:SS TZ")]
    MalformedDate { raw: String },

    #[error("unknown transaction type: {0}")]
    UnknownTransactionType(String),
}

/// Returned when text is not a finite decimal number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number {0:?}")]
pub struct ParseNumberError(pub String);
