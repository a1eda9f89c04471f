//! Common error types for PayFlow

use thiserror::Error;

/// Common result type for PayFlow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the PayFlow backend
#[derive(Error, Debug)]
pub enum Error {
    /// Uploaded filename does not carry the .csv extension
    #[error("Invalid file type. Please upload a CSV file.")]
    InvalidFileType,

    /// Uploaded bytes are not valid UTF-8 text
    #[error("File content is not valid UTF-8: {0}")]
    MalformedEncoding(#[from] std::str::Utf8Error),

    /// A data row's field count differs from the header's
    #[error("Row {record} has {found} fields, expected {expected}")]
    MalformedRow {
        /// 1-based data-row number (header excluded)
        record: u64,
        expected: usize,
        found: usize,
    },

    /// Upload held no data at all, not even a header line
    #[error("No columns to parse from file")]
    EmptyFile,

    /// Any other parser-level failure (wraps csv::Error)
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
