//! Error types for ip2asn.

use thiserror::Error;

/// Error type for ip2asn operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric field of a dataset record could not be parsed
    #[error("line {line}: invalid {field} field: {value:?}")]
    DataFormat {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A dataset record ends before it starts
    #[error("line {line}: range end {end} is below start {start}")]
    InvertedRange { line: usize, start: u32, end: u32 },

    /// Invalid IP address
    #[error("invalid IP address: {0}")]
    InvalidIpAddress(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ip2asn operations.
pub type Result<T> = std::result::Result<T, Error>;
