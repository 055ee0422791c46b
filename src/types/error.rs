//! Error types for the payout method validator
//!
//! Field validation never produces these: a rejected payout method is an
//! [`AggregateValidation`](crate::types::AggregateValidation) value. The errors here cover
//! the batch pipeline around the validator.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, closed output
//! - **Parsing Errors**: Malformed CSV records, unknown payout method tags
//! - **Serialization Errors**: JSON output failures
//! - **Runtime Errors**: The async runtime could not be started

use thiserror::Error;

/// A payout method tag that is not one of `paypal`, `bank_transfer`, `stripe`, `wise`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown payout method type '{value}'")]
pub struct UnknownMethodType {
    /// The rejected tag as submitted
    pub value: String,
}

/// Main error type for the batch validation pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Input file not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing results
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing or writing error
    ///
    /// Recoverable while reading: the malformed record is skipped and
    /// processing continues with the next one.
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV error
        message: String,
    },

    /// JSON serialization error while writing results
    #[error("JSON error: {message}")]
    Json {
        /// Description of the serialization error
        message: String,
    },

    /// The async runtime could not be built
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for PipelineError {
    fn from(error: std::io::Error) -> Self {
        PipelineError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PipelineError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

// csv-async already renders the record position in its message
impl From<csv_async::Error> for PipelineError {
    fn from(error: csv_async::Error) -> Self {
        PipelineError::Csv {
            line: None,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::Json {
            message: error.to_string(),
        }
    }
}

impl PipelineError {
    /// Create a FileNotFound error, or an Io error for any other open failure
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            PipelineError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            PipelineError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl Into<String>) -> Self {
        PipelineError::Runtime {
            message: message.into(),
        }
    }
}
