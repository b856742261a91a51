//! Error types for the registro library.
//!
//! Field-level validation failures are not errors: they are returned as an
//! [`ErrorMap`](crate::ErrorMap). This type covers operational failures only.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for registro operations.
#[derive(Debug, Error)]
pub enum RegistroError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Section name that matches no rule table.
    #[error("Unknown section: '{0}'")]
    UnknownSection(String),

    /// Evaluation time that could not be parsed.
    #[error("Invalid timestamp '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidTimestamp(String),

    /// A field needed to build a derived record is absent.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A field holds a value of the wrong shape.
    #[error("Invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },
}

/// Result type alias for registro operations.
pub type Result<T> = std::result::Result<T, RegistroError>;
