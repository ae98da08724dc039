//! Error types for colstream.
//!
//! Covers the failures that stop the dashboard from starting (no input to
//! infer a schema from, bad configuration) and terminal I/O failures while
//! running. Malformed records are never errors.

use std::io;
use thiserror::Error;

/// Error type for colstream operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Standard input closed before a first record arrived.
    #[error("no input: standard input closed before the first record")]
    NoInput,

    /// The first record was blank, so no column layout can be inferred.
    #[error("first record is empty; cannot infer column layout")]
    EmptyFirstLine,

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Terminal initialization, input or rendering error.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Result type alias for colstream operations.
pub type Result<T> = std::result::Result<T, Error>;
