//! Error types for Lexis
//!
//! This module defines all error types used throughout the engine.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Errors are raised synchronously at the point of violation and never
//! retried. Absence is not an error: unknown ids in frequency lookups, unknown
//! query terms and empty queries all yield empty results instead.

use std::io;
use thiserror::Error;

/// Result type alias for Lexis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the search engine
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a malformed value: negative or duplicate document id,
    /// invalid query word, control character in a word, empty stop word
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Document id is not present in the index
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Create an OutOfRange error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Error::OutOfRange(message.into())
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Check if this is an InvalidArgument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is an OutOfRange error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }
}
