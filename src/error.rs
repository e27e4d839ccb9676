//! Error types for the speller library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SpellerError`] enum.
//!
//! # Examples
//!
//! ```
//! use speller::error::{Result, SpellerError};
//!
//! fn pick(candidates: &[&str]) -> Result<()> {
//!     if candidates.is_empty() {
//!         return Err(SpellerError::EmptyDictionary);
//!     }
//!     Ok(())
//! }
//!
//! assert!(pick(&[]).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for speller operations.
#[derive(Error, Debug)]
pub enum SpellerError {
    /// I/O errors (reading dictionaries, rewriting text files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dictionary content errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Best-match selection was asked to choose from no candidates
    #[error("Cannot select a best match from an empty dictionary")]
    EmptyDictionary,

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpellerError.
pub type Result<T> = std::result::Result<T, SpellerError>;

impl SpellerError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SpellerError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellerError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellerError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellerError::Other(msg.into())
    }
}
