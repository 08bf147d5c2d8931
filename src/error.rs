//! Error types for the Kensaku library.
//!
//! All fallible operations return [`Result`], an alias over [`KensakuError`].
//! The ranking core itself is a total function and never fails; errors only
//! arise at the boundary (reading document files, parsing CLI input).
//!
//! # Examples
//!
//! ```
//! use kensaku::error::{KensakuError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KensakuError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Kensaku operations.
#[derive(Error, Debug)]
pub enum KensakuError {
    /// I/O errors (reading document files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, transliteration)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KensakuError.
pub type Result<T> = std::result::Result<T, KensakuError>;

impl KensakuError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KensakuError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KensakuError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KensakuError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
