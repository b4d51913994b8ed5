//! Error types for the letterbank library.
//!
//! All fallible operations return [`LetterbankError`]. The matching core itself
//! never fails: a missing dictionary or an input without usable letters are
//! normal outcomes, so errors only come from the I/O and configuration
//! boundaries.
//!
//! # Examples
//!
//! ```
//! use letterbank::error::{LetterbankError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LetterbankError::invalid_config("limit must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for letterbank operations.
#[derive(Error, Debug)]
pub enum LetterbankError {
    /// I/O errors (dictionary reads, export writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (bad normalization patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LetterbankError.
pub type Result<T> = std::result::Result<T, LetterbankError>;

impl LetterbankError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LetterbankError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LetterbankError::InvalidConfig(msg.into())
    }

    /// Create a new export error.
    pub fn export<S: Into<String>>(msg: S) -> Self {
        LetterbankError::Export(msg.into())
    }
}
