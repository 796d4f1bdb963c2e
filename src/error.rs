//! Error types for the TextScope library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TextScopeError`] enum.
//!
//! # Examples
//!
//! ```
//! use textscope::error::{Result, TextScopeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextScopeError::config("top_n must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for TextScope operations.
///
/// Tokenization, stemming, stopword filtering, frequency ranking and
/// sentiment scoring are total functions and never produce an error at
/// analysis time. The only analysis-time failure is
/// [`TextScopeError::AnnotationUnavailable`], which callers must be able to
/// tell apart from the empty-input case.
#[derive(Error, Debug)]
pub enum TextScopeError {
    /// I/O errors (reading input text, store and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The linguistic annotation collaborator failed or returned malformed data
    #[error("Annotation unavailable: {0}")]
    AnnotationUnavailable(String),

    /// Analysis component construction errors (invalid token pattern, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors carrying an anyhow context chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextScopeError.
pub type Result<T> = std::result::Result<T, TextScopeError>;

impl TextScopeError {
    /// Create a new annotation-unavailable error.
    pub fn annotation_unavailable<S: Into<String>>(msg: S) -> Self {
        TextScopeError::AnnotationUnavailable(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextScopeError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextScopeError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextScopeError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextScopeError::Other(msg.into())
    }

    /// Whether this error came from the annotation collaborator.
    pub fn is_annotation_unavailable(&self) -> bool {
        matches!(self, TextScopeError::AnnotationUnavailable(_))
    }
}
