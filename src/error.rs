//! Error types for Surfview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Surfview operations.
pub type Result<T> = std::result::Result<T, SurfviewError>;

/// Errors that can occur in Surfview.
#[derive(Debug, Error)]
pub enum SurfviewError {
    /// Expression failed to parse.
    #[error("invalid expression: {0}")]
    Parse(#[from] crate::expr::ParseError),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}
