//! # Error Types
//!
//! This module defines error types used throughout the dokondor-print library.

use thiserror::Error;

/// Main error type for label and receipt printing
#[derive(Debug, Error)]
pub enum PrintError {
    /// Malformed command-line invocation
    #[error("{0}")]
    Usage(String),

    /// Barcode payload is not exactly 8 decimal digits
    #[error("Invalid EAN8 '{0}'. Must be exactly 8 digits.")]
    InvalidEan8(String),

    /// Transport-level errors (printer lookup, connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Draw-op serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
