//! Error handling module for the vipert CLI.
//!
//! This module provides the error type used throughout the application,
//! built with `thiserror` for structured error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the vipert CLI application.
#[derive(Error, Debug)]
pub enum VipertError {
    /// Error when the logging system cannot be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Error when the keyword file cannot be read.
    #[error("Failed to read keyword file {path}: {source}")]
    Keywords {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using VipertError.
pub type Result<T> = std::result::Result<T, VipertError>;
