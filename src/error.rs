//! Error types for hyperion-lint operations.
//!
//! This module defines [`HyperionError`], the error type for process
//! faults, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lint findings are never errors; they are returned as data
//! - Use `HyperionError` for faults that abort an invocation
//! - Use `anyhow::Error` (via `HyperionError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hyperion-lint operations.
#[derive(Debug, Error)]
pub enum HyperionError {
    /// Specification document not found at the given location.
    #[error("Document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// Failed to parse the specification document.
    #[error("Failed to parse document at {path}: {message}")]
    DocumentParseError { path: PathBuf, message: String },

    /// A requested lint section is not part of the category enumeration.
    #[error("Unknown lint section '{name}' (expected one of: {expected})")]
    UnknownCategory { name: String, expected: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hyperion-lint operations.
pub type Result<T> = std::result::Result<T, HyperionError>;
