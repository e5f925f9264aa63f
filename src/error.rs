//! Error types and handling infrastructure for rltail.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. Expected failures (bad arguments, missing files, oversized
//! files, I/O problems) are modeled as explicit variants rather than panics, and
//! none of them are retried internally.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rltail operations.
///
/// Covers every failure condition a tail read can surface: input validation,
/// file resolution, the size-limit policy, and underlying I/O.
#[derive(Error, Debug)]
pub enum TailError {
    /// Request was malformed before any filesystem access (blank path, zero count)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Path does not resolve to an existing file
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// File length exceeds the configured `max_file_size_bytes`
    #[error("File is too large ({size} bytes, limit {max_size}): {path}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File system related errors (permission denied, read failure, bad UTF-8, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for rltail operations.
pub type Result<T> = std::result::Result<T, TailError>;

impl TailError {
    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to TailError
impl From<std::io::Error> for TailError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                // Path context is lost here; call sites that know the path
                // should construct FileNotFound directly instead.
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}
