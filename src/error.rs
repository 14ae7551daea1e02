//! Error types for ipexpand.
//!
//! Uses `thiserror` for ergonomic error definitions.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification shared by every expansion and batch error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Format,
    InvalidAddress,
    InvalidRange,
    NotFound,
    Io,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Format => "format",
            Self::InvalidAddress => "invalid_address",
            Self::InvalidRange => "invalid_range",
            Self::NotFound => "not_found",
            Self::Io => "io",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Failure to expand a single range expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("format error: use a range like '192.168.1.1-255' or '192.168.1.1-192.168.1.255'")]
    Format,

    #[error("invalid address format: {0}")]
    InvalidAddress(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("error occurred: {0}")]
    Internal(String),
}

impl ExpandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format => ErrorKind::Format,
            Self::InvalidAddress(_) => ErrorKind::InvalidAddress,
            Self::InvalidRange(_) => ErrorKind::InvalidRange,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for range expansion.
pub type ExpandResult<T> = Result<T, ExpandError>;

/// Failure to process a batch file as a whole.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("error occurred while reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Result type alias for batch processing.
pub type BatchResult<T> = Result<T, BatchError>;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while rendering or writing a report.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for output operations.
pub type OutputResult<T> = Result<T, OutputError>;
