//! Centralized error handling for adstat.
//!
//! A small hand-rolled error enum with `From` conversions so the `?`
//! operator works across the crate, plus a `ResultExt` trait for attaching
//! context at call sites:
//!
//! ```no_run
//! use adstat::error::{Result, ResultExt as _};
//!
//! fn load(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).context("Failed to load dataset")
//! }
//! ```

use std::fmt;

/// Main error type for adstat operations.
#[derive(Debug)]
pub enum AdstatError {
    /// I/O errors (file operations)
    Io(std::io::Error),

    /// CSV reading or decoding errors, including invalid UTF-8
    Csv(String),

    /// File not found or not a regular file
    InvalidPath(String),

    /// Input has no header columns
    EmptyInput(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for AdstatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::InvalidPath(path) => write!(f, "Invalid path: {path}"),
            Self::EmptyInput(path) => write!(f, "Empty input header: {path}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AdstatError {}

impl From<std::io::Error> for AdstatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AdstatError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for AdstatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(format!("JSON error: {err}"))
    }
}

impl From<anyhow::Error> for AdstatError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias for adstat operations.
pub type Result<T> = std::result::Result<T, AdstatError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AdstatError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: AdstatError = e.into();
            AdstatError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: AdstatError = e.into();
            AdstatError::Other(format!("{}: {}", f(), err))
        })
    }
}
