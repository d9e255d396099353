//! Error types
//!
//! Splitting and tokenizing cannot fail; errors only arise while acquiring
//! the input text.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while reading input
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("Unknown file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, Error>;
