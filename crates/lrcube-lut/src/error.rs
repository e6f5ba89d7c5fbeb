//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid LUT size or entry count.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Parse error when reading `.cube` text.
    #[error("parse error at line {line}: {message}")]
    ParseError {
        /// 1-based line number, 0 when the error is not tied to a line.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LutError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }
}
