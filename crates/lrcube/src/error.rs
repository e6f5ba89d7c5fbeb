//! Conversion error types.
//!
//! Field-level problems in a preset are never errors; they fall back to
//! neutral values. What can fail is loading options, strict parsing of a
//! malformed document and persisting a LUT.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while configuring or running a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// I/O error reading an options file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Options file not found.
    #[error("options file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// An option is out of range.
    #[error("invalid option {name}: {reason}")]
    InvalidOption {
        /// Option name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Writing the LUT failed.
    #[error("could not save LUT to {path}: {source}")]
    Store {
        /// Target file or directory.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Strict preset parsing failed.
    #[error("preset error: {0}")]
    Xmp(#[from] lrcube_xmp::XmpError),
}
