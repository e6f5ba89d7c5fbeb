//! Error types for lrcube-core.
//!
//! Field-level lookups never fail; absence is the only signal there. The
//! errors here cover structural rejection of a whole adjustment, which
//! callers log and then drop.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while building core data-model values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A tone curve needs at least two control points.
    #[error("tone curve rejected: {found} valid point(s), at least 2 required")]
    CurveRejected {
        /// Number of valid points that were supplied.
        found: usize,
    },

    /// Channel name did not match any of the 8 hue buckets.
    #[error("unknown hue channel: {0}")]
    UnknownChannel(String),
}
