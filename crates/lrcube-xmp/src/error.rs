//! XMP error types.

use thiserror::Error;

/// Result type for strict document parsing.
pub type XmpResult<T> = Result<T, XmpError>;

/// Errors from [`XmpDocument::parse`](crate::XmpDocument::parse).
///
/// The lenient [`XmpText`](crate::XmpText) source never fails.
#[derive(Debug, Error)]
pub enum XmpError {
    /// The XML reader rejected the input.
    #[error("XML error at byte {position}: {message}")]
    Xml {
        /// Byte offset where reading stopped.
        position: u64,
        /// Reader message.
        message: String,
    },

    /// Input ended inside an element.
    #[error("unclosed element <{0}>")]
    Unclosed(String),
}
