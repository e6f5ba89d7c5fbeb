//! # lrcube-xmp
//!
//! Reads Lightroom preset metadata (XMP sidecars, Process Version 2012+).
//!
//! - [`FieldSource`] - Lookup of a numeric field by qualified name
//! - [`XmpText`] - Lenient regex scanner; never fails
//! - [`XmpDocument`] - XML-backed source for well-formed documents
//! - [`map_simple_params`] - Basic-panel fields to [`SimpleAdjustmentParams`]
//! - [`parse_detailed`] - HSL, tone curve and split toning
//!
//! # Usage
//!
//! ```rust
//! use lrcube_xmp::{map_simple_params, parse_detailed, XmpText};
//!
//! let source = XmpText::new(r#"<rdf:Description crs:Exposure2012="1.0"/>"#);
//! let params = map_simple_params(&source);
//! assert_eq!(params.exposure, 1.0);
//! assert!(parse_detailed(&source).is_empty());
//! ```
//!
//! Unknown or malformed content never causes a failure; it only leaves the
//! affected values at their defaults.
//!
//! [`SimpleAdjustmentParams`]: lrcube_core::SimpleAdjustmentParams

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod detailed;
pub mod document;
mod error;
pub mod field;
pub mod names;
pub mod simple;

pub use detailed::{parse_detailed, parse_tone_curve};
pub use document::XmpDocument;
pub use error::{XmpError, XmpResult};
pub use field::{FieldSource, XmpText, parse_number};
pub use simple::map_simple_params;
