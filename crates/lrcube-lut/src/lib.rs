//! # lrcube-lut
//!
//! 3D lookup table value type and `.cube` text codec.
//!
//! A preset that cannot be expressed as simple filter parameters is baked
//! into a [`CubeLut`], serialized with [`CubeLut::to_cube_string`] and
//! handed to the realtime filter by file reference.
//!
//! # Usage
//!
//! ```rust
//! use lrcube_lut::{CubeLut, Interpolation};
//!
//! let lut = CubeLut::identity(17).with_interpolation(Interpolation::Nearest);
//! let rgb = lut.apply([0.5, 0.3, 0.2]);
//! let text = lut.to_cube_string();
//! assert!(text.starts_with("# Generated from XMP\nLUT_3D_SIZE 17"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Read/write diagnostics
//!
//! # Used By
//!
//! - `lrcube` - Cube builder and LUT persistence

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cube_lut;
mod error;
mod interp;
pub mod cube;

pub use cube::{DEFAULT_TITLE, format_line, parse_cube, read_cube};
pub use cube_lut::{CubeLut, MAX_CUBE_SIZE};
pub use error::{LutError, LutResult};
pub use interp::Interpolation;
