//! # lrcube-color
//!
//! Color math behind a baked preset LUT.
//!
//! - [`hsl`] - RGB/HSL conversions (hue in degrees)
//! - [`tone_curve`] - Piecewise-linear 8-bit curve evaluation
//! - [`ToneCurveCache`] - Bounded, thread-safe memo of curve evaluations
//! - [`ColorTransform`] - The per-node transform the cube builder samples
//!
//! # Usage
//!
//! ```rust
//! use lrcube_color::{transform_rgb, ToneCurveCache};
//! use lrcube_core::DetailedAdjustments;
//!
//! let out = transform_rgb([0.5, 0.3, 0.2], &DetailedAdjustments::default(), ToneCurveCache::global());
//! assert!((out[0] - 0.5).abs() < 1e-5);
//! ```
//!
//! # Used By
//!
//! - `lrcube` - Cube builder

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod engine;
pub mod hsl;
pub mod tone_curve;

pub use cache::{CacheStats, DEFAULT_CURVE_CAPACITY, ToneCurveCache};
pub use engine::{ColorTransform, split_weights, transform_rgb};
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
