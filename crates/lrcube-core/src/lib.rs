//! # lrcube-core
//!
//! Core data model for turning Lightroom-style preset metadata into either
//! realtime filter parameters or a baked 3D LUT.
//!
//! This crate provides the value types shared by every other lrcube crate:
//!
//! - [`SimpleAdjustmentParams`] - The 12 normalized scalars a realtime filter consumes
//! - [`HueChannel`] - The 8 fixed hue buckets used for selective HSL adjustments
//! - [`HslAdjustmentSet`], [`ToneCurve`], [`SplitToning`] - Detailed adjustment structures
//! - [`DetailedAdjustments`] - Aggregate whose emptiness decides between params and LUT
//!
//! ## Crate Structure
//!
//! ```text
//! lrcube-core (this crate)
//!    ^
//!    |
//!    +-- lrcube-color (HSL engine, tone curves)
//!    +-- lrcube-xmp (field sources, mappers)
//!    +-- lrcube (cube builder, orchestration)
//! ```
//!
//! All values are immutable once built; constructors clamp into the
//! documented ranges so downstream code never re-validates.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjustments;
pub mod curve;
pub mod error;
pub mod hue;
pub mod params;

pub use adjustments::{ChannelShifts, DetailedAdjustments, HslAdjustmentSet, SplitToning};
pub use curve::{CurvePoint, ToneCurve};
pub use error::{CoreError, CoreResult};
pub use hue::HueChannel;
pub use params::{ParamRange, SimpleAdjustmentParams};
