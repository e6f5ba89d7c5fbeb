//! # lrcube
//!
//! Converts Lightroom XMP presets into something a realtime color filter can
//! apply: either 12 normalized parameters, or a baked `.cube` 3D LUT when
//! the preset uses per-channel HSL, a tone curve or split toning.
//!
//! # Quick Start
//!
//! ```rust
//! use lrcube::{convert_xmp, ConvertOptions, DirectoryStore, FilterOutput};
//!
//! let dir = std::env::temp_dir().join("lrcube-doc");
//! let preset = r#"<rdf:Description crs:Exposure2012="0.5" crs:HueAdjustmentRed="30"/>"#;
//!
//! let options = ConvertOptions::default().with_cube_size(9);
//! match convert_xmp(preset, &options, &DirectoryStore::new(&dir)).unwrap() {
//!     FilterOutput::Params(params) => println!("exposure {}", params.exposure),
//!     FilterOutput::Lut(lut) => println!("filter {}", lut.filter_name()),
//! }
//! ```
//!
//! # Crate Structure
//!
//! ```text
//! lrcube (this crate: builder, orchestration, store)
//!    |
//!    +-- lrcube-xmp   (field sources, simple mapper, detailed parser)
//!    +-- lrcube-color (HSL engine, tone curves, curve cache)
//!    +-- lrcube-lut   (CubeLut, .cube codec)
//!    +-- lrcube-core  (shared data model)
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Build cube planes on the rayon pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod convert;
mod error;
pub mod options;
pub mod reference;
pub mod store;

pub use builder::{CubeBuilder, build_cube, build_cube_content};
pub use convert::{
    FilterOutput, FilterPlan, ParsedPreset, convert_preset, convert_xmp, convert_xmp_strict,
    parse_preset, plan_parsed, plan_preset,
};
pub use error::{ConvertError, ConvertResult};
pub use options::ConvertOptions;
pub use reference::LutReference;
pub use store::{DirectoryStore, LutStore};

pub use lrcube_color::ToneCurveCache;
pub use lrcube_core::{DetailedAdjustments, SimpleAdjustmentParams};
pub use lrcube_lut::{CubeLut, Interpolation};
pub use lrcube_xmp::{FieldSource, XmpDocument, XmpText};
