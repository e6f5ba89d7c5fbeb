//! Preset orchestration: simple parameters or a baked LUT.
//!
//! The simple mapping is always computed. When the preset also carries
//! detailed adjustments (HSL, tone curve, split toning) the cube builder
//! runs and the result is a LUT; otherwise the parameter record is enough.
//!
//! [`plan_preset`] is pure and returns the LUT in memory. [`convert_preset`]
//! additionally hands the `.cube` text to a [`LutStore`].

use lrcube_color::ToneCurveCache;
use lrcube_core::{DetailedAdjustments, SimpleAdjustmentParams};
use lrcube_lut::CubeLut;
use lrcube_xmp::{FieldSource, XmpDocument, XmpText, map_simple_params, parse_detailed};
use serde::Serialize;
use tracing::{info, warn};

use crate::options::{DEFAULT_CUBE_SIZE, MAX_CUBE_SIZE, MIN_CUBE_SIZE};
use crate::{ConvertOptions, ConvertResult, CubeBuilder, LutReference, LutStore};

/// Everything read from one preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedPreset {
    /// Basic-panel mapping.
    pub simple: SimpleAdjustmentParams,
    /// HSL, tone curve and split toning.
    pub detailed: DetailedAdjustments,
}

impl ParsedPreset {
    /// True when the preset needs a LUT.
    pub fn needs_lut(&self) -> bool {
        !self.detailed.is_empty()
    }
}

/// In-memory conversion result.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPlan {
    /// Apply these parameters directly.
    Params(SimpleAdjustmentParams),
    /// Apply this LUT.
    Lut(CubeLut),
}

/// Conversion result after the LUT, if any, has been stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterOutput {
    /// Apply these parameters directly.
    Params(SimpleAdjustmentParams),
    /// Apply the stored LUT.
    Lut(LutReference),
}

/// Reads the simple and detailed adjustments from `source`.
pub fn parse_preset<S: FieldSource + ?Sized>(source: &S) -> ParsedPreset {
    ParsedPreset {
        simple: map_simple_params(source),
        detailed: parse_detailed(source),
    }
}

/// Decides between parameters and a LUT, building the LUT if needed.
///
/// Never fails. An out-of-range `cube_size` is replaced by the default.
pub fn plan_preset<S: FieldSource + ?Sized>(
    source: &S,
    options: &ConvertOptions,
    cache: &ToneCurveCache,
) -> FilterPlan {
    plan_parsed(parse_preset(source), options, cache)
}

/// [`plan_preset`] for an already parsed preset.
pub fn plan_parsed(
    preset: ParsedPreset,
    options: &ConvertOptions,
    cache: &ToneCurveCache,
) -> FilterPlan {
    if !preset.needs_lut() {
        info!("preset maps to simple parameters");
        return FilterPlan::Params(preset.simple);
    }

    let size = if (MIN_CUBE_SIZE..=MAX_CUBE_SIZE).contains(&options.cube_size) {
        options.cube_size
    } else {
        warn!(
            requested = options.cube_size,
            fallback = DEFAULT_CUBE_SIZE,
            "cube size out of range, using default"
        );
        DEFAULT_CUBE_SIZE
    };
    info!(size, adjustments = %preset.detailed.summary(), "preset needs a LUT");

    let lut = CubeBuilder::new(size)
        .with_cache(cache)
        .parallel(options.parallel)
        .title(options.title.replace(['\n', '\r'], " "))
        .interpolation(options.interpolation)
        .build(&preset.detailed);
    FilterPlan::Lut(lut)
}

/// Full conversion: plan, then store the LUT if one was built.
///
/// Fails when `options` are invalid or the store cannot write.
pub fn convert_preset<S, T>(source: &S, options: &ConvertOptions, store: &T) -> ConvertResult<FilterOutput>
where
    S: FieldSource + ?Sized,
    T: LutStore + ?Sized,
{
    options.validate()?;
    match plan_preset(source, options, ToneCurveCache::global()) {
        FilterPlan::Params(params) => Ok(FilterOutput::Params(params)),
        FilterPlan::Lut(lut) => {
            let path = store.store(&lut.to_cube_string())?;
            Ok(FilterOutput::Lut(LutReference::new(path, lut.interpolation)))
        }
    }
}

/// [`convert_preset`] over raw preset text with the lenient field source.
pub fn convert_xmp<T: LutStore + ?Sized>(
    text: &str,
    options: &ConvertOptions,
    store: &T,
) -> ConvertResult<FilterOutput> {
    convert_preset(&XmpText::new(text), options, store)
}

/// [`convert_preset`] over raw preset text read as XML.
///
/// Unlike [`convert_xmp`], a malformed document is an error.
pub fn convert_xmp_strict<T: LutStore + ?Sized>(
    text: &str,
    options: &ConvertOptions,
    store: &T,
) -> ConvertResult<FilterOutput> {
    let doc = XmpDocument::parse(text)?;
    convert_preset(&doc, options, store)
}
