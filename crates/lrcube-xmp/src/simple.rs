//! Mapping of basic-panel fields onto [`SimpleAdjustmentParams`].
//!
//! | Field | Parameter |
//! |---|---|
//! | Exposure2012 | `exposure = clamp(v, -2, 2)` |
//! | Contrast2012 | `contrast = clamp(1 + v/100, 0, 2)` |
//! | Saturation, Vibrance | `saturation = clamp(1 + s/100 + 0.5 * vib/100, 0, 2)` |
//! | Temperature | `warmth = clamp(v/100, -1, 1)` |
//! | Tint | `tint = clamp(v/100, -1, 1)` |
//! | Highlights2012 / Shadows2012 | `clamp(v/100, -1, 1)` |
//! | Clarity2012 | `c = clamp(v/100, -1, 1)`; `contrast += 0.2c`; `gamma = clamp(1 - 0.1c, 0.5, 1.5)` |
//! | GrainAmount | `grain = clamp(v/100, 0, 1)` |
//! | PostCropVignetteAmount | `vignette = clamp(abs(v)/100, 0, 1)` |
//!
//! Brightness and hue have no source field and stay neutral. These
//! formulas are a compatibility contract with existing presets.

use lrcube_core::SimpleAdjustmentParams;
use tracing::debug;

use crate::FieldSource;
use crate::names;

/// Builds the simple parameter record from `source`. Never fails; a
/// missing field leaves its parameter neutral.
pub fn map_simple_params<S: FieldSource + ?Sized>(source: &S) -> SimpleAdjustmentParams {
    let mut p = SimpleAdjustmentParams::neutral();
    let field = |name: &str| source.numeric_field(name);

    if let Some(v) = field(names::EXPOSURE) {
        p.exposure = v.clamp(-2.0, 2.0) as f32;
    }

    let mut contrast = 1.0f64;
    if let Some(v) = field(names::CONTRAST) {
        contrast = (1.0 + v / 100.0).clamp(0.0, 2.0);
    }

    let sat = field(names::SATURATION).map_or(0.0, |v| v / 100.0);
    let vib = field(names::VIBRANCE).map_or(0.0, |v| v / 100.0 * 0.5);
    p.saturation = (1.0 + sat + vib).clamp(0.0, 2.0) as f32;

    if let Some(v) = field(names::TEMPERATURE) {
        p.warmth = (v / 100.0).clamp(-1.0, 1.0) as f32;
    }
    if let Some(v) = field(names::TINT) {
        p.tint = (v / 100.0).clamp(-1.0, 1.0) as f32;
    }
    if let Some(v) = field(names::HIGHLIGHTS) {
        p.highlights = (v / 100.0).clamp(-1.0, 1.0) as f32;
    }
    if let Some(v) = field(names::SHADOWS) {
        p.shadows = (v / 100.0).clamp(-1.0, 1.0) as f32;
    }

    if let Some(v) = field(names::CLARITY) {
        let c = (v / 100.0).clamp(-1.0, 1.0);
        contrast = (contrast + c * 0.2).clamp(0.0, 2.0);
        p.gamma = (1.0 - c * 0.1).clamp(0.5, 1.5) as f32;
    }
    p.contrast = contrast as f32;

    if let Some(v) = field(names::GRAIN_AMOUNT) {
        p.grain = (v / 100.0).clamp(0.0, 1.0) as f32;
    }
    if let Some(v) = field(names::VIGNETTE_AMOUNT) {
        p.vignette = (v.abs() / 100.0).clamp(0.0, 1.0) as f32;
    }

    debug!(neutral = p.is_neutral(), "mapped simple params");
    p
}
