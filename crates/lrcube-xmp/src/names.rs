//! Lightroom (Process Version 2012) field names consulted by the mappers.

use lrcube_core::HueChannel;

/// Exposure in EV.
pub const EXPOSURE: &str = "crs:Exposure2012";
/// Contrast, -100..=100.
pub const CONTRAST: &str = "crs:Contrast2012";
/// Saturation, -100..=100.
pub const SATURATION: &str = "crs:Saturation";
/// Vibrance, -100..=100.
pub const VIBRANCE: &str = "crs:Vibrance";
/// White balance temperature.
pub const TEMPERATURE: &str = "crs:Temperature";
/// White balance tint, -150..=150.
pub const TINT: &str = "crs:Tint";
/// Highlights, -100..=100.
pub const HIGHLIGHTS: &str = "crs:Highlights2012";
/// Shadows, -100..=100.
pub const SHADOWS: &str = "crs:Shadows2012";
/// Clarity, -100..=100.
pub const CLARITY: &str = "crs:Clarity2012";
/// Grain amount, 0..=100.
pub const GRAIN_AMOUNT: &str = "crs:GrainAmount";
/// Post-crop vignette amount, -100..=100.
pub const VIGNETTE_AMOUNT: &str = "crs:PostCropVignetteAmount";

/// Composite tone curve point list.
pub const TONE_CURVE: &str = "crs:ToneCurvePV2012";

/// Split toning shadow hue.
pub const SPLIT_SHADOW_HUE: &str = "crs:SplitToningShadowHue";
/// Split toning shadow saturation.
pub const SPLIT_SHADOW_SATURATION: &str = "crs:SplitToningShadowSaturation";
/// Split toning highlight hue.
pub const SPLIT_HIGHLIGHT_HUE: &str = "crs:SplitToningHighlightHue";
/// Split toning highlight saturation.
pub const SPLIT_HIGHLIGHT_SATURATION: &str = "crs:SplitToningHighlightSaturation";
/// Split toning balance.
pub const SPLIT_BALANCE: &str = "crs:SplitToningBalance";

/// Field names for one channel's hue, saturation and luminance shifts,
/// e.g. `crs:HueAdjustmentRed`.
pub fn hsl_fields(channel: HueChannel) -> [String; 3] {
    let suffix = channel.xmp_suffix();
    [
        format!("crs:HueAdjustment{suffix}"),
        format!("crs:SaturationAdjustment{suffix}"),
        format!("crs:LuminanceAdjustment{suffix}"),
    ]
}
