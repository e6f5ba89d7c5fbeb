//! Extraction of per-channel HSL, tone curve and split toning.
//!
//! The three structures are independent and each is optional. Field-level
//! problems only drop the affected value (or, for the curve, the whole
//! curve); they never abort the parse.

use lrcube_core::{CurvePoint, DetailedAdjustments, HslAdjustmentSet, HueChannel, SplitToning, ToneCurve};
use tracing::debug;

use crate::field::parse_number;
use crate::{FieldSource, names};

/// Reads all detailed structures from `source`.
pub fn parse_detailed<S: FieldSource + ?Sized>(source: &S) -> DetailedAdjustments {
    let detailed = DetailedAdjustments {
        hsl: parse_hsl(source),
        tone_curve: source
            .raw_field(names::TONE_CURVE)
            .and_then(|raw| parse_tone_curve(&raw)),
        split_toning: parse_split_toning(source),
    };
    debug!(found = %detailed.summary(), "parsed detailed adjustments");
    detailed
}

/// Per-channel HSL shifts. A channel is recorded when any of its three
/// fields is present; the set is `None` when no channel is.
pub fn parse_hsl<S: FieldSource + ?Sized>(source: &S) -> Option<HslAdjustmentSet> {
    let mut set = HslAdjustmentSet::default();
    for channel in HueChannel::ALL {
        let [hue, sat, lum] = names::hsl_fields(channel);
        if let Some(v) = source.numeric_field(&hue) {
            set.hue.set(channel, v as f32);
        }
        if let Some(v) = source.numeric_field(&sat) {
            set.saturation.set(channel, v as f32);
        }
        if let Some(v) = source.numeric_field(&lum) {
            set.luminance.set(channel, v as f32);
        }
    }
    (!set.is_empty()).then_some(set)
}

/// Parses whitespace-separated `x,y` pairs.
///
/// Pairs whose coordinates are not both numbers are skipped; coordinates
/// are clamped into `[0, 255]`. Fewer than two surviving points rejects
/// the whole curve.
pub fn parse_tone_curve(raw: &str) -> Option<ToneCurve> {
    let points: Vec<CurvePoint> = raw.split_whitespace().filter_map(parse_pair).collect();
    match ToneCurve::from_points(points) {
        Ok(curve) => {
            debug!(points = curve.len(), "tone curve");
            Some(curve)
        }
        Err(e) => {
            debug!(error = %e, "tone curve dropped");
            None
        }
    }
}

fn parse_pair(token: &str) -> Option<CurvePoint> {
    let mut parts = token.split(',');
    let x = parse_number(parts.next()?)?;
    let y = parse_number(parts.next()?)?;
    Some(CurvePoint::new(x as f32, y as f32))
}

/// Split toning; `None` when none of its five fields is present.
pub fn parse_split_toning<S: FieldSource + ?Sized>(source: &S) -> Option<SplitToning> {
    let field = |name: &str| source.numeric_field(name).map(|v| v as f32);
    let st = SplitToning {
        shadow_hue: field(names::SPLIT_SHADOW_HUE),
        shadow_saturation: field(names::SPLIT_SHADOW_SATURATION),
        highlight_hue: field(names::SPLIT_HIGHLIGHT_HUE),
        highlight_saturation: field(names::SPLIT_HIGHLIGHT_SATURATION),
        balance: field(names::SPLIT_BALANCE),
    };
    st.is_present().then_some(st)
}
