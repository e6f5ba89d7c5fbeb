//! Per-node color transform described by [`DetailedAdjustments`].
//!
//! # Pipeline
//!
//! ```text
//! RGB -> HSL -> per-channel HSL shift -> tone curve on L -> split toning -> RGB
//! ```
//!
//! Each stage runs only when its structure is present. Output is clamped
//! to `[0, 1]` per component. The chain runs in `f64`; callers narrow to
//! `f32` when they store a node.
//!
//! # Example
//!
//! ```rust
//! use lrcube_color::{ColorTransform, ToneCurveCache};
//! use lrcube_core::{DetailedAdjustments, ToneCurve};
//!
//! let adj = DetailedAdjustments {
//!     tone_curve: Some(ToneCurve::identity()),
//!     ..Default::default()
//! };
//! let cache = ToneCurveCache::with_capacity(4);
//! let xf = ColorTransform::new(&adj, &cache);
//! let out = xf.apply([0.25, 0.5, 0.75]);
//! assert!((out[1] - 0.5).abs() < 1e-5);
//! ```

use lrcube_core::{DetailedAdjustments, HslAdjustmentSet, HueChannel, SplitToning, ToneCurve};

use crate::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl, wrap_hue};
use crate::ToneCurveCache;

/// Degrees of hue rotation for a full-scale (±100) hue slider.
pub const HUE_SHIFT_DEGREES: f64 = 45.0;

/// Divisor mapping a ±100 saturation/luminance slider to ±0.5.
pub const SL_SHIFT_DIVISOR: f64 = 200.0;

/// A prepared transform bound to one set of adjustments and a cache.
///
/// Preparing once computes the curve key a single time; [`apply`] can then
/// be called for every grid node, from any thread.
///
/// [`apply`]: ColorTransform::apply
#[derive(Debug, Clone)]
pub struct ColorTransform<'a> {
    adjustments: &'a DetailedAdjustments,
    curve_key: Option<String>,
    cache: &'a ToneCurveCache,
}

impl<'a> ColorTransform<'a> {
    /// Binds `adjustments` to `cache`.
    pub fn new(adjustments: &'a DetailedAdjustments, cache: &'a ToneCurveCache) -> Self {
        Self {
            adjustments,
            curve_key: adjustments.tone_curve.as_ref().map(ToneCurve::identity_key),
            cache,
        }
    }

    /// Adjustments this transform evaluates.
    #[inline]
    pub fn adjustments(&self) -> &DetailedAdjustments {
        self.adjustments
    }

    /// Transforms one RGB triple in `[0, 1]`.
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        self.apply_f64(rgb.map(f64::from)).map(|c| c as f32)
    }

    /// [`ColorTransform::apply`] at full precision.
    pub fn apply_f64(&self, rgb: [f64; 3]) -> [f64; 3] {
        let mut hsl = rgb_to_hsl(rgb);

        if let Some(set) = &self.adjustments.hsl {
            hsl = shift_channel(hsl, set);
        }

        if let (Some(curve), Some(key)) = (&self.adjustments.tone_curve, &self.curve_key) {
            hsl.l = self.curve_lightness(curve, key, hsl.l);
        }

        let out = match &self.adjustments.split_toning {
            Some(st) if st.is_active() => split_tone(hsl, st),
            _ => hsl_to_rgb(hsl),
        };

        out.map(|c| c.clamp(0.0, 1.0))
    }

    /// Runs lightness through the 8-bit curve.
    ///
    /// The curve is evaluated at the two levels around `l * 255` and the
    /// results are blended by the fractional part, so an identity curve
    /// returns `l` unchanged instead of snapping it to a level.
    fn curve_lightness(&self, curve: &ToneCurve, key: &str, l: f64) -> f64 {
        let scaled = l.clamp(0.0, 1.0) * 255.0;
        let lo = scaled.floor();
        let frac = scaled - lo;
        let lo_level = lo as u8;

        let y_lo = f64::from(self.cache.evaluate_keyed(key, curve, lo_level));
        let y = if frac > 0.0 {
            let hi_level = lo_level.saturating_add(1);
            let y_hi = f64::from(self.cache.evaluate_keyed(key, curve, hi_level));
            y_lo + (y_hi - y_lo) * frac
        } else {
            y_lo
        };
        (y / 255.0).clamp(0.0, 1.0)
    }
}

/// One-shot form of [`ColorTransform::apply`].
pub fn transform_rgb(
    rgb: [f32; 3],
    adjustments: &DetailedAdjustments,
    cache: &ToneCurveCache,
) -> [f32; 3] {
    ColorTransform::new(adjustments, cache).apply(rgb)
}

fn shift_channel(hsl: Hsl, set: &HslAdjustmentSet) -> Hsl {
    let channel = HueChannel::from_degrees(hsl.h);
    Hsl {
        h: wrap_hue(hsl.h + f64::from(set.hue.shift(channel)) / 100.0 * HUE_SHIFT_DEGREES),
        s: (hsl.s + f64::from(set.saturation.shift(channel)) / SL_SHIFT_DIVISOR).clamp(0.0, 1.0),
        l: (hsl.l + f64::from(set.luminance.shift(channel)) / SL_SHIFT_DIVISOR).clamp(0.0, 1.0),
    }
}

/// Shadow and highlight weights for lightness `l`.
///
/// Weights depend on lightness and balance only. A side with zero
/// saturation still blends toward its grey tint. A threshold at 0 or 1
/// leaves no room on one side, and that side's weight is 0.
pub fn split_weights(st: &SplitToning, l: f64) -> (f64, f64) {
    let threshold = 0.5 + f64::from(st.balance()) / 100.0 * 0.25;

    let shadow = if l < threshold && threshold > 0.0 {
        (threshold - l) / threshold
    } else {
        0.0
    };
    let highlight = if l > threshold && threshold < 1.0 {
        (l - threshold) / (1.0 - threshold)
    } else {
        0.0
    };
    (shadow.clamp(0.0, 1.0), highlight.clamp(0.0, 1.0))
}

fn split_tone(hsl: Hsl, st: &SplitToning) -> [f64; 3] {
    let (w_shadow, w_highlight) = split_weights(st, hsl.l);
    let base = hsl_to_rgb(hsl);

    let shadow = hsl_to_rgb(Hsl::new(
        f64::from(st.shadow_hue()),
        f64::from(st.shadow_saturation()) / 100.0,
        hsl.l,
    ));
    let highlight = hsl_to_rgb(Hsl::new(
        f64::from(st.highlight_hue()),
        f64::from(st.highlight_saturation()) / 100.0,
        hsl.l,
    ));

    let mut out = [0.0f64; 3];
    for i in 0..3 {
        let toned = mix(base[i], shadow[i], w_shadow);
        out[i] = mix(toned, highlight[i], w_highlight);
    }
    out
}

#[inline]
fn mix(a: f64, b: f64, w: f64) -> f64 {
    a * (1.0 - w) + b * w
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lrcube_core::{ChannelShifts, CurvePoint};

    fn assert_rgb_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn empty_adjustments_pass_through() {
        let cache = ToneCurveCache::with_capacity(2);
        let adj = DetailedAdjustments::default();
        for rgb in [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.2, 0.6, 0.9]] {
            assert_rgb_eq(transform_rgb(rgb, &adj, &cache), rgb);
        }
    }

    #[test]
    fn red_hue_shift_moves_pure_red() {
        let cache = ToneCurveCache::with_capacity(2);
        let adj = DetailedAdjustments {
            hsl: Some(HslAdjustmentSet {
                hue: ChannelShifts::default().with(HueChannel::Red, 50.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = transform_rgb([1.0, 0.0, 0.0], &adj, &cache);
        // +22.5 degrees: green rises, red stays full
        assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(out[1], 0.375, epsilon = 1e-5);
        assert_abs_diff_eq!(out[2], 0.0, epsilon = 1e-5);

        // blue is in another bucket and untouched
        assert_rgb_eq(transform_rgb([0.0, 0.0, 1.0], &adj, &cache), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn luminance_shift_is_clamped() {
        let cache = ToneCurveCache::with_capacity(2);
        let adj = DetailedAdjustments {
            hsl: Some(HslAdjustmentSet {
                luminance: ChannelShifts::default().with(HueChannel::Blue, 100.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        // l = 0.5 + 0.5 = 1.0 -> white
        assert_rgb_eq(transform_rgb([0.0, 0.0, 1.0], &adj, &cache), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn identity_curve_keeps_lightness() {
        let cache = ToneCurveCache::with_capacity(2);
        let adj = DetailedAdjustments {
            tone_curve: Some(ToneCurve::identity()),
            ..Default::default()
        };
        for rgb in [[0.03125, 0.03125, 0.03125], [0.1, 0.4, 0.7], [0.9, 0.2, 0.5]] {
            assert_rgb_eq(transform_rgb(rgb, &adj, &cache), rgb);
        }
    }

    #[test]
    fn curve_lifts_grey() {
        let cache = ToneCurveCache::with_capacity(2);
        let adj = DetailedAdjustments {
            tone_curve: Some(
                ToneCurve::from_points(vec![
                    CurvePoint::new(0.0, 0.0),
                    CurvePoint::new(128.0, 160.0),
                    CurvePoint::new(255.0, 255.0),
                ])
                .unwrap(),
            ),
            ..Default::default()
        };
        let grey = 64.0 / 255.0;
        let out = transform_rgb([grey; 3], &adj, &cache);
        assert_abs_diff_eq!(out[0], 80.0 / 255.0, epsilon = 1e-5);
        assert!(cache.stats().misses >= 1);
    }

    #[test]
    fn shadow_toning_leaves_highlights() {
        let cache = ToneCurveCache::with_capacity(2);
        let st = SplitToning {
            shadow_hue: Some(220.0),
            shadow_saturation: Some(50.0),
            highlight_saturation: Some(0.0),
            balance: Some(0.0),
            ..Default::default()
        };
        let adj = DetailedAdjustments {
            split_toning: Some(st),
            ..Default::default()
        };

        assert_rgb_eq(transform_rgb([1.0, 1.0, 1.0], &adj, &cache), [1.0, 1.0, 1.0]);
        assert_rgb_eq(transform_rgb([0.75, 0.75, 0.75], &adj, &cache), [0.75, 0.75, 0.75]);

        let dark = transform_rgb([0.2, 0.2, 0.2], &adj, &cache);
        assert!(dark[2] > dark[0], "shadow should lean blue: {dark:?}");
    }

    #[test]
    fn unsaturated_highlight_side_pulls_toward_grey() {
        let cache = ToneCurveCache::with_capacity(2);
        let adj = DetailedAdjustments {
            split_toning: Some(SplitToning {
                shadow_saturation: Some(50.0),
                highlight_saturation: Some(0.0),
                balance: Some(0.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        // l = 0.7, highlight weight 0.4 toward grey 0.7
        assert_rgb_eq(transform_rgb([0.9, 0.5, 0.6], &adj, &cache), [0.82, 0.58, 0.64]);
        let (ws, wh) = split_weights(adj.split_toning.as_ref().unwrap(), 0.7);
        assert_eq!(ws, 0.0);
        assert_abs_diff_eq!(wh, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn weights_with_balance() {
        let st = SplitToning {
            shadow_saturation: Some(40.0),
            highlight_saturation: Some(40.0),
            balance: Some(100.0),
            ..Default::default()
        };
        // threshold 0.75
        let (ws, wh) = split_weights(&st, 0.375);
        assert_abs_diff_eq!(ws, 0.5, epsilon = 1e-6);
        assert_eq!(wh, 0.0);
        let (ws, wh) = split_weights(&st, 0.875);
        assert_eq!(ws, 0.0);
        assert_abs_diff_eq!(wh, 0.5, epsilon = 1e-6);
        assert_eq!(split_weights(&st, 0.75), (0.0, 0.0));
    }
}
