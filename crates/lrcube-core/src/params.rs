//! Normalized parameter record for the realtime color filter.
//!
//! Twelve independent scalars. Additive controls are neutral at 0,
//! multiplicative ones (contrast, saturation, gamma) at 1.

use serde::{Deserialize, Serialize};

/// Documented range and neutral value of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Inclusive minimum.
    pub min: f32,
    /// Inclusive maximum.
    pub max: f32,
    /// Value that leaves the image unchanged.
    pub neutral: f32,
}

impl ParamRange {
    const fn new(min: f32, max: f32, neutral: f32) -> Self {
        Self { min, max, neutral }
    }

    /// Clamps `v` into this range.
    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }

    /// True when `v` lies within the range.
    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

/// Parameters consumed by the realtime filter's parameter API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleAdjustmentParams {
    /// Additive brightness. Neutral 0.
    pub brightness: f32,
    /// Contrast multiplier. Neutral 1.
    pub contrast: f32,
    /// Saturation multiplier. Neutral 1.
    pub saturation: f32,
    /// Hue rotation in degrees. Neutral 0.
    pub hue: f32,
    /// Gamma. Neutral 1.
    pub gamma: f32,
    /// Warm/cool shift. Neutral 0.
    pub warmth: f32,
    /// Green/magenta shift. Neutral 0.
    pub tint: f32,
    /// Exposure in stops. Neutral 0.
    pub exposure: f32,
    /// Shadow lift. Neutral 0.
    pub shadows: f32,
    /// Highlight recovery. Neutral 0.
    pub highlights: f32,
    /// Vignette strength. Neutral 0.
    pub vignette: f32,
    /// Film grain amount. Neutral 0.
    pub grain: f32,
}

impl SimpleAdjustmentParams {
    /// Additive brightness range.
    pub const BRIGHTNESS: ParamRange = ParamRange::new(-1.0, 1.0, 0.0);
    /// Contrast multiplier range.
    pub const CONTRAST: ParamRange = ParamRange::new(0.0, 2.0, 1.0);
    /// Saturation multiplier range.
    pub const SATURATION: ParamRange = ParamRange::new(0.0, 2.0, 1.0);
    /// Hue rotation range, degrees.
    pub const HUE: ParamRange = ParamRange::new(-180.0, 180.0, 0.0);
    /// Gamma range.
    pub const GAMMA: ParamRange = ParamRange::new(0.5, 1.5, 1.0);
    /// Warmth range.
    pub const WARMTH: ParamRange = ParamRange::new(-1.0, 1.0, 0.0);
    /// Tint range.
    pub const TINT: ParamRange = ParamRange::new(-1.0, 1.0, 0.0);
    /// Exposure range, stops.
    pub const EXPOSURE: ParamRange = ParamRange::new(-2.0, 2.0, 0.0);
    /// Shadows range.
    pub const SHADOWS: ParamRange = ParamRange::new(-1.0, 1.0, 0.0);
    /// Highlights range.
    pub const HIGHLIGHTS: ParamRange = ParamRange::new(-1.0, 1.0, 0.0);
    /// Vignette range.
    pub const VIGNETTE: ParamRange = ParamRange::new(0.0, 1.0, 0.0);
    /// Grain range.
    pub const GRAIN: ParamRange = ParamRange::new(0.0, 1.0, 0.0);

    /// Named ranges in field order.
    pub const RANGES: [(&'static str, ParamRange); 12] = [
        ("brightness", Self::BRIGHTNESS),
        ("contrast", Self::CONTRAST),
        ("saturation", Self::SATURATION),
        ("hue", Self::HUE),
        ("gamma", Self::GAMMA),
        ("warmth", Self::WARMTH),
        ("tint", Self::TINT),
        ("exposure", Self::EXPOSURE),
        ("shadows", Self::SHADOWS),
        ("highlights", Self::HIGHLIGHTS),
        ("vignette", Self::VIGNETTE),
        ("grain", Self::GRAIN),
    ];

    /// All parameters at their neutral value.
    pub const fn neutral() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            hue: 0.0,
            gamma: 1.0,
            warmth: 0.0,
            tint: 0.0,
            exposure: 0.0,
            shadows: 0.0,
            highlights: 0.0,
            vignette: 0.0,
            grain: 0.0,
        }
    }

    /// Field values in the same order as [`Self::RANGES`].
    pub fn values(&self) -> [f32; 12] {
        [
            self.brightness,
            self.contrast,
            self.saturation,
            self.hue,
            self.gamma,
            self.warmth,
            self.tint,
            self.exposure,
            self.shadows,
            self.highlights,
            self.vignette,
            self.grain,
        ]
    }

    /// `(name, value)` pairs in field order.
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f32)> {
        Self::RANGES
            .into_iter()
            .zip(self.values())
            .map(|((name, _), v)| (name, v))
    }

    /// Returns a copy with every field clamped into its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            brightness: Self::BRIGHTNESS.clamp(self.brightness),
            contrast: Self::CONTRAST.clamp(self.contrast),
            saturation: Self::SATURATION.clamp(self.saturation),
            hue: Self::HUE.clamp(self.hue),
            gamma: Self::GAMMA.clamp(self.gamma),
            warmth: Self::WARMTH.clamp(self.warmth),
            tint: Self::TINT.clamp(self.tint),
            exposure: Self::EXPOSURE.clamp(self.exposure),
            shadows: Self::SHADOWS.clamp(self.shadows),
            highlights: Self::HIGHLIGHTS.clamp(self.highlights),
            vignette: Self::VIGNETTE.clamp(self.vignette),
            grain: Self::GRAIN.clamp(self.grain),
        }
    }

    /// True when every field lies within its documented range.
    pub fn in_range(&self) -> bool {
        Self::RANGES
            .iter()
            .zip(self.values())
            .all(|((_, range), v)| range.contains(v))
    }

    /// True when every field equals its neutral value.
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}

impl Default for SimpleAdjustmentParams {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        let p = SimpleAdjustmentParams::default();
        assert!(p.is_neutral());
        assert!(p.in_range());
        for ((name, range), v) in SimpleAdjustmentParams::RANGES.iter().zip(p.values()) {
            assert_eq!(range.neutral, v, "{name}");
        }
    }

    #[test]
    fn clamped_brings_values_into_range() {
        let wild = SimpleAdjustmentParams {
            exposure: 9.0,
            contrast: -3.0,
            gamma: 0.1,
            vignette: 4.0,
            hue: 720.0,
            ..Default::default()
        };
        assert!(!wild.in_range());
        let c = wild.clamped();
        assert!(c.in_range());
        approx::assert_relative_eq!(c.exposure, 2.0);
        approx::assert_relative_eq!(c.contrast, 0.0);
        approx::assert_relative_eq!(c.gamma, 0.5);
    }

    #[test]
    fn missing_fields_deserialize_neutral() {
        let p: SimpleAdjustmentParams = serde_json::from_str(r#"{"exposure": 1.0}"#).unwrap();
        assert_eq!(p.exposure, 1.0);
        assert_eq!(p.contrast, 1.0);
        assert_eq!(p.grain, 0.0);
    }

    #[test]
    fn named_values_order() {
        let names: Vec<_> = SimpleAdjustmentParams::neutral()
            .named_values()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names.first(), Some(&"brightness"));
        assert_eq!(names.last(), Some(&"grain"));
        assert_eq!(names.len(), 12);
    }
}
