//! Detailed adjustment structures: per-channel HSL, tone curve, split toning.
//!
//! These are the operations a realtime parameter filter cannot express.
//! When any of them is present the preset is baked into a 3D LUT instead.

use serde::{Deserialize, Serialize};

use crate::{HueChannel, ToneCurve};

/// Limit of a reported HSL or balance value, in Lightroom slider units.
pub const SLIDER_LIMIT: f32 = 100.0;

/// Partial mapping from [`HueChannel`] to a signed shift in `[-100, 100]`.
///
/// An absent channel means zero shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelShifts {
    values: [Option<f32>; 8],
}

impl ChannelShifts {
    /// Records a shift for `channel`, clamped into `[-100, 100]`.
    pub fn set(&mut self, channel: HueChannel, value: f32) {
        self.values[channel.index()] = Some(value.clamp(-SLIDER_LIMIT, SLIDER_LIMIT));
    }

    /// Builder form of [`ChannelShifts::set`].
    pub fn with(mut self, channel: HueChannel, value: f32) -> Self {
        self.set(channel, value);
        self
    }

    /// The recorded shift, if any.
    #[inline]
    pub fn get(&self, channel: HueChannel) -> Option<f32> {
        self.values[channel.index()]
    }

    /// The shift for `channel`, zero when absent.
    #[inline]
    pub fn shift(&self, channel: HueChannel) -> f32 {
        self.get(channel).unwrap_or(0.0)
    }

    /// True when no channel carries a value.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterates over the channels that carry a value.
    pub fn iter(&self) -> impl Iterator<Item = (HueChannel, f32)> + '_ {
        HueChannel::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| (c, v)))
    }
}

/// Per-channel hue, saturation and luminance shifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HslAdjustmentSet {
    /// Hue shifts; ±100 maps to ±45 degrees.
    pub hue: ChannelShifts,
    /// Saturation shifts; ±100 maps to ±0.5.
    pub saturation: ChannelShifts,
    /// Luminance shifts; ±100 maps to ±0.5.
    pub luminance: ChannelShifts,
}

impl HslAdjustmentSet {
    /// True when no channel has any of the three shifts.
    pub fn is_empty(&self) -> bool {
        self.hue.is_empty() && self.saturation.is_empty() && self.luminance.is_empty()
    }

    /// Channels with at least one recorded shift, in panel order.
    pub fn populated_channels(&self) -> Vec<HueChannel> {
        HueChannel::ALL
            .into_iter()
            .filter(|&c| {
                self.hue.get(c).is_some()
                    || self.saturation.get(c).is_some()
                    || self.luminance.get(c).is_some()
            })
            .collect()
    }
}

/// Shadow/highlight toning. Each field is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitToning {
    /// Shadow tint hue in degrees.
    pub shadow_hue: Option<f32>,
    /// Shadow tint saturation, 0..=100.
    pub shadow_saturation: Option<f32>,
    /// Highlight tint hue in degrees.
    pub highlight_hue: Option<f32>,
    /// Highlight tint saturation, 0..=100.
    pub highlight_saturation: Option<f32>,
    /// Shadow/highlight threshold shift, -100..=100.
    pub balance: Option<f32>,
}

impl SplitToning {
    /// True when at least one field was supplied.
    pub fn is_present(&self) -> bool {
        self.shadow_hue.is_some()
            || self.shadow_saturation.is_some()
            || self.highlight_hue.is_some()
            || self.highlight_saturation.is_some()
            || self.balance.is_some()
    }

    /// True when either side carries a non-zero saturation.
    pub fn is_active(&self) -> bool {
        self.shadow_saturation() > 0.0 || self.highlight_saturation() > 0.0
    }

    /// Shadow hue in degrees, 0 when absent.
    pub fn shadow_hue(&self) -> f32 {
        self.shadow_hue.unwrap_or(0.0)
    }

    /// Shadow saturation clamped to `[0, 100]`, 0 when absent.
    pub fn shadow_saturation(&self) -> f32 {
        self.shadow_saturation.unwrap_or(0.0).clamp(0.0, SLIDER_LIMIT)
    }

    /// Highlight hue in degrees, 0 when absent.
    pub fn highlight_hue(&self) -> f32 {
        self.highlight_hue.unwrap_or(0.0)
    }

    /// Highlight saturation clamped to `[0, 100]`, 0 when absent.
    pub fn highlight_saturation(&self) -> f32 {
        self.highlight_saturation.unwrap_or(0.0).clamp(0.0, SLIDER_LIMIT)
    }

    /// Balance clamped to `[-100, 100]`, 0 when absent.
    pub fn balance(&self) -> f32 {
        self.balance.unwrap_or(0.0).clamp(-SLIDER_LIMIT, SLIDER_LIMIT)
    }
}

/// Everything beyond the simple parameter set that a preset describes.
///
/// Empty exactly when none of the three structures was found; that is the
/// signal to skip LUT generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAdjustments {
    /// Per-channel HSL shifts.
    pub hsl: Option<HslAdjustmentSet>,
    /// Composite tone curve.
    pub tone_curve: Option<ToneCurve>,
    /// Split toning.
    pub split_toning: Option<SplitToning>,
}

impl DetailedAdjustments {
    /// True when no detailed structure is present.
    pub fn is_empty(&self) -> bool {
        self.hsl.is_none() && self.tone_curve.is_none() && self.split_toning.is_none()
    }

    /// Short human-readable list of what is present, e.g. `"hsl, tone curve"`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.hsl.is_some() {
            parts.push("hsl");
        }
        if self.tone_curve.is_some() {
            parts.push("tone curve");
        }
        if self.split_toning.is_some() {
            parts.push("split toning");
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_channel_is_zero_shift() {
        let shifts = ChannelShifts::default().with(HueChannel::Red, 50.0);
        assert_eq!(shifts.shift(HueChannel::Red), 50.0);
        assert_eq!(shifts.shift(HueChannel::Blue), 0.0);
        assert_eq!(shifts.get(HueChannel::Blue), None);
    }

    #[test]
    fn shifts_are_clamped() {
        let shifts = ChannelShifts::default()
            .with(HueChannel::Green, 400.0)
            .with(HueChannel::Aqua, -250.0);
        assert_eq!(shifts.shift(HueChannel::Green), 100.0);
        assert_eq!(shifts.shift(HueChannel::Aqua), -100.0);
    }

    #[test]
    fn populated_channels_union() {
        let mut set = HslAdjustmentSet::default();
        set.hue.set(HueChannel::Red, 10.0);
        set.luminance.set(HueChannel::Blue, -5.0);
        assert_eq!(set.populated_channels(), vec![HueChannel::Red, HueChannel::Blue]);
    }

    #[test]
    fn split_toning_activity() {
        let st = SplitToning {
            balance: Some(20.0),
            ..Default::default()
        };
        assert!(st.is_present());
        assert!(!st.is_active());

        let st = SplitToning {
            shadow_saturation: Some(50.0),
            ..Default::default()
        };
        assert!(st.is_active());
        assert!(!SplitToning::default().is_present());
    }

    #[test]
    fn empty_detailed() {
        let mut d = DetailedAdjustments::default();
        assert!(d.is_empty());
        assert_eq!(d.summary(), "none");
        d.tone_curve = Some(ToneCurve::identity());
        assert!(!d.is_empty());
        assert_eq!(d.summary(), "tone curve");
    }
}
