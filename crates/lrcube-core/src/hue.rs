//! The 8 hue buckets used by Lightroom's HSL panel.
//!
//! Buckets are non-uniform and partition the full hue circle:
//!
//! ```text
//!   red      [345, 360) u [0, 15)
//!   orange   [15, 45)
//!   yellow   [45, 75)
//!   green    [75, 150)
//!   aqua     [150, 195)
//!   blue     [195, 255)
//!   purple   [255, 300)
//!   magenta  [300, 345)
//! ```
//!
//! Lower edges are inclusive, so a hue exactly on an edge always lands in
//! the bucket that starts there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One of the 8 fixed hue buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum HueChannel {
    /// Reds, wrapping through 0 degrees.
    Red = 0,
    /// Oranges.
    Orange = 1,
    /// Yellows.
    Yellow = 2,
    /// Greens (widest bucket).
    Green = 3,
    /// Aquas / cyans.
    Aqua = 4,
    /// Blues.
    Blue = 5,
    /// Purples.
    Purple = 6,
    /// Magentas.
    Magenta = 7,
}

/// Upper (exclusive) edge of each bucket after red, in degrees.
const EDGES: [(f64, HueChannel); 7] = [
    (45.0, HueChannel::Orange),
    (75.0, HueChannel::Yellow),
    (150.0, HueChannel::Green),
    (195.0, HueChannel::Aqua),
    (255.0, HueChannel::Blue),
    (300.0, HueChannel::Purple),
    (345.0, HueChannel::Magenta),
];

impl HueChannel {
    /// All channels in Lightroom panel order.
    pub const ALL: [HueChannel; 8] = [
        HueChannel::Red,
        HueChannel::Orange,
        HueChannel::Yellow,
        HueChannel::Green,
        HueChannel::Aqua,
        HueChannel::Blue,
        HueChannel::Purple,
        HueChannel::Magenta,
    ];

    /// Position in [`HueChannel::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in serialized output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Magenta => "magenta",
        }
    }

    /// Capitalized suffix used in XMP field names, e.g. `HueAdjustmentRed`.
    pub const fn xmp_suffix(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Aqua => "Aqua",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Magenta => "Magenta",
        }
    }

    /// Classifies a hue angle in degrees. Any finite angle is accepted and
    /// wrapped into `[0, 360)` first.
    pub fn from_degrees(hue: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        if !(15.0..345.0).contains(&h) {
            return Self::Red;
        }
        EDGES
            .iter()
            .find(|(upper, _)| h < *upper)
            .map(|(_, channel)| *channel)
            .unwrap_or(Self::Magenta)
    }
}

impl fmt::Display for HueChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HueChannel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownChannel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_belong_to_upper_bucket() {
        let cases = [
            (0.0, HueChannel::Red),
            (15.0, HueChannel::Orange),
            (45.0, HueChannel::Yellow),
            (75.0, HueChannel::Green),
            (150.0, HueChannel::Aqua),
            (195.0, HueChannel::Blue),
            (255.0, HueChannel::Purple),
            (300.0, HueChannel::Magenta),
            (345.0, HueChannel::Red),
        ];
        for (deg, expected) in cases {
            assert_eq!(HueChannel::from_degrees(deg), expected, "hue {deg}");
        }
    }

    #[test]
    fn just_below_edges() {
        assert_eq!(HueChannel::from_degrees(14.999), HueChannel::Red);
        assert_eq!(HueChannel::from_degrees(44.999), HueChannel::Orange);
        assert_eq!(HueChannel::from_degrees(344.999), HueChannel::Magenta);
    }

    #[test]
    fn wraps_out_of_range_angles() {
        assert_eq!(HueChannel::from_degrees(360.0), HueChannel::Red);
        assert_eq!(HueChannel::from_degrees(-10.0), HueChannel::Red);
        assert_eq!(HueChannel::from_degrees(-60.0), HueChannel::Magenta);
        assert_eq!(HueChannel::from_degrees(480.0), HueChannel::Green);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, c) in HueChannel::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("Aqua".parse::<HueChannel>().unwrap(), HueChannel::Aqua);
        assert!("cyan".parse::<HueChannel>().is_err());
    }
}
