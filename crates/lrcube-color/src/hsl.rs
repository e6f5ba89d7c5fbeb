//! HSL (hue, saturation, lightness) conversions.
//!
//! Hue is in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
//! Everything is computed in `f64`; an RGB -> HSL -> RGB round-trip of a
//! grid coordinate has to survive narrowing to `f32` unchanged.

/// A color in HSL form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation, 0..=1.
    pub s: f64,
    /// Lightness, 0..=1.
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL triple without normalization.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Below this spread a color is treated as grey.
const ACHROMATIC_EPSILON: f64 = 1e-12;

/// Wraps an angle into `[0, 360)`.
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 { 0.0 } else { w }
}

/// Converts RGB in `[0, 1]` to HSL. Inputs are clamped first.
#[inline]
pub fn rgb_to_hsl(rgb: [f64; 3]) -> Hsl {
    let [r, g, b] = rgb.map(|c| c.clamp(0.0, 1.0));

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    // Achromatic
    if delta < ACHROMATIC_EPSILON {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(wrap_hue(h * 60.0), s, l)
}

/// Converts HSL to RGB. Saturation and lightness are clamped, hue wrapped.
#[inline]
pub fn hsl_to_rgb(hsl: Hsl) -> [f64; 3] {
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s < ACHROMATIC_EPSILON {
        return [l, l, l];
    }

    let h = wrap_hue(hsl.h) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

#[inline]
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
