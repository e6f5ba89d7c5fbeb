//! Piecewise-linear tone-curve evaluation over the 8-bit domain.
//!
//! Control points are used in the order supplied. Inputs outside the
//! curve's x range take the first or last y; nothing is extrapolated.

use lrcube_core::{CurvePoint, ToneCurve};

/// Curves with more points than this are searched with bisection.
pub const LINEAR_SCAN_LIMIT: usize = 10;

/// Evaluates `curve` at `input`, rounding the result to the nearest level.
pub fn evaluate(curve: &ToneCurve, input: u8) -> u8 {
    let points = curve.points();
    let v = f32::from(input);

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return input;
    };
    if v < first.x {
        return to_level(first.y);
    }
    if v > last.x {
        return to_level(last.y);
    }

    if points.len() > LINEAR_SCAN_LIMIT {
        let (lo, hi) = bisect(points, v);
        interpolate(&points[lo], &points[hi], v)
    } else {
        points
            .windows(2)
            .find(|w| v <= w[1].x)
            .map(|w| interpolate(&w[0], &w[1], v))
            .unwrap_or_else(|| to_level(last.y))
    }
}

/// Finds the bracketing segment `(lo, lo + 1)` for `v`.
fn bisect(points: &[CurvePoint], v: f32) -> (usize, usize) {
    let mut left = 0;
    let mut right = points.len() - 1;
    while left + 1 < right {
        let mid = (left + right) / 2;
        if v <= points[mid].x {
            right = mid;
        } else {
            left = mid;
        }
    }
    (left, right)
}

#[inline]
fn interpolate(a: &CurvePoint, b: &CurvePoint, v: f32) -> u8 {
    let span = b.x - a.x;
    let t = if span == 0.0 { 0.0 } else { (v - a.x) / span };
    to_level(a.y + t * (b.y - a.y))
}

#[inline]
fn to_level(y: f32) -> u8 {
    y.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(pts: &[(f32, f32)]) -> ToneCurve {
        ToneCurve::from_points(pts.iter().map(|&(x, y)| CurvePoint::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn midpoint_interpolation() {
        let c = curve(&[(0.0, 0.0), (128.0, 160.0), (255.0, 255.0)]);
        assert_eq!(evaluate(&c, 64), 80);
        assert_eq!(evaluate(&c, 128), 160);
        assert_eq!(evaluate(&c, 0), 0);
        assert_eq!(evaluate(&c, 255), 255);
    }

    #[test]
    fn identity_is_identity() {
        let c = ToneCurve::identity();
        for v in 0..=255u8 {
            assert_eq!(evaluate(&c, v), v);
        }
    }

    #[test]
    fn clamps_outside_domain() {
        let c = curve(&[(32.0, 40.0), (224.0, 200.0)]);
        assert_eq!(evaluate(&c, 0), 40);
        assert_eq!(evaluate(&c, 31), 40);
        assert_eq!(evaluate(&c, 240), 200);
        assert_eq!(evaluate(&c, 255), 200);
    }

    #[test]
    fn vertical_segment_takes_left_y() {
        let c = curve(&[(0.0, 0.0), (100.0, 50.0), (100.0, 200.0), (255.0, 255.0)]);
        assert_eq!(evaluate(&c, 100), 50);
    }

    #[test]
    fn bisection_matches_scan() {
        // 16 points on an S-curve: bisection path
        let pts: Vec<(f32, f32)> = (0..16)
            .map(|i| {
                let x = i as f32 * 17.0;
                let t = x / 255.0;
                (x, 255.0 * t * t * (3.0 - 2.0 * t))
            })
            .collect();
        let long = curve(&pts);
        assert!(long.len() > LINEAR_SCAN_LIMIT);

        for v in 0..=255u8 {
            let x = f32::from(v);
            let seg = pts
                .windows(2)
                .find(|w| x <= w[1].0)
                .expect("in domain");
            let t = (x - seg[0].0) / (seg[1].0 - seg[0].0);
            let expected = (seg[0].1 + t * (seg[1].1 - seg[0].1)).round() as u8;
            assert_eq!(evaluate(&long, v), expected, "input {v}");
        }
    }
}
