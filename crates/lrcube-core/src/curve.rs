//! Tone curve control points.
//!
//! A [`ToneCurve`] is a piecewise-linear luminance remap over the 8-bit
//! domain. Points are kept in the order supplied; callers provide them with
//! non-decreasing x and nothing here re-sorts.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Inclusive upper bound of the 8-bit curve domain.
pub const CURVE_MAX: f32 = 255.0;

/// One (input, output) knot of a tone curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Input level, 0..=255.
    pub x: f32,
    /// Output level, 0..=255.
    pub y: f32,
}

impl CurvePoint {
    /// Creates a point, clamping both coordinates into `[0, 255]`.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, CURVE_MAX),
            y: y.clamp(0.0, CURVE_MAX),
        }
    }
}

/// Ordered control points of a tone curve. Always holds at least two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct ToneCurve {
    points: Vec<CurvePoint>,
}

impl ToneCurve {
    /// Builds a curve, rejecting it as a whole when fewer than two points
    /// are supplied.
    pub fn from_points(points: Vec<CurvePoint>) -> CoreResult<Self> {
        if points.len() < 2 {
            return Err(CoreError::CurveRejected {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// The straight `(0,0)-(255,255)` curve.
    pub fn identity() -> Self {
        Self {
            points: vec![CurvePoint::new(0.0, 0.0), CurvePoint::new(CURVE_MAX, CURVE_MAX)],
        }
    }

    /// Control points in supplied order.
    #[inline]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a curve holds at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Structural identity of the curve: its serialized point list
    /// (`x,y|x,y|...`). Two curves with the same points share a key.
    pub fn identity_key(&self) -> String {
        let mut key = String::with_capacity(self.points.len() * 8);
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                key.push('|');
            }
            let _ = write!(key, "{},{}", p.x, p.y);
        }
        key
    }
}

impl TryFrom<Vec<CurvePoint>> for ToneCurve {
    type Error = CoreError;

    fn try_from(points: Vec<CurvePoint>) -> CoreResult<Self> {
        Self::from_points(points)
    }
}

impl From<ToneCurve> for Vec<CurvePoint> {
    fn from(curve: ToneCurve) -> Self {
        curve.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_curves() {
        assert_eq!(
            ToneCurve::from_points(vec![CurvePoint::new(0.0, 0.0)]),
            Err(CoreError::CurveRejected { found: 1 })
        );
        assert!(ToneCurve::from_points(Vec::new()).is_err());
    }

    #[test]
    fn points_are_clamped() {
        let p = CurvePoint::new(-4.0, 300.0);
        assert_eq!(p, CurvePoint { x: 0.0, y: 255.0 });
    }

    #[test]
    fn keeps_supplied_order() {
        let pts = vec![
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(200.0, 180.0),
            CurvePoint::new(128.0, 160.0),
        ];
        let curve = ToneCurve::from_points(pts.clone()).unwrap();
        assert_eq!(curve.points(), pts.as_slice());
    }

    #[test]
    fn identity_key_is_structural() {
        let a = ToneCurve::from_points(vec![
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(128.0, 160.0),
            CurvePoint::new(255.0, 255.0),
        ])
        .unwrap();
        assert_eq!(a.identity_key(), "0,0|128,160|255,255");
        assert_eq!(a.identity_key(), a.clone().identity_key());
        assert_ne!(a.identity_key(), ToneCurve::identity().identity_key());
    }

    #[test]
    fn deserialize_enforces_minimum() {
        let ok: ToneCurve = serde_json::from_str(r#"[{"x":0,"y":0},{"x":255,"y":255}]"#).unwrap();
        assert_eq!(ok, ToneCurve::identity());
        assert!(serde_json::from_str::<ToneCurve>(r#"[{"x":0,"y":0}]"#).is_err());
    }
}
