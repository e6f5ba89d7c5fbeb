//! Baked 3-dimensional lookup table.
//!
//! A [`CubeLut`] maps quantized input RGB to output RGB through a uniform
//! grid of nodes. It is the artifact handed to the realtime filter when a
//! preset cannot be expressed as simple parameters.

use crate::{Interpolation, LutError, LutResult};

/// Largest grid size accepted when reading or building a LUT.
pub const MAX_CUBE_SIZE: usize = 256;

/// A 3D lookup table over the unit cube.
///
/// # Structure
///
/// - `size^3` entries, each an RGB triple in `[0, 1]`
/// - Stored in `.cube` file order: red varies fastest, then green, then blue
/// - Nearest or trilinear lookup
///
/// # Example
///
/// ```rust
/// use lrcube_lut::CubeLut;
///
/// let lut = CubeLut::identity(17);
/// let out = lut.apply([0.5, 0.25, 0.75]);
/// assert!((out[0] - 0.5).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubeLut {
    /// Node values, `index = r + g*size + b*size^2`.
    pub data: Vec<[f32; 3]>,
    /// Nodes per axis.
    pub size: usize,
    /// Title written as the leading `#` comment.
    pub title: String,
    /// Lookup method used by [`CubeLut::apply`].
    pub interpolation: Interpolation,
}

impl CubeLut {
    /// Creates an identity (pass-through) LUT.
    pub fn identity(size: usize) -> Self {
        let denom = size.saturating_sub(1).max(1) as f32;
        let mut data = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push([r as f32 / denom, g as f32 / denom, b as f32 / denom]);
                }
            }
        }
        Self {
            data,
            size,
            title: crate::cube::DEFAULT_TITLE.to_string(),
            interpolation: Interpolation::default(),
        }
    }

    /// Creates a LUT from node values in file order.
    ///
    /// `data` must hold exactly `size^3` entries.
    pub fn from_data(data: Vec<[f32; 3]>, size: usize) -> LutResult<Self> {
        if size > MAX_CUBE_SIZE {
            return Err(LutError::InvalidSize(format!(
                "size {size} exceeds maximum {MAX_CUBE_SIZE}"
            )));
        }
        let expected = size * size * size;
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            title: crate::cube::DEFAULT_TITLE.to_string(),
            interpolation: Interpolation::default(),
        })
    }

    /// Sets the title comment.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the interpolation method.
    pub fn with_interpolation(mut self, interp: Interpolation) -> Self {
        self.interpolation = interp;
        self
    }

    /// Total number of nodes.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        b * self.size * self.size + g * self.size + r
    }

    /// Node value at grid position (r, g, b).
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is `>= size`.
    #[inline]
    pub fn node(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        self.data[self.index(r, g, b)]
    }

    /// Samples the LUT at `rgb` (inputs outside `[0, 1]` are clamped).
    ///
    /// An empty LUT passes input through unchanged.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        match (self.size, self.interpolation) {
            (0, _) => rgb,
            (1, _) => self.data[0],
            (_, Interpolation::Nearest) => self.apply_nearest(rgb),
            (_, Interpolation::Trilinear) => self.apply_trilinear(rgb),
        }
    }

    fn apply_nearest(&self, rgb: [f32; 3]) -> [f32; 3] {
        let n = (self.size - 1) as f32;
        let [r, g, b] = rgb.map(|c| ((c.clamp(0.0, 1.0) * n).round() as usize).min(self.size - 1));
        self.node(r, g, b)
    }

    /// Weighted sum over the eight nodes of the cell holding `rgb`.
    fn apply_trilinear(&self, rgb: [f32; 3]) -> [f32; 3] {
        let cells = rgb.map(|c| self.cell(c));

        let mut out = [0.0f32; 3];
        for corner in 0..8 {
            let mut weight = 1.0;
            let mut pos = [0usize; 3];
            for (axis, &(base, t)) in cells.iter().enumerate() {
                let upper = (corner >> axis) & 1 == 1;
                pos[axis] = base + usize::from(upper);
                weight *= if upper { t } else { 1.0 - t };
            }
            if weight == 0.0 {
                continue;
            }
            let node = self.node(pos[0], pos[1], pos[2]);
            for (acc, v) in out.iter_mut().zip(node) {
                *acc += weight * v;
            }
        }
        out
    }

    /// Lower node index along one axis and the offset past it.
    #[inline]
    fn cell(&self, c: f32) -> (usize, f32) {
        let scaled = c.clamp(0.0, 1.0) * (self.size - 1) as f32;
        let base = (scaled.floor() as usize).min(self.size - 2);
        (base, scaled - base as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_passthrough() {
        let lut = CubeLut::identity(17);
        let out = lut.apply([0.5, 0.3, 0.8]);
        assert_abs_diff_eq!(out[0], 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(out[1], 0.3, epsilon = 1e-5);
        assert_abs_diff_eq!(out[2], 0.8, epsilon = 1e-5);
    }

    #[test]
    fn file_order_is_red_fastest() {
        let lut = CubeLut::identity(3);
        assert_eq!(lut.data[1], [0.5, 0.0, 0.0]);
        assert_eq!(lut.data[3], [0.0, 0.5, 0.0]);
        assert_eq!(lut.data[9], [0.0, 0.0, 0.5]);
        assert_eq!(lut.node(2, 0, 0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn corners_and_clamping() {
        let lut = CubeLut::identity(33);
        assert_eq!(lut.apply([1.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
        assert_eq!(lut.apply([2.0, -1.0, 0.0]), [1.0, 0.0, 0.0]);
        let white = lut.apply([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(white[2], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn trilinear_blends_cell_corners() {
        // Each node stores its blue index in red and its red index in blue.
        let data = (0..27).map(|i| [(i / 9) as f32, 0.0, (i % 3) as f32]).collect();
        let lut = CubeLut::from_data(data, 3).unwrap();
        let out = lut.apply([0.25, 0.9, 0.6]);
        assert_abs_diff_eq!(out[0], 1.2, epsilon = 1e-5);
        assert_abs_diff_eq!(out[1], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(out[2], 0.5, epsilon = 1e-5);
    }

    #[test]
    fn nearest_snaps_to_node() {
        let lut = CubeLut::identity(3).with_interpolation(Interpolation::Nearest);
        assert_eq!(lut.apply([0.3, 0.7, 0.1]), [0.5, 0.5, 0.0]);
    }

    #[test]
    fn from_data_checks_count() {
        let data = vec![[0.5, 0.5, 0.5]; 8];
        let lut = CubeLut::from_data(data, 2).unwrap();
        for c in lut.apply([0.2, 0.9, 0.4]) {
            assert_abs_diff_eq!(c, 0.5, epsilon = 1e-6);
        }
        assert!(CubeLut::from_data(vec![[0.0; 3]; 7], 2).is_err());
    }

    #[test]
    fn degenerate_sizes() {
        let single = CubeLut::from_data(vec![[0.25, 0.5, 0.75]], 1).unwrap();
        assert_eq!(single.apply([0.9, 0.1, 0.3]), [0.25, 0.5, 0.75]);
        let empty = CubeLut::from_data(Vec::new(), 0).unwrap();
        assert_eq!(empty.apply([0.9, 0.1, 0.3]), [0.9, 0.1, 0.3]);
    }
}
