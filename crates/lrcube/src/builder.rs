//! Cube builder: samples the color transform over a uniform RGB grid.
//!
//! Nodes are produced in `.cube` order (blue outermost, red innermost).
//! Each blue plane is independent, so with the `parallel` feature planes
//! are filled on the rayon pool. The result is identical either way.

use lrcube_color::{ColorTransform, ToneCurveCache};
use lrcube_core::DetailedAdjustments;
use lrcube_lut::{CubeLut, DEFAULT_TITLE, Interpolation};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configurable cube builder.
///
/// # Example
///
/// ```rust
/// use lrcube::CubeBuilder;
/// use lrcube_core::DetailedAdjustments;
///
/// let lut = CubeBuilder::new(17).build(&DetailedAdjustments::default());
/// assert_eq!(lut.data.len(), 17 * 17 * 17);
/// ```
#[derive(Debug, Clone)]
pub struct CubeBuilder<'a> {
    size: usize,
    cache: &'a ToneCurveCache,
    parallel: bool,
    title: String,
    interpolation: Interpolation,
}

impl CubeBuilder<'static> {
    /// Builder for a `size^3` grid using the process-wide curve cache.
    pub fn new(size: usize) -> Self {
        CubeBuilder {
            size,
            cache: ToneCurveCache::global(),
            parallel: true,
            title: DEFAULT_TITLE.to_string(),
            interpolation: Interpolation::default(),
        }
    }
}

impl<'a> CubeBuilder<'a> {
    /// Uses `cache` for tone-curve lookups instead of the global one.
    pub fn with_cache<'b>(self, cache: &'b ToneCurveCache) -> CubeBuilder<'b> {
        CubeBuilder {
            size: self.size,
            cache,
            parallel: self.parallel,
            title: self.title,
            interpolation: self.interpolation,
        }
    }

    /// Fills planes in parallel when the `parallel` feature is enabled.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Title for the `#` header line.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Interpolation recorded on the resulting LUT.
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Samples `detailed` at every grid node.
    ///
    /// Always yields exactly `size^3` nodes. A size of 1 samples black only.
    pub fn build(&self, detailed: &DetailedAdjustments) -> CubeLut {
        let size = self.size;
        let plane_len = size * size;
        let mut data = vec![[0.0f32; 3]; plane_len * size];

        debug!(
            size,
            parallel = self.parallel,
            adjustments = %detailed.summary(),
            "building cube"
        );

        if plane_len > 0 {
            let xf = ColorTransform::new(detailed, self.cache);
            let denom = size.saturating_sub(1).max(1) as f64;
            for_each_plane(&mut data, plane_len, self.parallel, |(b, plane)| {
                fill_plane(&xf, plane, size, b, denom)
            });
        }

        debug!(nodes = data.len(), cache = ?self.cache.stats(), "cube built");

        CubeLut {
            data,
            size,
            title: self.title.clone(),
            interpolation: self.interpolation,
        }
    }
}

#[cfg(feature = "parallel")]
fn for_each_plane<F>(data: &mut [[f32; 3]], plane_len: usize, parallel: bool, fill: F)
where
    F: Fn((usize, &mut [[f32; 3]])) + Send + Sync,
{
    if parallel {
        data.par_chunks_mut(plane_len).enumerate().for_each(fill);
    } else {
        data.chunks_mut(plane_len).enumerate().for_each(fill);
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_plane<F>(data: &mut [[f32; 3]], plane_len: usize, _parallel: bool, fill: F)
where
    F: Fn((usize, &mut [[f32; 3]])),
{
    data.chunks_mut(plane_len).enumerate().for_each(fill);
}

// Nodes are computed in f64 and narrowed once, so a neutral transform
// stores the exact grid coordinate.
fn fill_plane(xf: &ColorTransform<'_>, plane: &mut [[f32; 3]], size: usize, b: usize, denom: f64) {
    let bf = b as f64 / denom;
    for g in 0..size {
        let gf = g as f64 / denom;
        for r in 0..size {
            let rgb = xf.apply_f64([r as f64 / denom, gf, bf]);
            plane[g * size + r] = rgb.map(|c| c as f32);
        }
    }
}

/// Builds a `size^3` cube with default settings and the global cache.
pub fn build_cube(detailed: &DetailedAdjustments, size: usize) -> CubeLut {
    CubeBuilder::new(size).build(detailed)
}

/// Builds a cube and renders it as `.cube` text.
pub fn build_cube_content(detailed: &DetailedAdjustments, size: usize) -> String {
    build_cube(detailed, size).to_cube_string()
}
