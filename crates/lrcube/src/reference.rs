//! Reference to a stored LUT in the form the realtime filter accepts.

use std::fmt;
use std::path::PathBuf;

use lrcube_lut::Interpolation;
use serde::{Deserialize, Serialize};

/// Prefix of an encoded LUT filter name.
pub const FILTER_PREFIX: &str = "lut3d:";

/// A stored `.cube` file plus the interpolation to sample it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LutReference {
    /// Where the LUT was written.
    pub path: PathBuf,
    /// Sampling mode for the filter.
    pub interpolation: Interpolation,
}

impl LutReference {
    /// Creates a reference.
    pub fn new(path: impl Into<PathBuf>, interpolation: Interpolation) -> Self {
        Self {
            path: path.into(),
            interpolation,
        }
    }

    /// Encoded filter name, `lut3d:<path>?interp=<mode>`.
    pub fn filter_name(&self) -> String {
        format!(
            "{FILTER_PREFIX}{}?interp={}",
            self.path.display(),
            self.interpolation
        )
    }

    /// Decodes a filter name produced by [`LutReference::filter_name`].
    /// A missing `interp` query means trilinear.
    pub fn parse_filter_name(name: &str) -> Option<Self> {
        let rest = name.strip_prefix(FILTER_PREFIX)?;
        let (path, interpolation) = match rest.rsplit_once("?interp=") {
            Some((path, mode)) => (path, mode.parse().ok()?),
            None => (rest, Interpolation::default()),
        };
        (!path.is_empty()).then(|| Self::new(path, interpolation))
    }
}

impl fmt::Display for LutReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filter_name())
    }
}
