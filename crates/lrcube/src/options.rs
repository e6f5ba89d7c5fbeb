//! Conversion options.
//!
//! Options can be built in code or loaded from YAML:
//!
//! ```yaml
//! cube_size: 17
//! interpolation: nearest
//! title: Film look
//! parallel: false
//! ```
//!
//! Every key is optional.

use std::path::Path;

use lrcube_lut::{DEFAULT_TITLE, Interpolation};
use serde::{Deserialize, Serialize};

use crate::{ConvertError, ConvertResult};

/// Grid size used when none is given.
pub const DEFAULT_CUBE_SIZE: usize = 33;

/// Smallest accepted grid size.
pub const MIN_CUBE_SIZE: usize = 2;

/// Largest accepted grid size.
pub const MAX_CUBE_SIZE: usize = 129;

/// Settings for LUT generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Nodes per axis of the baked cube.
    pub cube_size: usize,
    /// Interpolation the realtime filter should use.
    pub interpolation: Interpolation,
    /// Text of the leading `#` comment line.
    pub title: String,
    /// Build cube planes on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            cube_size: DEFAULT_CUBE_SIZE,
            interpolation: Interpolation::default(),
            title: DEFAULT_TITLE.to_string(),
            parallel: true,
        }
    }
}

impl ConvertOptions {
    /// Loads options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConvertError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads options from a YAML string and validates them.
    pub fn from_yaml_str(yaml: &str) -> ConvertResult<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Sets the cube size.
    pub fn with_cube_size(mut self, size: usize) -> Self {
        self.cube_size = size;
        self
    }

    /// Sets the interpolation method.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enables or disables parallel cube building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks every option against its accepted range.
    pub fn validate(&self) -> ConvertResult<()> {
        if !(MIN_CUBE_SIZE..=MAX_CUBE_SIZE).contains(&self.cube_size) {
            return Err(ConvertError::InvalidOption {
                name: "cube_size",
                reason: format!(
                    "{} is outside {MIN_CUBE_SIZE}..={MAX_CUBE_SIZE}",
                    self.cube_size
                ),
            });
        }
        if self.title.contains(['\n', '\r']) {
            return Err(ConvertError::InvalidOption {
                name: "title",
                reason: "must be a single line".into(),
            });
        }
        Ok(())
    }
}
