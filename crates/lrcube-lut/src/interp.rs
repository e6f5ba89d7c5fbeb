//! Interpolation methods for LUT evaluation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interpolation method the realtime filter uses when sampling a LUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Nearest grid node (no interpolation).
    Nearest,

    /// Trilinear interpolation between the 8 surrounding nodes.
    #[default]
    Trilinear,
}

impl Interpolation {
    /// Lowercase name, as used in filter references and config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Trilinear => "trilinear",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "trilinear" | "linear" => Ok(Self::Trilinear),
            other => Err(format!("unknown interpolation: {other}")),
        }
    }
}
