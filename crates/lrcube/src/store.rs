//! Persistence of generated LUT text.
//!
//! The conversion core only produces `.cube` text; where it lands is up to
//! a [`LutStore`]. [`DirectoryStore`] covers the common case of a cache or
//! output directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::{ConvertError, ConvertResult};

/// Destination for generated `.cube` text.
pub trait LutStore {
    /// Persists `content` and returns where it was written.
    fn store(&self, content: &str) -> ConvertResult<PathBuf>;
}

impl<T: LutStore + ?Sized> LutStore for &T {
    fn store(&self, content: &str) -> ConvertResult<PathBuf> {
        (**self).store(content)
    }
}

/// Writes each LUT to `<dir>/xmp_<unix-millis>.cube`.
///
/// The directory is created on first write. If the name is already taken
/// (two LUTs in the same millisecond) a counter is appended.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    /// Store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_path(&self) -> PathBuf {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let mut path = self.dir.join(format!("xmp_{millis}.cube"));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("xmp_{millis}_{n}.cube"));
            n += 1;
        }
        path
    }
}

impl LutStore for DirectoryStore {
    fn store(&self, content: &str) -> ConvertResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| ConvertError::Store {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.next_path();
        fs::write(&path, content).map_err(|source| ConvertError::Store {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = content.len(), "LUT written");
        Ok(path)
    }
}
