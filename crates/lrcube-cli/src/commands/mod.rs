//! CLI command implementations

pub mod convert;
pub mod inspect;

use anyhow::{Context, Result};
use lrcube::{FieldSource, XmpDocument, XmpText};
use std::fs;
use std::path::Path;

/// Read preset text from path
pub fn read_preset(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Run `f` over the lenient or the strict field source for `text`
pub fn with_source<R>(
    text: &str,
    strict: bool,
    path: &Path,
    f: impl FnOnce(&dyn FieldSource) -> R,
) -> Result<R> {
    if strict {
        let doc = XmpDocument::parse(text)
            .with_context(|| format!("Not a well-formed preset: {}", path.display()))?;
        Ok(f(&doc))
    } else {
        Ok(f(&XmpText::new(text)))
    }
}
