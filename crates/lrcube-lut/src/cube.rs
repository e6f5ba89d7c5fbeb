//! `.cube` text codec.
//!
//! Output follows the layout the realtime filter expects:
//!
//! ```text
//! # Generated from XMP
//! LUT_3D_SIZE 33
//! 0.000000 0.000000 0.000000
//! 0.031250 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! Line 1 is a `#` comment carrying the title, line 2 the size, then
//! exactly `size^3` data lines, red fastest and blue slowest. Lines are
//! joined with `\n` and there is no trailing newline.
//!
//! The reader is more lenient: blank lines, extra comments, `TITLE` and
//! unit `DOMAIN_MIN`/`DOMAIN_MAX` lines are accepted.
//!
//! # Example
//!
//! ```rust
//! use lrcube_lut::{cube, CubeLut};
//!
//! let text = CubeLut::identity(2).to_cube_string();
//! let lut = cube::parse_cube(&text).unwrap();
//! assert_eq!(lut.size, 2);
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::{CubeLut, LutError, LutResult, MAX_CUBE_SIZE};

/// Title used when none is set.
pub const DEFAULT_TITLE: &str = "Generated from XMP";

/// Bytes in one data line including its separator: `d.dddddd` x3, two
/// spaces, one newline.
const DATA_LINE_BYTES: usize = 27;

impl CubeLut {
    /// Renders the LUT as `.cube` text.
    ///
    /// The buffer is sized up front for the header plus `size^3` data lines.
    pub fn to_cube_string(&self) -> String {
        let header = format!("# {}\nLUT_3D_SIZE {}", self.title, self.size);
        let mut out = String::with_capacity(header.len() + self.data.len() * DATA_LINE_BYTES);
        out.push_str(&header);
        for rgb in &self.data {
            out.push('\n');
            push_line(&mut out, *rgb);
        }
        out
    }

    /// Writes the LUT to `path` as `.cube` text.
    pub fn write_cube<P: AsRef<Path>>(&self, path: P) -> LutResult<()> {
        fs::write(path.as_ref(), self.to_cube_string())?;
        debug!(path = %path.as_ref().display(), size = self.size, "wrote cube");
        Ok(())
    }
}

/// Formats one node as a space-separated 6-decimal line (no newline).
pub fn format_line(rgb: [f32; 3]) -> String {
    let mut s = String::with_capacity(DATA_LINE_BYTES);
    push_line(&mut s, rgb);
    s
}

fn push_line(out: &mut String, rgb: [f32; 3]) {
    // `+ 0.0` folds -0.0 into 0.0 so it never prints with a sign.
    let _ = write!(
        out,
        "{:.6} {:.6} {:.6}",
        rgb[0] + 0.0,
        rgb[1] + 0.0,
        rgb[2] + 0.0
    );
}

/// Reads a 3D LUT from a `.cube` file.
pub fn read_cube<P: AsRef<Path>>(path: P) -> LutResult<CubeLut> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_cube(&text)
}

/// Parses `.cube` text.
///
/// The first `#` comment before any keyword becomes the title.
pub fn parse_cube(text: &str) -> LutResult<CubeLut> {
    let mut size: Option<usize> = None;
    let mut title: Option<String> = None;
    let mut data: Vec<[f32; 3]> = Vec::new();
    let line_count = text.lines().count();

    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if title.is_none() && size.is_none() && data.is_empty() {
                title = Some(comment.trim().to_string());
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            title = Some(rest.trim().trim_matches('"').to_string());
        } else if line.starts_with("LUT_3D_SIZE") {
            let n = parse_size(line, lineno)?;
            // A header can claim far more entries than the text holds.
            data.reserve((n * n * n).min(line_count - lineno));
            size = Some(n);
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::parse(lineno, "expected 3D LUT, found 1D"));
        } else if line.starts_with("DOMAIN_MIN") {
            check_domain(line, lineno, 0.0)?;
        } else if line.starts_with("DOMAIN_MAX") {
            check_domain(line, lineno, 1.0)?;
        } else {
            data.push(parse_rgb(line, lineno)?);
        }
    }

    let size = size.ok_or_else(|| LutError::parse(0, "missing LUT_3D_SIZE"))?;
    let expected = size * size * size;
    if data.len() != expected {
        return Err(LutError::parse(
            0,
            format!("expected {} values, found {}", expected, data.len()),
        ));
    }

    debug!(size, entries = expected, "parsed cube");
    let lut = CubeLut::from_data(data, size)?;
    Ok(match title {
        Some(t) => lut.with_title(t),
        None => lut,
    })
}

fn parse_size(line: &str, lineno: usize) -> LutResult<usize> {
    let value = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| LutError::parse(lineno, "invalid size line"))?;
    let n: usize = value
        .parse()
        .map_err(|_| LutError::parse(lineno, format!("invalid size value: {value}")))?;
    if n > MAX_CUBE_SIZE {
        return Err(LutError::InvalidSize(format!(
            "size {n} exceeds maximum {MAX_CUBE_SIZE}"
        )));
    }
    Ok(n)
}

fn check_domain(line: &str, lineno: usize, expected: f32) -> LutResult<()> {
    let values: Vec<f32> = line
        .split_whitespace()
        .skip(1)
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| LutError::parse(lineno, "invalid domain value"))?;
    if values.len() != 3 {
        return Err(LutError::parse(lineno, "invalid domain line"));
    }
    if values.iter().any(|v| (*v - expected).abs() > f32::EPSILON) {
        warn!(line = lineno, "non-unit domain ignored");
    }
    Ok(())
}

fn parse_rgb(line: &str, lineno: usize) -> LutResult<[f32; 3]> {
    let mut parts = line.split_whitespace();
    let mut rgb = [0.0f32; 3];
    for (slot, channel) in rgb.iter_mut().zip(["R", "G", "B"]) {
        let token = parts
            .next()
            .ok_or_else(|| LutError::parse(lineno, format!("invalid RGB line: {line}")))?;
        *slot = token
            .parse()
            .map_err(|_| LutError::parse(lineno, format!("invalid {channel} value: {token}")))?;
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn header_and_line_count() {
        let text = CubeLut::identity(17).to_cube_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4913 + 2);
        assert_eq!(lines[0], "# Generated from XMP");
        assert_eq!(lines[1], "LUT_3D_SIZE 17");
        assert_eq!(lines[2], "0.000000 0.000000 0.000000");
        assert_eq!(lines[3], "0.062500 0.000000 0.000000");
        assert_eq!(lines[4914], "1.000000 1.000000 1.000000");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn capacity_is_exact_for_unit_values() {
        let lut = CubeLut::identity(9);
        let text = lut.to_cube_string();
        let header = "# Generated from XMP\nLUT_3D_SIZE 9".len();
        assert_eq!(text.len(), header + 729 * DATA_LINE_BYTES);
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_line([-0.0, 0.5, 1.0]), "0.000000 0.500000 1.000000");
    }

    #[test]
    fn parse_with_title_and_domain() {
        let text = "# Test LUT\nTITLE \"Warm Grade\"\nLUT_3D_SIZE 2\nDOMAIN_MIN 0.0 0.0 0.0\n\
                    DOMAIN_MAX 1.0 1.0 1.0\n\n\
                    0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
        let lut = parse_cube(text).unwrap();
        assert_eq!(lut.size, 2);
        assert_eq!(lut.title, "Warm Grade");
        assert_eq!(lut.node(1, 0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(lut.node(0, 0, 1), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.cube");
        let lut = CubeLut::identity(5).with_title("Round Trip");
        lut.write_cube(&path).unwrap();

        let back = read_cube(&path).unwrap();
        assert_eq!(back.title, "Round Trip");
        assert_eq!(back.size, 5);
        for (a, b) in lut.data.iter().zip(&back.data) {
            for i in 0..3 {
                assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_cube("LUT_3D_SIZE 2\n0 0 0\n"),
            Err(LutError::ParseError { .. })
        ));
        assert!(parse_cube("0 0 0\n").is_err());
        assert!(parse_cube("LUT_1D_SIZE 4\n").is_err());
        let err = parse_cube("# t\nLUT_3D_SIZE 1\n0 x 0").unwrap_err();
        assert_eq!(err.to_string(), "parse error at line 3: invalid G value: x");
    }

    #[test]
    fn oversized_header_with_short_body() {
        let err = parse_cube("LUT_3D_SIZE 256
0 0 0
1 1 1").unwrap_err();
        assert!(matches!(err, LutError::ParseError { .. }));
        assert!(err.to_string().contains("16777216"), "{err}");
    }
}
