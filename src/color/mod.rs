//! Color resolution for theming the search UI
//!
//! Turns any CSS color value into the `"r, g, b"` text used to build
//! `rgba(var(...), alpha)` style rules.

mod oracle;

pub use oracle::{RgbaColor, StrokeStyleOracle, DEFAULT_STROKE_STYLE};

use crate::utils::ColorError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Six hex digits with an optional leading `#`
static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$")
        .expect("HEX_COLOR_RE: hardcoded regex is valid")
});

/// 8-bit RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Parse a `#rrggbb` / `rrggbb` string, case-insensitive
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let captures = HEX_COLOR_RE.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&captures[i], 16).ok();
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Resolve a CSS color to its RGB components.
///
/// Fails when the canonical form is not 6-hex-digit, which is the case for
/// any translucent color.
pub fn resolve_rgb(color: &str) -> Result<Rgb, ColorError> {
    let mut oracle = StrokeStyleOracle::new();
    oracle.set_stroke_style(color);
    let canonical = oracle.stroke_style();
    hex_to_rgb(canonical).ok_or_else(|| ColorError::UnresolvedColor {
        input: color.to_string(),
        canonical: canonical.to_string(),
    })
}

/// Resolve a CSS color to `"r, g, b"` text
pub fn get_rgb(color: &str) -> Result<String, ColorError> {
    resolve_rgb(color).map(|rgb| rgb.to_string())
}

/// Like [`get_rgb`], falling back to `fallback` when `color` can't be resolved
pub fn resolve_color_or(color: &str, fallback: &str) -> Result<String, ColorError> {
    get_rgb(color).or_else(|err| {
        log::warn!("{}, using fallback color '{}'", err, fallback);
        get_rgb(fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_rgb_hex() {
        assert_eq!(get_rgb("#FF0000").unwrap(), "255, 0, 0");
        assert_eq!(get_rgb("#00ff00").unwrap(), "0, 255, 0");
    }

    #[test]
    fn test_get_rgb_named_and_functional() {
        assert_eq!(get_rgb("navy").unwrap(), "0, 0, 128");
        assert_eq!(get_rgb("rgb(12, 34, 56)").unwrap(), "12, 34, 56");
    }

    #[test]
    fn test_translucent_color_is_unresolved() {
        let err = get_rgb("rgba(255, 0, 0, 0.5)").unwrap_err();
        assert_eq!(
            err,
            ColorError::UnresolvedColor {
                input: "rgba(255, 0, 0, 0.5)".to_string(),
                canonical: "rgba(255, 0, 0, 0.502)".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_color_reads_back_default() {
        // Same as a drawing context: the assignment is dropped
        assert_eq!(get_rgb("definitely not a color").unwrap(), "0, 0, 0");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#aBcDeF"), Some(Rgb { r: 171, g: 205, b: 239 }));
        assert_eq!(hex_to_rgb("102030"), Some(Rgb { r: 16, g: 32, b: 48 }));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("rgb(1, 2, 3)"), None);
    }

    #[test]
    fn test_resolve_color_or() {
        assert_eq!(resolve_color_or("transparent", "#123456").unwrap(), "18, 52, 86");
        assert_eq!(resolve_color_or("teal", "#123456").unwrap(), "0, 128, 128");
        assert!(resolve_color_or("transparent", "transparent").is_err());
    }
}
