//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex, rgb and hsl string formats
//! into [`Color`] values. Not part of the public API.

use prism_common::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Three integer channels separated by commas or whitespace.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3})(?:\s*,\s*|\s+)(\d{1,3})(?:\s*,\s*|\s+)(\d{1,3})$").unwrap()
});

/// Hue (optionally suffixed `deg`), saturation %, lightness %.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(-?\d+(?:\.\d+)?)(?:deg)?(?:\s*,\s*|\s+)(\d+(?:\.\d+)?)%(?:\s*,\s*|\s+)(\d+(?:\.\d+)?)%$",
    )
    .unwrap()
});

/// Strip a `name( ... )` wrapper, returning the trimmed inner text.
pub(super) fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(name)?;
    let inner = rest.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.trim())
}

/// Parse a hex color string (#RGB or #RRGGBB).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    Color::from_hex(s)
}

/// Parse the inside of an `rgb(...)` or a bare `r, g, b` triplet.
pub(super) fn parse_rgb_triplet(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some(Color::from_rgb(r, g, b))
}

/// Parse the inside of an `hsl(...)` or a bare `h, s%, l%` triplet.
pub(super) fn parse_hsl_triplet(s: &str) -> Option<Color> {
    let caps = HSL_RE.captures(s)?;
    let h: f64 = caps[1].parse().ok()?;
    let sat: f64 = caps[2].parse().ok()?;
    let light: f64 = caps[3].parse().ok()?;
    if sat > 100.0 || light > 100.0 {
        return None;
    }
    Some(Color::from_hsl(h, sat / 100.0, light / 100.0))
}
