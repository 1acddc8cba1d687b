//! Color parsing and normalization.
//!
//! Supports `#RRGGBB`, `#RGB`, `rgb(r, g, b)`, `hsl(h, s%, l%)` and the bare
//! triplet forms of the latter two. A bare triplet carrying `%` signs is
//! read as HSL, otherwise as RGB.

mod parse;


use prism_common::Color;

use parse::{parse_hex, parse_hsl_triplet, parse_rgb_triplet, strip_function};

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RRGGBB` / `#RGB` (e.g. `#1a1b26`, `#f00`)
/// - `rgb(r, g, b)` or `r, g, b` with channels 0-255
/// - `hsl(h, s%, l%)` or `h, s%, l%`
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if s.starts_with('#') {
        return parse_hex(s);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(inner) = strip_function(&lower, "rgb") {
        return parse_rgb_triplet(inner);
    }
    if let Some(inner) = strip_function(&lower, "hsl") {
        return parse_hsl_triplet(inner);
    }

    if lower.contains('%') {
        parse_hsl_triplet(&lower)
    } else {
        parse_rgb_triplet(&lower)
    }
}

/// Normalize any accepted color string to lowercase `#rrggbb`.
pub fn normalize_color(s: &str) -> Option<String> {
    parse_color(s).map(|c| c.to_hex())
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_some()
}
