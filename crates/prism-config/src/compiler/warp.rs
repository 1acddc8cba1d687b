//! Warp: YAML with nested `terminal_colors`.

use prism_common::ValidationError;
use serde::Serialize;

use super::{comment_name, serializer_error, AnsiTable};
use crate::palette::{ResolvedPalette, ThemeMetadata};

#[derive(Serialize)]
struct WarpTheme {
    name: String,
    accent: String,
    background: String,
    foreground: String,
    details: &'static str,
    terminal_colors: TerminalColors,
}

#[derive(Serialize)]
struct TerminalColors {
    normal: AnsiTable,
    bright: AnsiTable,
}

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> Result<String, ValidationError> {
    let theme = WarpTheme {
        name: comment_name(meta),
        accent: p.accent.to_hex(),
        background: p.background.to_hex(),
        foreground: p.foreground.to_hex(),
        // Warp derives its UI chrome from this: "darker" for dark backgrounds.
        details: if p.is_light() { "lighter" } else { "darker" },
        terminal_colors: TerminalColors {
            normal: AnsiTable::from_colors(p.normal()),
            bright: AnsiTable::from_colors(p.bright()),
        },
    };

    serde_yaml::to_string(&theme).map_err(|e| serializer_error("warp", e))
}
