//! Hyper: a CommonJS module exporting one object literal.
//!
//! The literal is emitted as JSON, which is also a valid JavaScript
//! expression, so the module body can be checked with any JSON parser.

use prism_common::ValidationError;
use serde::Serialize;

use super::{comment_name, serializer_error};
use crate::palette::{ResolvedPalette, ThemeMetadata};

pub(super) const EXPORT_PREFIX: &str = "module.exports = ";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HyperConfig {
    background_color: String,
    foreground_color: String,
    cursor_color: String,
    cursor_accent_color: String,
    selection_color: String,
    border_color: String,
    /// ANSI 0-15.
    colors: Vec<String>,
}

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> Result<String, ValidationError> {
    let config = HyperConfig {
        background_color: p.background.to_hex(),
        foreground_color: p.foreground.to_hex(),
        cursor_color: p.cursor.to_hex(),
        cursor_accent_color: p.background.to_hex(),
        selection_color: p.selection.to_hex(),
        border_color: p.border.to_hex(),
        colors: p.ansi.iter().map(|c| c.to_hex()).collect(),
    };

    let body = serde_json::to_string_pretty(&config).map_err(|e| serializer_error("hyper", e))?;
    Ok(format!(
        "// Hyper colors for \"{}\", generated by prism\n{EXPORT_PREFIX}{body};\n",
        comment_name(meta)
    ))
}
