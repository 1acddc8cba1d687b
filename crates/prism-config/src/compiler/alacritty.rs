//! Alacritty: nested TOML color tables.

use prism_common::ValidationError;
use serde::Serialize;

use super::{comment_name, serializer_error, AnsiTable};
use crate::palette::{ResolvedPalette, ThemeMetadata};

#[derive(Serialize)]
struct AlacrittyFile {
    colors: Colors,
}

#[derive(Serialize)]
struct Colors {
    primary: Primary,
    cursor: Pair,
    selection: Pair,
    normal: AnsiTable,
    bright: AnsiTable,
}

#[derive(Serialize)]
struct Primary {
    background: String,
    foreground: String,
}

/// Alacritty's `{ text, cursor }` / `{ text, background }` shape.
#[derive(Serialize)]
struct Pair {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<String>,
}

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> Result<String, ValidationError> {
    let file = AlacrittyFile {
        colors: Colors {
            primary: Primary {
                background: p.background.to_hex(),
                foreground: p.foreground.to_hex(),
            },
            cursor: Pair {
                text: p.background.to_hex(),
                cursor: Some(p.cursor.to_hex()),
                background: None,
            },
            selection: Pair {
                text: p.foreground.to_hex(),
                cursor: None,
                background: Some(p.selection.to_hex()),
            },
            normal: AnsiTable::from_colors(p.normal()),
            bright: AnsiTable::from_colors(p.bright()),
        },
    };

    let body = toml::to_string_pretty(&file).map_err(|e| serializer_error("alacritty", e))?;
    Ok(format!(
        "# Alacritty colors for \"{}\", generated by prism\n\n{body}",
        comment_name(meta)
    ))
}
