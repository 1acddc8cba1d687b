//! Starship: prompt segments with derived style strings.
//!
//! Segment styles are composed from the palette (`bold fg:#… bg:#…`), and two
//! extra shades are blended from it: `muted` for low-priority segments and
//! `surface` as a segment background.

use prism_common::{Color, ValidationError};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{comment_name, serializer_error};
use crate::palette::{ResolvedPalette, ThemeMetadata};

pub(super) const PALETTE_NAME: &str = "prism";

const PROMPT_FORMAT: &str = "$username$hostname$directory$git_branch$git_status$cmd_duration$time$line_break$character";

// Scalars before tables so the serializer keeps top-level keys at the top.
#[derive(Serialize)]
struct StarshipFile {
    format: &'static str,
    palette: &'static str,
    character: Character,
    username: Username,
    hostname: Segment,
    directory: Directory,
    git_branch: Segment,
    git_status: Segment,
    cmd_duration: Segment,
    time: Time,
    palettes: BTreeMap<&'static str, BTreeMap<&'static str, String>>,
}

#[derive(Serialize)]
struct Character {
    success_symbol: String,
    error_symbol: String,
    vimcmd_symbol: String,
}

#[derive(Serialize)]
struct Username {
    style_user: String,
    style_root: String,
}

#[derive(Serialize)]
struct Segment {
    style: String,
}

#[derive(Serialize)]
struct Directory {
    style: String,
    read_only_style: String,
}

#[derive(Serialize)]
struct Time {
    disabled: bool,
    style: String,
}

/// Build a starship style string from optional modifiers and colors.
fn style(bold: bool, fg: Color, bg: Option<Color>) -> String {
    let mut parts = Vec::with_capacity(3);
    if bold {
        parts.push("bold".to_string());
    }
    parts.push(format!("fg:{fg}"));
    if let Some(bg) = bg {
        parts.push(format!("bg:{bg}"));
    }
    parts.join(" ")
}

fn symbol(glyph: &str, fg: Color) -> String {
    format!("[{glyph}]({})", style(true, fg, None))
}

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> Result<String, ValidationError> {
    let muted = p.foreground.mix(p.background, 0.45);
    let surface = p.background.mix(p.selection, 0.6);

    let palette: BTreeMap<&'static str, String> = [
        ("background", p.background),
        ("foreground", p.foreground),
        ("accent", p.accent),
        ("muted", muted),
        ("surface", surface),
        ("success", p.green()),
        ("error", p.red()),
        ("warning", p.yellow()),
    ]
    .into_iter()
    .map(|(k, c)| (k, c.to_hex()))
    .collect();

    let file = StarshipFile {
        format: PROMPT_FORMAT,
        palette: PALETTE_NAME,
        character: Character {
            success_symbol: symbol("❯", p.green()),
            error_symbol: symbol("❯", p.red()),
            vimcmd_symbol: symbol("❮", p.magenta()),
        },
        username: Username {
            style_user: style(true, p.blue(), None),
            style_root: style(true, p.red(), None),
        },
        hostname: Segment {
            style: style(false, p.cyan(), None),
        },
        directory: Directory {
            style: style(true, p.accent, None),
            read_only_style: style(false, p.red(), None),
        },
        git_branch: Segment {
            style: style(false, p.magenta(), Some(surface)),
        },
        git_status: Segment {
            style: style(false, p.yellow(), Some(surface)),
        },
        cmd_duration: Segment {
            style: style(false, muted, None),
        },
        time: Time {
            disabled: false,
            style: style(false, p.bright_black(), None),
        },
        palettes: BTreeMap::from([(PALETTE_NAME, palette)]),
    };

    let body = toml::to_string_pretty(&file).map_err(|e| serializer_error("starship", e))?;
    Ok(format!(
        "# Starship prompt for \"{}\", generated by prism\n\n{body}",
        comment_name(meta)
    ))
}
