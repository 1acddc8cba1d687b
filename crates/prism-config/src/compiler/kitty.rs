//! Kitty: one unquoted `key value` pair per line.

use std::fmt::Write;

use super::comment_name;
use crate::palette::{ResolvedPalette, ThemeMetadata};

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> String {
    let mut out = format!("# Kitty colors for \"{}\", generated by prism\n\n", comment_name(meta));

    let basics = [
        ("background", p.background),
        ("foreground", p.foreground),
        ("cursor", p.cursor),
        ("cursor_text_color", p.background),
        ("selection_background", p.selection),
        ("selection_foreground", p.foreground),
        ("url_color", p.accent),
        ("active_border_color", p.accent),
        ("inactive_border_color", p.border),
        ("active_tab_background", p.accent),
        ("active_tab_foreground", p.background),
        ("inactive_tab_background", p.selection),
        ("inactive_tab_foreground", p.foreground),
    ];
    for (key, color) in basics {
        let _ = writeln!(out, "{key} {color}");
    }

    out.push('\n');
    for (i, color) in p.ansi.iter().enumerate() {
        let _ = writeln!(out, "color{i} {color}");
    }
    out
}
