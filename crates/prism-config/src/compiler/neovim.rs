//! Neovim: a Lua module returning one table.

use std::fmt::Write;

use super::comment_name;
use crate::palette::{ResolvedPalette, ThemeMetadata, ANSI_NAMES};

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> String {
    let mut out = format!(
        "-- Neovim colors for \"{}\", generated by prism\nreturn {{\n",
        comment_name(meta)
    );

    let fields = [
        ("backgroundColor", p.background),
        ("foregroundColor", p.foreground),
        ("cursorColor", p.cursor),
        ("selectionColor", p.selection),
        ("accentColor", p.accent),
        ("borderColor", p.border),
    ];
    for (key, color) in fields {
        let _ = writeln!(out, "  {key} = \"{color}\",");
    }

    out.push_str("  colors = {\n");
    for (i, color) in p.ansi.iter().enumerate() {
        let prefix = if i < 8 { "" } else { "bright " };
        let _ = writeln!(out, "    \"{color}\", -- {prefix}{}", ANSI_NAMES[i % 8]);
    }
    out.push_str("  },\n}\n");
    out
}
