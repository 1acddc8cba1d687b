//! btop: INI-like `theme[key]="#rrggbb"` lines.

use prism_common::Color;
use std::fmt::Write;

use super::comment_name;
use crate::palette::{ResolvedPalette, ThemeMetadata};

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> String {
    let mut out = format!("# btop theme for \"{}\", generated by prism\n\n", comment_name(meta));

    let entries: &[(&str, Color)] = &[
        ("main_bg", p.background),
        ("main_fg", p.foreground),
        ("title", p.foreground),
        ("hi_fg", p.accent),
        ("selected_bg", p.selection),
        ("selected_fg", p.foreground),
        ("inactive_fg", p.bright_black()),
        ("graph_text", p.foreground),
        ("meter_bg", p.selection),
        ("proc_misc", p.cyan()),
        ("cpu_box", p.border),
        ("mem_box", p.border),
        ("net_box", p.border),
        ("proc_box", p.border),
        ("div_line", p.border),
        ("temp_start", p.green()),
        ("temp_mid", p.yellow()),
        ("temp_end", p.red()),
        ("cpu_start", p.green()),
        ("cpu_mid", p.yellow()),
        ("cpu_end", p.red()),
        ("free_start", p.green()),
        ("free_mid", p.cyan()),
        ("free_end", p.blue()),
        ("used_start", p.yellow()),
        ("used_mid", p.magenta()),
        ("used_end", p.red()),
        ("download_start", p.blue()),
        ("download_mid", p.cyan()),
        ("download_end", p.accent),
        ("upload_start", p.magenta()),
        ("upload_mid", p.red()),
        ("upload_end", p.yellow()),
    ];

    for (key, color) in entries {
        let _ = writeln!(out, "theme[{key}]=\"{color}\"");
    }
    out
}
