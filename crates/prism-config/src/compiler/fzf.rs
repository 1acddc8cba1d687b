//! fzf: a POSIX shell snippet extending `FZF_DEFAULT_OPTS`.

use prism_common::Color;

use super::comment_name;
use crate::palette::{ResolvedPalette, ThemeMetadata};

/// Pairs grouped one `--color=` flag per line.
fn color_groups(p: &ResolvedPalette) -> [Vec<(&'static str, Color)>; 4] {
    [
        vec![
            ("bg", p.background),
            ("bg+", p.selection),
            ("fg", p.foreground),
            ("fg+", p.foreground),
        ],
        vec![
            ("hl", p.accent),
            ("hl+", p.accent),
            ("info", p.cyan()),
            ("marker", p.green()),
        ],
        vec![
            ("prompt", p.blue()),
            ("spinner", p.magenta()),
            ("pointer", p.cursor),
            ("header", p.yellow()),
        ],
        vec![("border", p.border), ("gutter", p.background)],
    ]
}

pub(super) fn emit(meta: &ThemeMetadata, p: &ResolvedPalette) -> String {
    let lines: Vec<String> = color_groups(p)
        .iter()
        .map(|group| {
            let pairs: Vec<String> = group.iter().map(|(k, c)| format!("{k}:{c}")).collect();
            format!("  --color={}", pairs.join(","))
        })
        .collect();

    format!(
        "# fzf colors for \"{}\", generated by prism\n\
         export FZF_DEFAULT_OPTS=\"$FZF_DEFAULT_OPTS \\\n{}\"\n",
        comment_name(meta),
        lines.join(" \\\n")
    )
}
