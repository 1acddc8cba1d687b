//! VS Code: a flat `workbench.colorCustomizations` object.

use prism_common::{Color, ValidationError};
use std::collections::BTreeMap;

use super::serializer_error;
use crate::palette::ResolvedPalette;

/// Terminal ANSI keys in index order.
pub(super) const TERMINAL_ANSI_KEYS: [&str; 16] = [
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
];

pub(super) fn emit(p: &ResolvedPalette) -> Result<String, ValidationError> {
    let roles: &[(&str, Color)] = &[
        ("editor.background", p.background),
        ("editor.foreground", p.foreground),
        ("editorCursor.foreground", p.cursor),
        ("editor.selectionBackground", p.selection),
        ("focusBorder", p.accent),
        ("panel.border", p.border),
        ("activityBar.background", p.background),
        ("activityBar.foreground", p.foreground),
        ("activityBarBadge.background", p.accent),
        ("activityBarBadge.foreground", p.background),
        ("sideBar.background", p.background),
        ("sideBar.foreground", p.foreground),
        ("sideBar.border", p.border),
        ("statusBar.background", p.background),
        ("statusBar.foreground", p.foreground),
        ("titleBar.activeBackground", p.background),
        ("titleBar.activeForeground", p.foreground),
        ("button.background", p.accent),
        ("textLink.foreground", p.accent),
        ("terminal.background", p.background),
        ("terminal.foreground", p.foreground),
        ("terminalCursor.foreground", p.cursor),
    ];

    let mut map: BTreeMap<&str, String> = roles.iter().map(|(k, c)| (*k, c.to_hex())).collect();
    map.insert("terminal.selectionBackground", p.selection.to_hex());
    map.insert("editorGroup.border", p.border.to_hex());
    for (key, color) in TERMINAL_ANSI_KEYS.iter().zip(p.ansi.iter()) {
        map.insert(*key, color.to_hex());
    }

    let mut body = serde_json::to_string_pretty(&map).map_err(|e| serializer_error("vscode", e))?;
    body.push('\n');
    Ok(body)
}
