//! Theme metadata and the fixed 22-slot color palette.

use serde::{Deserialize, Serialize};

/// Names of the eight base ANSI colors, in terminal index order.
pub const ANSI_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Every palette slot as it is spelled in `theme.json`, semantic roles first,
/// then the 16 ANSI colors in index order.
pub const SLOT_NAMES: [&str; 22] = [
    "background",
    "foreground",
    "cursor",
    "selection",
    "accent",
    "border",
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "brightBlack",
    "brightRed",
    "brightGreen",
    "brightYellow",
    "brightBlue",
    "brightMagenta",
    "brightCyan",
    "brightWhite",
];

/// A complete theme definition: identity plus palette.
///
/// This is what `theme.json` inside every theme directory holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    pub colors: ColorPalette,
}

/// The 22 color slots of a theme.
///
/// Values may be any accepted color string; stored palettes are always
/// normalized to `#rrggbb`. An empty string counts as a missing slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub background: String,
    pub foreground: String,
    pub cursor: String,
    pub selection: String,
    pub accent: String,
    pub border: String,
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
    pub bright_black: String,
    pub bright_red: String,
    pub bright_green: String,
    pub bright_yellow: String,
    pub bright_blue: String,
    pub bright_magenta: String,
    pub bright_cyan: String,
    pub bright_white: String,
}

impl ColorPalette {
    /// `(slot name, value)` pairs in [`SLOT_NAMES`] order.
    pub fn slots(&self) -> [(&'static str, &str); 22] {
        let values = [
            &self.background,
            &self.foreground,
            &self.cursor,
            &self.selection,
            &self.accent,
            &self.border,
            &self.black,
            &self.red,
            &self.green,
            &self.yellow,
            &self.blue,
            &self.magenta,
            &self.cyan,
            &self.white,
            &self.bright_black,
            &self.bright_red,
            &self.bright_green,
            &self.bright_yellow,
            &self.bright_blue,
            &self.bright_magenta,
            &self.bright_cyan,
            &self.bright_white,
        ];
        std::array::from_fn(|i| (SLOT_NAMES[i], values[i].as_str()))
    }

    /// Mutable access to every slot in [`SLOT_NAMES`] order.
    pub fn slots_mut(&mut self) -> [(&'static str, &mut String); 22] {
        let values: [&mut String; 22] = [
            &mut self.background,
            &mut self.foreground,
            &mut self.cursor,
            &mut self.selection,
            &mut self.accent,
            &mut self.border,
            &mut self.black,
            &mut self.red,
            &mut self.green,
            &mut self.yellow,
            &mut self.blue,
            &mut self.magenta,
            &mut self.cyan,
            &mut self.white,
            &mut self.bright_black,
            &mut self.bright_red,
            &mut self.bright_green,
            &mut self.bright_yellow,
            &mut self.bright_blue,
            &mut self.bright_magenta,
            &mut self.bright_cyan,
            &mut self.bright_white,
        ];
        let mut i = 0;
        values.map(|v| {
            let name = SLOT_NAMES[i];
            i += 1;
            (name, v)
        })
    }

    /// Mutable access to a single slot by its `theme.json` name.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        self.slots_mut()
            .into_iter()
            .find(|(slot, _)| *slot == name)
            .map(|(_, v)| v)
    }
}
