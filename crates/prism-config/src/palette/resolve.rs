//! Palette resolution: color strings to concrete [`Color`]s.

use prism_common::{Color, ValidationError};

use super::types::{ColorPalette, ThemeMetadata};
use crate::colors::parse_color;

/// A palette whose 22 slots have all been parsed.
///
/// Emitters only ever see this type, so an unresolved slot cannot reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub selection: Color,
    pub accent: Color,
    pub border: Color,
    /// ANSI colors 0-15.
    pub ansi: [Color; 16],
}

impl ResolvedPalette {
    /// ANSI colors 0-7.
    pub fn normal(&self) -> &[Color] {
        &self.ansi[..8]
    }

    /// ANSI colors 8-15.
    pub fn bright(&self) -> &[Color] {
        &self.ansi[8..]
    }

    pub fn black(&self) -> Color {
        self.ansi[0]
    }
    pub fn red(&self) -> Color {
        self.ansi[1]
    }
    pub fn green(&self) -> Color {
        self.ansi[2]
    }
    pub fn yellow(&self) -> Color {
        self.ansi[3]
    }
    pub fn blue(&self) -> Color {
        self.ansi[4]
    }
    pub fn magenta(&self) -> Color {
        self.ansi[5]
    }
    pub fn cyan(&self) -> Color {
        self.ansi[6]
    }
    pub fn white(&self) -> Color {
        self.ansi[7]
    }
    pub fn bright_black(&self) -> Color {
        self.ansi[8]
    }

    pub fn is_light(&self) -> bool {
        self.background.is_light()
    }
}

/// Resolve every slot, failing on the first missing or unparseable one.
pub fn resolve_palette(palette: &ColorPalette) -> Result<ResolvedPalette, ValidationError> {
    let mut resolved = [Color::from_rgb(0, 0, 0); 22];
    for (i, (slot, value)) in palette.slots().into_iter().enumerate() {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingSlot(slot.to_string()));
        }
        resolved[i] = parse_color(value).ok_or_else(|| ValidationError::InvalidColor {
            slot,
            value: value.to_string(),
        })?;
    }

    let [background, foreground, cursor, selection, accent, border, ansi @ ..] = resolved;
    Ok(ResolvedPalette {
        background,
        foreground,
        cursor,
        selection,
        accent,
        border,
        ansi,
    })
}

impl ThemeMetadata {
    pub fn resolve(&self) -> Result<ResolvedPalette, ValidationError> {
        resolve_palette(&self.colors)
    }

    /// A copy with every slot rewritten as lowercase `#rrggbb`.
    pub fn normalized(&self) -> Result<ThemeMetadata, ValidationError> {
        let resolved = self.resolve()?;
        let mut out = self.clone();
        let hexes: Vec<String> = [
            resolved.background,
            resolved.foreground,
            resolved.cursor,
            resolved.selection,
            resolved.accent,
            resolved.border,
        ]
        .iter()
        .chain(resolved.ansi.iter())
        .map(Color::to_hex)
        .collect();
        for ((_, slot), hex) in out.colors.slots_mut().into_iter().zip(hexes) {
            *slot = hex;
        }
        Ok(out)
    }
}
