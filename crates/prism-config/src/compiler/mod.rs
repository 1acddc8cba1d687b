//! Theme-to-config compiler.
//!
//! [`compile`] resolves a [`ThemeMetadata`] palette once and hands the
//! [`ResolvedPalette`] to one emitter per [`Target`]. Emitters are pure
//! functions; each one owns its file's grammar and key names and knows
//! nothing about the others.

mod alacritty;
mod btop;
mod fzf;
mod hyper;
mod iterm2;
mod kitty;
mod neovim;
mod starship;
mod vscode;
mod warp;


use prism_common::{Color, ValidationError};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::palette::{ResolvedPalette, ThemeMetadata};

// =============================================================================
// TARGETS
// =============================================================================

/// A supported external application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Alacritty,
    Kitty,
    Warp,
    Hyper,
    Neovim,
    Iterm2,
    Vscode,
    Starship,
    Btop,
    Fzf,
}

impl Target {
    /// Every target, in emission order.
    pub const ALL: [Target; 10] = [
        Target::Alacritty,
        Target::Kitty,
        Target::Warp,
        Target::Hyper,
        Target::Neovim,
        Target::Iterm2,
        Target::Vscode,
        Target::Starship,
        Target::Btop,
        Target::Fzf,
    ];

    /// Stable identifier used in preferences and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Alacritty => "alacritty",
            Self::Kitty => "kitty",
            Self::Warp => "warp",
            Self::Hyper => "hyper",
            Self::Neovim => "neovim",
            Self::Iterm2 => "iterm2",
            Self::Vscode => "vscode",
            Self::Starship => "starship",
            Self::Btop => "btop",
            Self::Fzf => "fzf",
        }
    }

    /// File name of this target's output inside a theme directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Alacritty => "alacritty.toml",
            Self::Kitty => "kitty.conf",
            Self::Warp => "warp.yaml",
            Self::Hyper => "hyper.js",
            Self::Neovim => "neovim.lua",
            Self::Iterm2 => "iterm2.itermcolors",
            Self::Vscode => "vscode.json",
            Self::Starship => "starship.toml",
            Self::Btop => "btop.theme",
            Self::Fzf => "fzf.sh",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Render this target's file body.
    pub fn emit(
        &self,
        meta: &ThemeMetadata,
        palette: &ResolvedPalette,
    ) -> Result<String, ValidationError> {
        match self {
            Self::Alacritty => alacritty::emit(meta, palette),
            Self::Kitty => Ok(kitty::emit(meta, palette)),
            Self::Warp => warp::emit(meta, palette),
            Self::Hyper => hyper::emit(meta, palette),
            Self::Neovim => Ok(neovim::emit(meta, palette)),
            Self::Iterm2 => Ok(iterm2::emit(palette)),
            Self::Vscode => vscode::emit(palette),
            Self::Starship => starship::emit(meta, palette),
            Self::Btop => Ok(btop::emit(meta, palette)),
            Self::Fzf => Ok(fzf::emit(meta, palette)),
        }
    }
}

// =============================================================================
// COMPILATION
// =============================================================================

/// The complete file-set for one theme, keyed by relative file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTheme {
    files: BTreeMap<&'static str, String>,
}

impl CompiledTheme {
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    pub fn target(&self, target: Target) -> Option<&str> {
        self.get(target.file_name())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.files.iter().map(|(name, body)| (*name, body.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Compile a theme into one config file per [`Target`].
///
/// Fails without producing any file if a palette slot is missing or is not
/// a recognized color.
pub fn compile(meta: &ThemeMetadata) -> Result<CompiledTheme, ValidationError> {
    let palette = meta.resolve()?;

    let mut files = BTreeMap::new();
    for target in Target::ALL {
        files.insert(target.file_name(), target.emit(meta, &palette)?);
    }

    tracing::debug!(theme = %meta.name, files = files.len(), "compiled theme");
    Ok(CompiledTheme { files })
}

// =============================================================================
// SHARED EMITTER HELPERS
// =============================================================================

/// Eight named ANSI colors, serialized as a `black`..`white` table.
#[derive(Debug, Serialize)]
struct AnsiTable {
    black: String,
    red: String,
    green: String,
    yellow: String,
    blue: String,
    magenta: String,
    cyan: String,
    white: String,
}

impl AnsiTable {
    fn from_colors(colors: &[Color]) -> Self {
        let hex = |i: usize| colors[i].to_hex();
        Self {
            black: hex(0),
            red: hex(1),
            green: hex(2),
            yellow: hex(3),
            blue: hex(4),
            magenta: hex(5),
            cyan: hex(6),
            white: hex(7),
        }
    }
}

/// Theme name made safe for a single-line comment.
fn comment_name(meta: &ThemeMetadata) -> String {
    meta.name
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn serializer_error(format: &str, e: impl std::fmt::Display) -> ValidationError {
    ValidationError::Malformed(format!("failed to serialize {format}: {e}"))
}
