//! Prism theme model and config compiler.
//!
//! A theme is a named 22-slot color palette ([`ThemeMetadata`]). This crate
//! parses and validates palettes, ships the bundled presets, and compiles a
//! palette into one native config file per supported application.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use prism_config::{compile, presets, Target};
//!
//! let meta = presets::load_preset("nord").unwrap().unwrap();
//! let compiled = compile(&meta).unwrap();
//! println!("{}", compiled.target(Target::Kitty).unwrap());
//! ```

pub mod colors;
pub mod compiler;
pub mod palette;
pub mod presets;

pub use colors::{normalize_color, parse_color, validate_color};
pub use compiler::{compile, CompiledTheme, Target};
pub use palette::{
    load_metadata_from_path, validate_theme_name, ColorPalette, ResolvedPalette, ThemeMetadata,
    SLOT_NAMES,
};
