//! Bundled theme presets.
//!
//! Presets are YAML definitions compiled into the binary. They are
//! materialized into the read-only bundled scope on first run.

use prism_common::ValidationError;

use crate::palette::ThemeMetadata;

/// Bundled preset names paired with their YAML source.
pub const BUNDLED_PRESETS: &[(&str, &str)] = &[
    (
        "tokyo-night",
        include_str!("../../resources/themes/tokyo-night.yaml"),
    ),
    ("nord", include_str!("../../resources/themes/nord.yaml")),
    ("dracula", include_str!("../../resources/themes/dracula.yaml")),
    (
        "catppuccin-mocha",
        include_str!("../../resources/themes/catppuccin-mocha.yaml"),
    ),
    (
        "catppuccin-latte",
        include_str!("../../resources/themes/catppuccin-latte.yaml"),
    ),
    (
        "gruvbox-dark",
        include_str!("../../resources/themes/gruvbox-dark.yaml"),
    ),
    (
        "solarized-dark",
        include_str!("../../resources/themes/solarized-dark.yaml"),
    ),
];

/// Names of all bundled presets.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    BUNDLED_PRESETS.iter().map(|(name, _)| *name)
}

/// Parse a bundled preset by name. Returns `None` for unknown names.
pub fn load_preset(name: &str) -> Option<Result<ThemeMetadata, ValidationError>> {
    BUNDLED_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, source)| ThemeMetadata::from_yaml_str(source))
}
