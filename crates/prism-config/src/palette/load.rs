//! Reading theme definitions from disk and validating theme names.

use prism_common::{IoResultExt, ThemeError, ValidationError};
use std::path::Path;
use tracing::info;

use super::types::{ThemeMetadata, SLOT_NAMES};

const MAX_NAME_LEN: usize = 64;

/// Check that `name` is usable as a theme directory name.
pub fn validate_theme_name(name: &str) -> Result<(), ValidationError> {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    let valid_start = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

    if name.len() > MAX_NAME_LEN || !valid_chars || !valid_start {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Map a deserializer message onto a validation error, naming the slot
/// when a palette key is missing.
pub(crate) fn classify_parse_error(message: String) -> ValidationError {
    if let Some(rest) = message.split("missing field `").nth(1) {
        if let Some(field) = rest.split('`').next() {
            if SLOT_NAMES.contains(&field) {
                return ValidationError::MissingSlot(field.to_string());
            }
        }
    }
    ValidationError::Malformed(message)
}

impl ThemeMetadata {
    pub fn from_json_str(s: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(s).map_err(|e| classify_parse_error(e.to_string()))
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ValidationError> {
        serde_yaml::from_str(s).map_err(|e| classify_parse_error(e.to_string()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ValidationError> {
        toml::from_str(s).map_err(|e| classify_parse_error(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> String {
        // ThemeMetadata is plain strings; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Load a theme definition, choosing the format from the file extension.
///
/// `.yaml`/`.yml` and `.toml` are recognized; anything else is read as JSON.
pub fn load_metadata_from_path(path: &Path) -> Result<ThemeMetadata, ThemeError> {
    let content = std::fs::read_to_string(path).at_path(path)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let metadata = match ext.as_deref() {
        Some("yaml") | Some("yml") => ThemeMetadata::from_yaml_str(&content)?,
        Some("toml") => ThemeMetadata::from_toml_str(&content)?,
        _ => ThemeMetadata::from_json_str(&content)?,
    };

    info!("loaded theme definition from {}", path.display());
    Ok(metadata)
}
