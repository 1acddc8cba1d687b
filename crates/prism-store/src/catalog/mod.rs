//! Theme directories: reading them back and writing them into place.

mod materialize;

#[cfg(test)]
mod tests;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use prism_common::{IoResultExt, ThemeError};
use prism_config::{validate_theme_name, ThemeMetadata};
use prism_platform::paths::{LIGHT_MARKER, THEME_FILE};
use prism_platform::{Scope, ThemePaths};
use serde::Serialize;

pub use materialize::{materialize, remove_theme_dir};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub path: PathBuf,
    pub metadata: ThemeMetadata,
    pub is_custom: bool,
    pub is_light: bool,
}

impl Theme {
    pub fn scope(&self) -> Scope {
        if self.is_custom {
            Scope::Custom
        } else {
            Scope::Bundled
        }
    }
}

/// Read the theme directory at `dir`.
pub fn read_theme(dir: &Path, name: &str, scope: Scope) -> Result<Theme, ThemeError> {
    let theme_file = dir.join(THEME_FILE);
    let content = fs::read_to_string(&theme_file).at_path(&theme_file)?;
    let metadata = ThemeMetadata::from_json_str(&content)?;

    Ok(Theme {
        name: name.to_string(),
        path: dir.to_path_buf(),
        metadata,
        is_custom: scope == Scope::Custom,
        is_light: dir.join(LIGHT_MARKER).exists(),
    })
}

/// Where `name` lives, custom scope first. A name that is not a valid theme
/// name never resolves, so it cannot reach outside its scope directory.
pub fn locate(paths: &ThemePaths, name: &str) -> Option<(Scope, PathBuf)> {
    validate_theme_name(name).ok()?;
    [Scope::Custom, Scope::Bundled]
        .into_iter()
        .map(|scope| (scope, paths.theme_dir(scope, name)))
        .find(|(_, dir)| dir.join(THEME_FILE).is_file())
}

/// Theme directory names in one scope, sorted. Hidden and otherwise
/// invalid names are skipped.
pub fn scope_names(paths: &ThemePaths, scope: Scope) -> Result<Vec<String>, ThemeError> {
    let dir = paths.scope_dir(scope);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ThemeError::from_io(&dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.at_path(&dir)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if validate_theme_name(&name).is_err() || !entry.path().join(THEME_FILE).is_file() {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// Every readable theme: bundled then custom, each sorted by name, with
/// custom themes shadowing bundled ones of the same name.
pub fn list_themes(paths: &ThemePaths) -> Result<Vec<Theme>, ThemeError> {
    let custom = scope_names(paths, Scope::Custom)?;
    let bundled: Vec<String> = scope_names(paths, Scope::Bundled)?
        .into_iter()
        .filter(|n| !custom.contains(n))
        .collect();

    let mut themes = Vec::with_capacity(bundled.len() + custom.len());
    for (scope, names) in [(Scope::Bundled, bundled), (Scope::Custom, custom)] {
        for name in names {
            match read_theme(&paths.theme_dir(scope, &name), &name, scope) {
                Ok(theme) => themes.push(theme),
                Err(e) => tracing::warn!(theme = %name, "skipping unreadable theme: {e}"),
            }
        }
    }
    Ok(themes)
}
