use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use prism_common::ThemeError;

pub(super) const APP_NAME: &str = "prism";

/// Environment variable that overrides the default prism root.
pub const HOME_ENV: &str = "PRISM_HOME";

/// Returns the platform-specific prism root.
///
/// - macOS: `~/Library/Application Support/prism`
/// - Linux: `$XDG_CONFIG_HOME/prism` (defaults to `~/.config/prism`)
/// - Windows: `%APPDATA%\prism`
pub fn default_root() -> Result<PathBuf, ThemeError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| {
            ThemeError::from_io(
                PathBuf::new(),
                io::Error::new(io::ErrorKind::NotFound, "could not determine config directory"),
            )
        })
}

/// Resolves the prism root: an explicit path wins, then `$PRISM_HOME`, then
/// [`default_root`].
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf, ThemeError> {
    resolve_root_from(explicit, std::env::var_os(HOME_ENV))
}

pub(super) fn resolve_root_from(
    explicit: Option<&Path>,
    env: Option<OsString>,
) -> Result<PathBuf, ThemeError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match env {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_root(),
    }
}
