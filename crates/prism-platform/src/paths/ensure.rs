use std::fs;

use prism_common::{IoResultExt, ThemeError};

use super::ThemePaths;

/// Creates the root, bundled and custom directories if missing.
///
/// Returns `true` when anything was created. Existing directories are left
/// alone, so a second call performs no writes.
pub fn ensure_dirs(paths: &ThemePaths) -> Result<bool, ThemeError> {
    let mut created = false;
    for dir in [paths.root().to_path_buf(), paths.bundled_dir(), paths.custom_dir()] {
        if dir.is_dir() {
            continue;
        }
        fs::create_dir_all(&dir).at_path(&dir)?;
        tracing::debug!(dir = %dir.display(), "created directory");
        created = true;
    }
    Ok(created)
}
