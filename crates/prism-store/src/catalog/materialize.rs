use std::fs;
use std::path::{Path, PathBuf};

use prism_common::{IoResultExt, ThemeError};
use prism_config::{compile, ThemeMetadata};
use prism_platform::paths::{LIGHT_MARKER, THEME_FILE};
use prism_platform::{Scope, ThemePaths};
use tracing::{debug, warn};

/// Write a complete theme directory for `meta` at `<scope>/<name>`.
///
/// The palette is normalized and compiled before anything touches the disk.
/// Files are assembled in `.<name>.staging` and the directory is renamed
/// into place; an existing directory is swapped out whole, so no file from
/// a previous generation survives.
pub fn materialize(
    paths: &ThemePaths,
    scope: Scope,
    name: &str,
    meta: &ThemeMetadata,
) -> Result<PathBuf, ThemeError> {
    let normalized = meta.normalized()?;
    let compiled = compile(&normalized)?;
    let is_light = normalized.resolve()?.is_light();

    let staging = paths.staging_dir(scope, name);
    clear(&staging)?;
    fs::create_dir_all(&staging).at_path(&staging)?;

    let mut files: Vec<(&str, String)> = vec![(THEME_FILE, normalized.to_json_pretty() + "\n")];
    files.extend(compiled.iter().map(|(file, body)| (file, body.to_string())));
    if is_light {
        files.push((LIGHT_MARKER, String::new()));
    }

    for (file, body) in &files {
        let path = staging.join(file);
        if let Err(e) = fs::write(&path, body) {
            let _ = fs::remove_dir_all(&staging);
            return Err(ThemeError::from_io(path, e));
        }
    }

    let dest = paths.theme_dir(scope, name);
    swap_into_place(paths, scope, name, &staging, &dest)?;

    debug!(theme = %name, dir = %dest.display(), files = files.len(), "materialized theme");
    Ok(dest)
}

fn swap_into_place(
    paths: &ThemePaths,
    scope: Scope,
    name: &str,
    staging: &Path,
    dest: &Path,
) -> Result<(), ThemeError> {
    if !dest.exists() {
        return fs::rename(staging, dest).at_path(dest).inspect_err(|_| {
            let _ = fs::remove_dir_all(staging);
        });
    }

    let retired = paths.scope_dir(scope).join(format!(".{name}.old"));
    clear(&retired)?;
    if let Err(e) = fs::rename(dest, &retired) {
        let _ = fs::remove_dir_all(staging);
        return Err(ThemeError::from_io(dest, e));
    }
    if let Err(e) = fs::rename(staging, dest) {
        // Put the previous generation back.
        let _ = fs::rename(&retired, dest);
        let _ = fs::remove_dir_all(staging);
        return Err(ThemeError::from_io(dest, e));
    }
    if let Err(e) = fs::remove_dir_all(&retired) {
        warn!(dir = %retired.display(), "failed to remove previous theme generation: {e}");
    }
    Ok(())
}

/// Remove a leftover directory from an interrupted run.
fn clear(dir: &Path) -> Result<(), ThemeError> {
    if dir.exists() {
        warn!(dir = %dir.display(), "removing leftover directory");
        fs::remove_dir_all(dir).at_path(dir)?;
    }
    Ok(())
}

pub fn remove_theme_dir(dir: &Path) -> Result<(), ThemeError> {
    fs::remove_dir_all(dir).at_path(dir)
}
