//! The `current` link and how it is retargeted.
//!
//! A new link is always created under a temporary sibling name and renamed
//! over the live one, so readers see either the old target or the new one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use prism_common::{IoResultExt, ThemeError};

/// Creates a directory link. Abstracted so link failures can be injected.
pub trait Linker: Send + Sync {
    fn link(&self, target: &Path, link: &Path) -> io::Result<()>;
}

/// Symlinks on Unix, directory symlinks on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinker;

impl Linker for SystemLinker {
    #[cfg(unix)]
    fn link(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    fn link(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::windows::fs::symlink_dir(target, link)
    }
}

/// Target of the link at `link`, or `None` if it is absent or not a link.
pub fn read_link_target(link: &Path) -> Option<PathBuf> {
    fs::read_link(link).ok()
}

fn temp_link_path(link: &Path) -> PathBuf {
    let name = link
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    link.with_file_name(format!(".{name}.tmp"))
}

/// Removes whatever sits at `path`: a link, a file or a directory tree.
/// An absent path is not an error.
fn remove_any(path: &Path) -> Result<(), ThemeError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ThemeError::from_io(path, e)),
    };
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else if meta.file_type().is_symlink() && cfg!(windows) && path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    result.at_path(path)
}

/// Removes the link at `link`. A missing link is not an error.
pub fn remove_link(link: &Path) -> Result<(), ThemeError> {
    remove_any(link)
}

/// Points `link` at `target`.
///
/// If link creation fails the error is classified and `link` is left as it
/// was. A plain directory occupying `link` is removed recursively first.
pub fn retarget(linker: &dyn Linker, link: &Path, target: &Path) -> Result<(), ThemeError> {
    let tmp = temp_link_path(link);
    remove_any(&tmp)?;

    linker.link(target, &tmp).at_path(link)?;

    if let Err(e) = swap_into_place(&tmp, link) {
        let _ = remove_any(&tmp);
        return Err(e);
    }

    tracing::debug!(link = %link.display(), target = %target.display(), "retargeted link");
    Ok(())
}

fn swap_into_place(tmp: &Path, link: &Path) -> Result<(), ThemeError> {
    if let Ok(meta) = fs::symlink_metadata(link) {
        if meta.is_dir() {
            tracing::warn!(path = %link.display(), "replacing plain directory at link path");
            remove_any(link).map_err(|e| ThemeError::Conflict {
                path: link.to_path_buf(),
                reason: format!("plain directory in place of the link could not be removed: {e}"),
            })?;
        } else if cfg!(windows) {
            // Windows cannot rename over an existing directory link.
            remove_any(link)?;
        }
    }
    fs::rename(tmp, link).at_path(link)
}

#[cfg(test)]
mod tests;
