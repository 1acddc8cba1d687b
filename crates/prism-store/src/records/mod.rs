//! The two persisted JSON records and how they are read and written.
//!
//! Both records are self-healing: a missing file is created with defaults
//! and a file that fails to parse is moved aside to
//! `<file>.corrupted.backup` before defaults are written in its place.

mod preferences;
mod state;

#[cfg(test)]
mod tests;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use prism_common::{IoResultExt, ThemeError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub use preferences::{Preferences, MAX_RECENTS};
pub use state::ActivationState;

/// Suffix appended to a record that failed to parse.
pub const CORRUPTED_SUFFIX: &str = ".corrupted.backup";

/// What [`load_or_heal`] had to do to produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Healed {
    /// The file existed and parsed.
    Intact,
    /// The file was missing and defaults were written.
    Created,
    /// The file was unparseable; it was backed up and defaults were written.
    Replaced,
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(CORRUPTED_SUFFIX);
    PathBuf::from(name)
}

/// Serialize `value` and write it atomically (write `.tmp`, then rename).
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), ThemeError> {
    let mut body = serde_json::to_string_pretty(value).map_err(|e| ThemeError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;
    body.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &body).at_path(&tmp_path)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ThemeError::from_io(path, e));
    }

    debug!(path = %path.display(), "record saved to disk");
    Ok(())
}

/// Read a record, creating or replacing it with defaults when needed.
pub fn load_or_heal<T>(path: &Path) -> Result<(T, Healed), ThemeError>
where
    T: DeserializeOwned + Serialize + Default,
{
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let value = T::default();
            write_json_atomic(path, &value)?;
            debug!(path = %path.display(), "created record with defaults");
            return Ok((value, Healed::Created));
        }
        Err(e) => return Err(ThemeError::from_io(path, e)),
    };

    match serde_json::from_str(&content) {
        Ok(value) => Ok((value, Healed::Intact)),
        Err(parse_err) => {
            let backup = backup_path(path);
            warn!(
                path = %path.display(),
                backup = %backup.display(),
                "record is corrupted ({parse_err}), replacing with defaults"
            );
            fs::rename(path, &backup).map_err(|e| ThemeError::CorruptedState {
                path: path.to_path_buf(),
                reason: format!("{parse_err}; backup to {} failed: {e}", backup.display()),
            })?;

            let value = T::default();
            write_json_atomic(path, &value)?;
            Ok((value, Healed::Replaced))
        }
    }
}
