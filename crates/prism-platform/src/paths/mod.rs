//! On-disk layout of a prism root.
//!
//! ```text
//! <root>/themes/<name>/          bundled themes
//! <root>/custom-themes/<name>/   custom themes
//! <root>/current                 link to the active theme directory
//! <root>/state.json
//! <root>/preferences.json
//! ```

mod ensure;
mod resolve;

use std::path::{Path, PathBuf};

use prism_common::ThemeError;

pub use ensure::ensure_dirs;
pub use resolve::{default_root, resolve_root, HOME_ENV};

pub const BUNDLED_DIR: &str = "themes";
pub const CUSTOM_DIR: &str = "custom-themes";
pub const CURRENT_LINK: &str = "current";
pub const STATE_FILE: &str = "state.json";
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Serialized metadata inside every theme directory.
pub const THEME_FILE: &str = "theme.json";

/// Zero-byte marker present in light theme directories.
pub const LIGHT_MARKER: &str = "light.mode";

/// Which half of the catalog a theme lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Bundled,
    Custom,
}

/// Path layout rooted at one prism directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePaths {
    root: PathBuf,
}

impl ThemePaths {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout at `explicit`, `$PRISM_HOME`, or the platform default.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ThemeError> {
        resolve_root(explicit).map(Self::at)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bundled_dir(&self) -> PathBuf {
        self.root.join(BUNDLED_DIR)
    }

    pub fn custom_dir(&self) -> PathBuf {
        self.root.join(CUSTOM_DIR)
    }

    pub fn scope_dir(&self, scope: Scope) -> PathBuf {
        match scope {
            Scope::Bundled => self.bundled_dir(),
            Scope::Custom => self.custom_dir(),
        }
    }

    pub fn theme_dir(&self, scope: Scope, name: &str) -> PathBuf {
        self.scope_dir(scope).join(name)
    }

    /// Hidden sibling a theme directory is assembled in before it is
    /// renamed into place.
    pub fn staging_dir(&self, scope: Scope, name: &str) -> PathBuf {
        self.scope_dir(scope).join(format!(".{name}.staging"))
    }

    pub fn current_link(&self) -> PathBuf {
        self.root.join(CURRENT_LINK)
    }

    pub fn state_file(&self) -> PathBuf {
        self.root.join(STATE_FILE)
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn layout_is_rooted() {
        let paths = ThemePaths::at("/tmp/prism-root");
        assert_eq!(paths.bundled_dir(), Path::new("/tmp/prism-root/themes"));
        assert_eq!(paths.custom_dir(), Path::new("/tmp/prism-root/custom-themes"));
        assert_eq!(paths.current_link(), Path::new("/tmp/prism-root/current"));
        assert_eq!(paths.state_file(), Path::new("/tmp/prism-root/state.json"));
        assert_eq!(
            paths.preferences_file(),
            Path::new("/tmp/prism-root/preferences.json")
        );
    }

    #[test]
    fn theme_and_staging_dirs_share_a_parent() {
        let paths = ThemePaths::at("/p");
        let dir = paths.theme_dir(Scope::Custom, "ocean");
        let staging = paths.staging_dir(Scope::Custom, "ocean");
        assert_eq!(dir, Path::new("/p/custom-themes/ocean"));
        assert_eq!(staging, Path::new("/p/custom-themes/.ocean.staging"));
        assert_eq!(dir.parent(), staging.parent());
        assert_eq!(
            paths.theme_dir(Scope::Bundled, "nord"),
            Path::new("/p/themes/nord")
        );
    }

    #[test]
    fn explicit_root_wins_over_env() {
        let root = resolve::resolve_root_from(
            Some(Path::new("/explicit")),
            Some(OsString::from("/from-env")),
        )
        .unwrap();
        assert_eq!(root, Path::new("/explicit"));
    }

    #[test]
    fn env_root_wins_over_default() {
        let root = resolve::resolve_root_from(None, Some(OsString::from("/from-env"))).unwrap();
        assert_eq!(root, Path::new("/from-env"));
    }

    #[test]
    fn empty_env_falls_back_to_default() {
        if let Ok(default) = default_root() {
            let root = resolve::resolve_root_from(None, Some(OsString::new())).unwrap();
            assert_eq!(root, default);
            assert!(root.ends_with("prism"));
        }
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = ThemePaths::at(tmp.path().join("root"));

        assert!(ensure_dirs(&paths).unwrap());
        assert!(paths.bundled_dir().is_dir());
        assert!(paths.custom_dir().is_dir());

        assert!(!ensure_dirs(&paths).unwrap());
    }
}
