use std::path::PathBuf;

use prism_common::ThemeError;
use prism_config::{validate_theme_name, ThemeMetadata};
use prism_platform::Scope;
use tracing::{info, warn};

use super::ThemeStore;
use crate::catalog::{self, Theme};

impl ThemeStore {
    /// Add a custom theme. The palette is compiled before anything is
    /// written; an invalid palette leaves no directory behind.
    pub fn create(&self, name: &str, metadata: &ThemeMetadata) -> Result<Theme, ThemeError> {
        validate_theme_name(name)?;

        let _guard = self.guard();
        self.ensure_locked()?;
        if catalog::locate(&self.paths, name).is_some() {
            return Err(ThemeError::NameTaken(name.into()));
        }

        let dir = catalog::materialize(&self.paths, Scope::Custom, name, metadata)?;
        info!(theme = %name, "created custom theme");
        catalog::read_theme(&dir, name, Scope::Custom)
    }

    /// Regenerate a custom theme from new metadata. The directory is rebuilt
    /// from scratch and swapped in whole.
    pub fn update(&self, name: &str, metadata: &ThemeMetadata) -> Result<Theme, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        self.custom_dir_of(name)?;

        let dir = catalog::materialize(&self.paths, Scope::Custom, name, metadata)?;
        info!(theme = %name, "updated custom theme");
        catalog::read_theme(&dir, name, Scope::Custom)
    }

    /// Remove a custom theme and every preference that mentions it.
    ///
    /// The current theme cannot be deleted; apply another one first.
    pub fn delete(&self, name: &str) -> Result<(), ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        let dir = self.custom_dir_of(name)?;

        if self.load_state()?.current_name() == Some(name) {
            return Err(ThemeError::Conflict {
                path: dir,
                reason: format!("'{name}' is the current theme; apply another theme first"),
            });
        }

        catalog::remove_theme_dir(&dir)?;
        info!(theme = %name, "deleted custom theme");

        // The theme is already gone, so a failed prune is only logged.
        if let Err(e) = self.forget_in_preferences(name) {
            warn!(theme = %name, "failed to prune preferences after delete: {e}");
        }
        Ok(())
    }

    fn forget_in_preferences(&self, name: &str) -> Result<(), ThemeError> {
        let mut prefs = self.load_preferences()?;
        let before = prefs.clone();
        prefs.forget(name);
        if prefs != before {
            self.save_preferences(&prefs)?;
        }
        Ok(())
    }

    /// Directory of a theme that may be modified.
    fn custom_dir_of(&self, name: &str) -> Result<PathBuf, ThemeError> {
        match catalog::locate(&self.paths, name) {
            None => Err(ThemeError::NotFound(name.into())),
            Some((Scope::Bundled, _)) => Err(ThemeError::ReadOnly(name.into())),
            Some((Scope::Custom, dir)) => Ok(dir),
        }
    }
}
