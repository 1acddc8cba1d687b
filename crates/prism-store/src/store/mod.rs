//! The theme store: the one object that owns a prism root.
//!
//! Every public operation first runs [`ThemeStore::ensure`]'s self-healing
//! pass, and every operation runs under one mutex, so two callers sharing a
//! store through an `Arc` never interleave writes to the `current` link or
//! the records.

mod activate;
mod manage;


use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use prism_common::ThemeError;
use prism_config::presets::{self, BUNDLED_PRESETS};
use prism_config::Target;
use prism_platform::paths::THEME_FILE;
use prism_platform::{ensure_dirs, Linker, Scope, SystemLinker, ThemePaths};
use tracing::{info, warn};

use crate::catalog::{self, Theme};
use crate::hooks::ReloadHook;
use crate::records::{self, ActivationState, Healed, Preferences};

/// What one [`ThemeStore::ensure`] pass had to repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureReport {
    pub created_dirs: bool,
    pub state: Healed,
    pub preferences: Healed,
    /// Bundled themes written during this pass.
    pub materialized: Vec<String>,
}

impl EnsureReport {
    /// True when nothing on disk was touched.
    pub fn is_noop(&self) -> bool {
        !self.created_dirs
            && self.state == Healed::Intact
            && self.preferences == Healed::Intact
            && self.materialized.is_empty()
    }
}

pub struct ThemeStore {
    paths: ThemePaths,
    linker: Box<dyn Linker>,
    hooks: Vec<Box<dyn ReloadHook>>,
    lock: Mutex<()>,
}

impl ThemeStore {
    pub fn new(paths: ThemePaths) -> Self {
        Self {
            paths,
            linker: Box::new(SystemLinker),
            hooks: Vec::new(),
            lock: Mutex::new(()),
        }
    }

    pub fn with_linker(mut self, linker: impl Linker + 'static) -> Self {
        self.linker = Box::new(linker);
        self
    }

    pub fn with_hook(mut self, hook: impl ReloadHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn paths(&self) -> &ThemePaths {
        &self.paths
    }

    // Poisoning is ignored; the next ensure pass repairs partial writes.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    // =========================================================================
    // SELF-HEALING
    // =========================================================================

    /// Create missing directories and records, replace corrupted records,
    /// and materialize bundled presets that are not on disk yet.
    ///
    /// Writes nothing when everything is already in place.
    pub fn ensure(&self) -> Result<EnsureReport, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()
    }

    fn ensure_locked(&self) -> Result<EnsureReport, ThemeError> {
        let created_dirs = ensure_dirs(&self.paths)?;
        let (_, state) = records::load_or_heal::<ActivationState>(&self.paths.state_file())?;
        let (_, preferences) =
            records::load_or_heal::<Preferences>(&self.paths.preferences_file())?;

        let mut materialized = Vec::new();
        for (name, _) in BUNDLED_PRESETS {
            let dir = self.paths.theme_dir(Scope::Bundled, name);
            if dir.join(THEME_FILE).is_file() {
                continue;
            }
            let Some(preset) = presets::load_preset(name) else {
                continue;
            };
            catalog::materialize(&self.paths, Scope::Bundled, name, &preset?)?;
            materialized.push(name.to_string());
        }

        let report = EnsureReport {
            created_dirs,
            state,
            preferences,
            materialized,
        };
        if !report.is_noop() {
            info!(
                root = %self.paths.root().display(),
                bundled = report.materialized.len(),
                "repaired prism root"
            );
        }
        Ok(report)
    }

    fn load_state(&self) -> Result<ActivationState, ThemeError> {
        records::load_or_heal(&self.paths.state_file()).map(|(state, _)| state)
    }

    fn load_preferences(&self) -> Result<Preferences, ThemeError> {
        records::load_or_heal(&self.paths.preferences_file()).map(|(prefs, _)| prefs)
    }

    fn save_state(&self, state: &ActivationState) -> Result<(), ThemeError> {
        records::write_json_atomic(&self.paths.state_file(), state)
    }

    fn save_preferences(&self, prefs: &Preferences) -> Result<(), ThemeError> {
        records::write_json_atomic(&self.paths.preferences_file(), prefs)
    }

    fn find(&self, name: &str) -> Result<Theme, ThemeError> {
        let (scope, dir) =
            catalog::locate(&self.paths, name).ok_or_else(|| ThemeError::NotFound(name.into()))?;
        catalog::read_theme(&dir, name, scope)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn list(&self) -> Result<Vec<Theme>, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        catalog::list_themes(&self.paths)
    }

    pub fn get(&self, name: &str) -> Result<Theme, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        self.find(name)
    }

    /// The applied theme. A state record naming a theme that no longer
    /// exists reads as `None`.
    pub fn current(&self) -> Result<Option<Theme>, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        let state = self.load_state()?;
        let Some(name) = state.current_name() else {
            return Ok(None);
        };
        match self.find(name) {
            Ok(theme) => Ok(Some(theme)),
            Err(ThemeError::NotFound(_)) => {
                warn!(theme = %name, "current theme no longer exists");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn state(&self) -> Result<ActivationState, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        self.load_state()
    }

    pub fn preferences(&self) -> Result<Preferences, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        self.load_preferences()
    }

    // =========================================================================
    // PREFERENCES
    // =========================================================================

    /// Returns whether `name` is a favorite afterwards.
    pub fn toggle_favorite(&self, name: &str) -> Result<bool, ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        self.find(name)?;
        let mut prefs = self.load_preferences()?;
        let favorite = prefs.toggle_favorite(name);
        self.save_preferences(&prefs)?;
        Ok(favorite)
    }

    pub fn set_app_enabled(&self, target: Target, enabled: bool) -> Result<(), ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        let mut prefs = self.load_preferences()?;
        prefs.set_app_enabled(target, enabled);
        self.save_preferences(&prefs)?;
        info!(target = target.id(), enabled, "app integration toggled");
        Ok(())
    }

    /// Record the wallpaper that goes with the current theme.
    pub fn set_wallpaper(&self, path: Option<PathBuf>) -> Result<(), ThemeError> {
        let _guard = self.guard();
        self.ensure_locked()?;
        let mut state = self.load_state()?;
        state.current_wallpaper = path;
        self.save_state(&state)
    }
}
