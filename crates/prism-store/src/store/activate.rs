use std::path::Path;

use prism_common::ThemeError;
use prism_platform::{read_link_target, remove_link, retarget};
use tracing::{error, info};

use super::ThemeStore;
use crate::catalog::Theme;
use crate::hooks;
use crate::records::Preferences;

impl ThemeStore {
    /// Make `name` the current theme.
    ///
    /// Retargets the `current` link, then records the switch in the state
    /// record and the recents. Either all of that happens or the link and
    /// the state record are left as they were. Reload hooks run afterwards,
    /// outside the lock, and their failures never reach the caller.
    pub fn apply(&self, name: &str) -> Result<Theme, ThemeError> {
        let (theme, prefs) = {
            let _guard = self.guard();
            self.ensure_locked()?;
            let theme = self.find(name)?;

            let link = self.paths.current_link();
            let previous = read_link_target(&link);
            retarget(self.linker.as_ref(), &link, &theme.path)?;

            let prefs = match self.record_switch(&theme.name) {
                Ok(prefs) => prefs,
                Err(e) => {
                    self.restore_link(&link, previous.as_deref());
                    return Err(e);
                }
            };
            info!(theme = %theme.name, custom = theme.is_custom, "applied theme");
            (theme, prefs)
        };

        hooks::notify(&self.hooks, &prefs, &theme);
        Ok(theme)
    }

    /// Write the state record and recents for a switch to `name`. If the
    /// recents cannot be written the previous state record is put back.
    fn record_switch(&self, name: &str) -> Result<Preferences, ThemeError> {
        let previous = self.load_state()?;
        let mut prefs = self.load_preferences()?;

        let mut state = previous.clone();
        state.record_switch(name, chrono::Utc::now().timestamp_millis());
        self.save_state(&state)?;

        prefs.push_recent(name);
        if let Err(e) = self.save_preferences(&prefs) {
            if let Err(restore_err) = self.save_state(&previous) {
                error!("failed to restore activation state: {restore_err}");
            }
            return Err(e);
        }
        Ok(prefs)
    }

    fn restore_link(&self, link: &Path, previous: Option<&Path>) {
        let restored = match previous {
            Some(target) => retarget(self.linker.as_ref(), link, target),
            None => remove_link(link),
        };
        if let Err(e) = restored {
            error!(link = %link.display(), "failed to restore current link: {e}");
        }
    }
}
