//! Post-apply notification of per-application integrations.

use prism_config::Target;
use tracing::{debug, warn};

use crate::catalog::Theme;
use crate::records::Preferences;

pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Tells one application to pick up the newly applied theme.
///
/// Hooks run after `apply` has committed and cannot affect its result.
pub trait ReloadHook: Send + Sync {
    fn target(&self) -> Target;

    fn reload(&self, theme: &Theme) -> Result<(), HookError>;
}

/// Run every hook whose target is enabled. Failures are logged only.
pub(crate) fn notify(hooks: &[Box<dyn ReloadHook>], prefs: &Preferences, theme: &Theme) {
    for hook in hooks {
        let target = hook.target();
        if !prefs.is_app_enabled(target) {
            debug!(target = target.id(), "reload hook skipped, app disabled");
            continue;
        }
        if let Err(e) = hook.reload(theme) {
            warn!(target = target.id(), theme = %theme.name, "reload hook failed: {e}");
        }
    }
}
