use std::collections::BTreeMap;

use prism_config::Target;
use serde::{Deserialize, Serialize};

/// Longest `recentThemes` list kept.
pub const MAX_RECENTS: usize = 10;

/// User-level settings.
///
/// Missing fields take their defaults on read, and fields this version does
/// not know about are carried through `extra` so a rewrite never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Target id to enabled flag. Targets absent from the map are enabled.
    pub enabled_apps: BTreeMap<String, bool>,
    pub favorites: Vec<String>,
    /// Most recent first.
    pub recent_themes: Vec<String>,
    pub show_notifications: bool,
    pub auto_apply_on_startup: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            enabled_apps: Target::ALL
                .iter()
                .map(|t| (t.id().to_string(), true))
                .collect(),
            favorites: Vec::new(),
            recent_themes: Vec::new(),
            show_notifications: true,
            auto_apply_on_startup: false,
            extra: serde_json::Map::new(),
        }
    }
}

impl Preferences {
    pub fn is_app_enabled(&self, target: Target) -> bool {
        self.enabled_apps.get(target.id()).copied().unwrap_or(true)
    }

    pub fn set_app_enabled(&mut self, target: Target, enabled: bool) {
        self.enabled_apps.insert(target.id().to_string(), enabled);
    }

    /// Move `name` to the front of the recents, dropping duplicates and
    /// anything past [`MAX_RECENTS`].
    pub fn push_recent(&mut self, name: &str) {
        self.recent_themes.retain(|n| n != name);
        self.recent_themes.insert(0, name.to_string());
        self.recent_themes.truncate(MAX_RECENTS);
    }

    /// Returns whether `name` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, name: &str) -> bool {
        if let Some(pos) = self.favorites.iter().position(|n| n == name) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(name.to_string());
            true
        }
    }

    /// Drop every reference to a deleted theme.
    pub fn forget(&mut self, name: &str) {
        self.favorites.retain(|n| n != name);
        self.recent_themes.retain(|n| n != name);
    }
}
