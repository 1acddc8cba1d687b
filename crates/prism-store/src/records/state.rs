use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which theme is applied, and since when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivationState {
    /// Empty when nothing has been applied.
    pub current_theme: String,
    /// Unix milliseconds; 0 when never switched.
    pub last_switched: i64,
    pub current_wallpaper: Option<PathBuf>,
}

impl ActivationState {
    pub fn current_name(&self) -> Option<&str> {
        (!self.current_theme.is_empty()).then_some(self.current_theme.as_str())
    }

    pub fn record_switch(&mut self, name: &str, at_millis: i64) {
        self.current_theme = name.to_string();
        self.last_switched = at_millis;
    }
}
