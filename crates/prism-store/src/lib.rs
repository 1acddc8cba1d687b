//! Theme activation for prism.
//!
//! [`ThemeStore`] owns a prism root: the bundled and custom theme
//! directories, the `current` link, and the two JSON records. It is the only
//! thing that writes any of them.

pub mod catalog;
pub mod hooks;
pub mod records;
pub mod store;

pub use catalog::Theme;
pub use hooks::{HookError, ReloadHook};
pub use records::{ActivationState, Preferences};
pub use store::{EnsureReport, ThemeStore};
