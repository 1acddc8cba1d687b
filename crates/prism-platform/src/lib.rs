//! Filesystem layout and link handling for prism.

pub mod link;
pub mod paths;

pub use link::{read_link_target, remove_link, retarget, Linker, SystemLinker};
pub use paths::{ensure_dirs, resolve_root, Scope, ThemePaths};
