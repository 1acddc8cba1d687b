//! The canonical palette record.
//!
//! [`ThemeMetadata`] is the unit of theming: identity fields plus a closed
//! 22-slot [`ColorPalette`]. [`resolve_palette`] is the single validator that
//! turns color strings into a [`ResolvedPalette`].

mod load;
mod resolve;
mod types;


pub use load::{load_metadata_from_path, validate_theme_name};
pub use resolve::{resolve_palette, ResolvedPalette};
pub use types::{ColorPalette, ThemeMetadata, ANSI_NAMES, SLOT_NAMES};
