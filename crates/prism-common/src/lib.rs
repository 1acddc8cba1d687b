pub mod errors;
pub mod types;

pub use errors::{ErrorCode, IoResultExt, ThemeError, ValidationError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, ThemeError>;
