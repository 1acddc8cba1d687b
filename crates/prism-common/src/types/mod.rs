mod color;

pub use color::*;
