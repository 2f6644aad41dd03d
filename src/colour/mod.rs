//! Colour value and renderer
//!
//! [`Colour`] holds a parsed colour as 8-bit channels plus alpha and renders
//! it to any of the notations listed in [`Format`].

mod format;
mod value;

pub use format::Format;
pub use value::Colour;
