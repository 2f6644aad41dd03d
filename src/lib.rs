//! colourfmt - colour literal parsing and rendering
//!
//! Recognizes colours written as `#rrggbb[aa]`, `rgb(...)`, `rgba(...)` or
//! `color(srgb ...)`, normalizes them into a [`Colour`], and renders that
//! value back into any of the four notations.
//!
//! ```
//! use colourfmt::{parse, Format};
//!
//! let colour = parse("#ff00cc80").unwrap();
//! assert_eq!(colour.source_format(), Format::Hex);
//! assert_eq!(colour.to(Format::Rgba), "rgba(255, 0, 204, 0.50)");
//! assert_eq!(colour.to(Format::Srgb), "color(srgb 1.000000 0.000000 0.800000)");
//! ```
//!
//! Channels are stored as 8-bit integers and alpha as a 0..=1 float, so
//! converting through this representation is lossy: srgb fractions are
//! rounded to the nearest channel, and rgb() components keep only their
//! integer part.

pub mod colour;
pub mod error;
mod numeric;
mod parse;

pub use colour::{Colour, Format};
pub use error::{ParseError, UnknownFormat};
pub use parse::parse;
