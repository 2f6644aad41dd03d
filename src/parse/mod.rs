//! Format recognizer and parser
//!
//! Parsing runs in two steps. The normalized input is first checked against
//! the grammar table; only if one grammar matches does the format-specific
//! extraction run. Input that merely looks like the right shape is rejected
//! before any numbers are read.

mod extract;
mod grammar;

use crate::colour::{Colour, Format};
use crate::error::ParseError;

/// Parse a colour literal.
///
/// Accepted notations (case-insensitive, surrounding whitespace ignored):
/// - `#rrggbb`, `#rrggbbaa`
/// - `rgb(r, g, b)`
/// - `rgba(r, g, b, a)` with `a` one of `0`, `1`, `0.<digits>`
/// - `color(srgb r g b)` with each component a 0..=1 fraction
///
/// # Errors
///
/// - [`ParseError::InvalidFormat`] if no notation matches
/// - [`ParseError::NumericConversion`] if a component cannot be converted
///   to a number or does not fit a channel
///
/// # Example
///
/// ```
/// use colourfmt::{parse, Format};
///
/// let colour = parse("color(srgb 0.921569 0.949020 1)").unwrap();
/// assert_eq!(colour.to(Format::Rgb), "rgb(235, 242, 255)");
///
/// assert!(parse("rgb(1,2)").is_err());
/// ```
pub fn parse(input: &str) -> Result<Colour, ParseError> {
    let normalized = input.trim().to_lowercase();

    let Some(format) = grammar::recognize(&normalized) else {
        tracing::debug!(input, "Rejected colour literal");
        return Err(ParseError::invalid_format(input));
    };

    let result = match format {
        Format::Hex => extract::hex(&normalized),
        Format::Rgb | Format::Rgba => extract::rgb(&normalized),
        Format::Srgb => extract::srgb(&normalized),
    };

    match &result {
        Ok(colour) => tracing::debug!(
            input,
            format = %colour.source_format(),
            "Parsed colour literal"
        ),
        Err(e) => tracing::debug!(
            input,
            format = %format,
            error = %e,
            "Rejected colour literal components"
        ),
    }

    result
}
