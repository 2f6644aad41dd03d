//! Format-specific extraction, run only after a grammar has matched.

use crate::colour::{Colour, Format};
use crate::error::ParseError;
use crate::numeric::{
    byte_to_alpha, check_alpha, fraction_to_channel, parse_floats, truncate_channel,
};

/// `#rrggbb` or `#rrggbbaa`.
pub(super) fn hex(input: &str) -> Result<Colour, ParseError> {
    let digits = input
        .strip_prefix('#')
        .ok_or_else(|| ParseError::numeric(input, "missing '#'"))?;
    let bytes = hex::decode(digits).map_err(|e| ParseError::numeric(digits, e))?;

    match bytes.as_slice() {
        &[r, g, b] => Ok(Colour::new(Format::Hex, [r, g, b], 1.0)),
        &[r, g, b, a] => Ok(Colour::new(Format::Hex, [r, g, b], byte_to_alpha(a))),
        _ => Err(ParseError::numeric(digits, "expected 6 or 8 hex digits")),
    }
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Channels keep only their integer part. The source format follows the
/// number of components found.
pub(super) fn rgb(input: &str) -> Result<Colour, ParseError> {
    // `rgb` is a prefix of `rgba`, so the longer literal goes first
    let rest = input
        .strip_prefix("rgba")
        .or_else(|| input.strip_prefix("rgb"))
        .ok_or_else(|| ParseError::numeric(input, "missing rgb() literal"))?;
    let body =
        parenthesized(rest).ok_or_else(|| ParseError::numeric(input, "missing parentheses"))?;

    match parse_floats(body.split(','))?.as_slice() {
        &[r, g, b] => Ok(Colour::new(Format::Rgb, channels(r, g, b)?, 1.0)),
        &[r, g, b, a] => Ok(Colour::new(Format::Rgba, channels(r, g, b)?, check_alpha(a)?)),
        _ => Err(ParseError::numeric(body, "expected 3 or 4 components")),
    }
}

/// `color(srgb r g b)` with each component a 0..=1 fraction.
pub(super) fn srgb(input: &str) -> Result<Colour, ParseError> {
    let body = input
        .strip_prefix("color")
        .and_then(parenthesized)
        .and_then(|inner| inner.trim_start().strip_prefix("srgb"))
        .ok_or_else(|| ParseError::numeric(input, "missing color(srgb ...) wrapper"))?;

    match parse_floats(body.split(char::is_whitespace))?.as_slice() {
        &[r, g, b] => {
            let rgb = [
                fraction_to_channel(r)?,
                fraction_to_channel(g)?,
                fraction_to_channel(b)?,
            ];
            Ok(Colour::new(Format::Srgb, rgb, 1.0))
        }
        _ => Err(ParseError::numeric(body, "expected 3 components")),
    }
}

/// The text between a leading `(` and a trailing `)`, ignoring outer whitespace.
fn parenthesized(s: &str) -> Option<&str> {
    s.trim().strip_prefix('(')?.strip_suffix(')')
}

fn channels(r: f64, g: f64, b: f64) -> Result<[u8; 3], ParseError> {
    Ok([
        truncate_channel(r)?,
        truncate_channel(g)?,
        truncate_channel(b)?,
    ])
}
