//! Numeric helpers shared by the parser and the renderer.
//!
//! Channels live in 8-bit integer space (0..=255) while srgb fractions and
//! alpha live in 0.0..=1.0. Conversions between the two are lossy; every
//! rounding here is half-up.

use crate::error::ParseError;

/// Parse every non-empty token as `f64`.
///
/// Tokens are trimmed first, so a delimiter surrounded by stray whitespace
/// produces empty tokens which are skipped rather than rejected.
pub(crate) fn parse_floats<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<f64>, ParseError> {
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| ParseError::numeric(token, e))
        })
        .collect()
}

/// Round a non-negative value half-up to `places` decimal places.
#[inline]
pub(crate) fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale + 0.5).floor() / scale
}

/// Keep the integer part of `value` as a channel.
///
/// Used for rgb()/rgba() input, which is expected to already be integral.
pub(crate) fn truncate_channel(value: f64) -> Result<u8, ParseError> {
    to_channel(value.trunc())
}

/// Scale a 0..=1 fraction to a channel, rounding half-up.
pub(crate) fn fraction_to_channel(fraction: f64) -> Result<u8, ParseError> {
    to_channel(round_half_up(fraction * 255.0, 0))
}

#[inline]
pub(crate) fn channel_to_fraction(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

#[inline]
pub(crate) fn byte_to_alpha(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

/// Scale alpha to a byte, rounding half-up.
#[inline]
pub(crate) fn alpha_to_byte(alpha: f64) -> u8 {
    round_half_up(alpha * 255.0, 0).clamp(0.0, 255.0) as u8
}

pub(crate) fn check_alpha(alpha: f64) -> Result<f64, ParseError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(ParseError::numeric(
            &alpha.to_string(),
            "alpha out of range 0..=1",
        ))
    }
}

fn to_channel(value: f64) -> Result<u8, ParseError> {
    if (0.0..=255.0).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ParseError::numeric(
            &value.to_string(),
            "channel out of range 0..=255",
        ))
    }
}
