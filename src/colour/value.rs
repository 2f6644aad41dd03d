//! The parsed colour value and its renderings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::format::Format;
use crate::error::ParseError;
use crate::numeric::{alpha_to_byte, channel_to_fraction, round_half_up};

/// A colour normalized to 8-bit channels plus a 0..=1 alpha.
///
/// `Colour` remembers which notation it was parsed from, but can be
/// rendered to any [`Format`]. Values are only produced by
/// [`parse`](crate::parse) and are immutable afterwards.
///
/// # Example
///
/// ```
/// use colourfmt::{parse, Format};
///
/// let colour = parse("rgba(255, 0, 204, 0.5)").unwrap();
/// assert_eq!(colour.to(Format::Hex), "#ff00cc80");
/// assert_eq!(colour.to(Format::Rgb), "rgb(255, 0, 204)");
/// ```
///
/// With serde, a `Colour` reads from any supported literal and writes back
/// in the notation it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    source_format: Format,
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Colour {
    /// Callers guarantee `alpha` is within 0.0..=1.0.
    pub(crate) fn new(source_format: Format, [red, green, blue]: [u8; 3], alpha: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&alpha));
        Self {
            source_format,
            red,
            green,
            blue,
            alpha,
        }
    }

    /// The notation this colour was parsed from.
    #[inline]
    pub fn source_format(&self) -> Format {
        self.source_format
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Opacity in 0.0..=1.0 (1.0 is fully opaque).
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Channels as `[red, green, blue]`.
    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// True when alpha is exactly 1.0.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }

    /// Render this colour in the given notation.
    ///
    /// - [`Format::Hex`]: `#rrggbb`, or `#rrggbbaa` when not fully opaque
    /// - [`Format::Rgb`]: `rgb(r, g, b)`, alpha is dropped
    /// - [`Format::Rgba`]: `rgba(r, g, b, a)` with alpha at two decimals
    /// - [`Format::Srgb`]: `color(srgb r g b)` with six-decimal fractions
    pub fn to(&self, format: Format) -> String {
        let [r, g, b] = self.channels();
        match format {
            Format::Hex if self.is_opaque() => format!("#{}", hex::encode([r, g, b])),
            Format::Hex => format!("#{}", hex::encode([r, g, b, alpha_to_byte(self.alpha)])),
            Format::Rgb => format!("rgb({r}, {g}, {b})"),
            Format::Rgba => {
                format!("rgba({r}, {g}, {b}, {:.2})", round_half_up(self.alpha, 2))
            }
            Format::Srgb => format!(
                "color(srgb {:.6} {:.6} {:.6})",
                round_half_up(channel_to_fraction(r), 6),
                round_half_up(channel_to_fraction(g), 6),
                round_half_up(channel_to_fraction(b), 6),
            ),
        }
    }

    /// Debug string with the source format and every rendering.
    ///
    /// ```
    /// let colour = colourfmt::parse("#ff00cc").unwrap();
    /// assert_eq!(
    ///     colour.describe(),
    ///     "F:0 (hex), Hex: #ff00cc, Rgb: rgb(255, 0, 204), \
    ///      Rgba: rgba(255, 0, 204, 1.00), Srgb: color(srgb 1.000000 0.000000 0.800000)"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        format!(
            "F:{} ({}), Hex: {}, Rgb: {}, Rgba: {}, Srgb: {}",
            self.source_format.ordinal(),
            self.source_format.name(),
            self.to(Format::Hex),
            self.to(Format::Rgb),
            self.to(Format::Rgba),
            self.to(Format::Srgb),
        )
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl FromStr for Colour {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Colour> for String {
    /// The rendering in the source format, except that an rgba alpha
    /// shown as `1.00` is written `1`, the only form `parse` accepts.
    fn from(colour: Colour) -> Self {
        match colour.source_format {
            Format::Rgba if round_half_up(colour.alpha, 2) >= 1.0 => {
                let [r, g, b] = colour.channels();
                format!("rgba({r}, {g}, {b}, 1)")
            }
            format => colour.to(format),
        }
    }
}
