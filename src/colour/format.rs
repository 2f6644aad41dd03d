//! The four textual colour notations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownFormat;

/// A textual colour notation.
///
/// Ordinals are stable (they appear in [`Colour::describe`](super::Colour::describe)
/// output) and follow declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `#rrggbb` or `#rrggbbaa`
    Hex = 0,
    /// `rgb(r, g, b)`
    Rgb = 1,
    /// `rgba(r, g, b, a)`
    Rgba = 2,
    /// `color(srgb r g b)` with 0..=1 fractions
    Srgb = 3,
}

impl Format {
    /// All formats in ordinal order.
    pub const ALL: [Format; 4] = [Format::Hex, Format::Rgb, Format::Rgba, Format::Srgb];

    #[inline]
    pub fn ordinal(self) -> u8 {
        match self {
            Format::Hex => 0,
            Format::Rgb => 1,
            Format::Rgba => 2,
            Format::Srgb => 3,
        }
    }

    /// Lowercase name, as used in debug strings and serialized config.
    pub fn name(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Srgb => "srgb",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
