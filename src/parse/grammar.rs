//! Grammar table used for the upfront validation pass.
//!
//! Each notation has its own anchored pattern. Patterns expect input that is
//! already trimmed and lower-cased.

use std::sync::LazyLock;

use regex::Regex;

use crate::colour::Format;

struct Grammar {
    format: Format,
    pattern: Regex,
}

impl Grammar {
    fn new(format: Format, pattern: &str) -> Self {
        Self {
            format,
            pattern: Regex::new(pattern).expect("valid grammar pattern"),
        }
    }
}

static GRAMMARS: LazyLock<[Grammar; 4]> = LazyLock::new(|| {
    [
        Grammar::new(Format::Hex, r"^#(?:[0-9a-f]{6}|[0-9a-f]{8})$"),
        Grammar::new(
            Format::Rgb,
            r"^rgb\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)$",
        ),
        Grammar::new(
            Format::Rgba,
            r"^rgba\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*(?:0|1|0\.\d+)\s*\)$",
        ),
        // `1.000` is accepted alongside `1` so fractions stay within 0..=1
        Grammar::new(
            Format::Srgb,
            r"^color\s*\(\s*srgb(?:\s+(?:0|1|0\.\d+|1\.0+)){3}\s*\)$",
        ),
    ]
});

/// Return the format whose grammar matches `input`, trying each in turn.
pub(super) fn recognize(input: &str) -> Option<Format> {
    GRAMMARS
        .iter()
        .find(|grammar| grammar.pattern.is_match(input))
        .map(|grammar| grammar.format)
}
