//! Hex color parsing for the cover palettes.
//!
//! Renderers blend the category colors with transparency (`rgba(...)`), so
//! every `#RRGGBB` value is also needed as a decimal `r, g, b` triple.

use std::fmt;

/// An opaque sRGB color parsed from a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a six-digit hex color. The leading `#` is optional, case is ignored.
    ///
    /// Returns `None` for anything else (short `#abc` forms, named colors,
    /// stray whitespace).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Decimal triple for use inside `rgba()`, e.g. `139, 92, 246`.
    pub fn triplet(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Formats as uppercase `#RRGGBB`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
