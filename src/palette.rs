//! Fixed color palette and direction glyphs

use serde::{Serialize, Serializer};
use std::fmt;

/// 24-bit RGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Color scheme for the delta chart
pub struct Palette;

impl Palette {
    /// Previous-period bars
    pub const NEUTRAL: Color = Color::rgb(0xcc, 0xd3, 0xd5);
    /// Current bars and labels with a positive delta
    pub const POSITIVE: Color = Color::rgb(0x32, 0xd5, 0x74);
    /// Current bars and labels with a zero or negative delta
    pub const NEGATIVE: Color = Color::rgb(0xfe, 0x28, 0x44);
    /// Axis labels and gridlines
    pub const AXIS: Color = Color::rgb(0x80, 0x80, 0x80);
    /// Value labels drawn inside bars
    pub const INSET_TEXT: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Color for a percent delta; zero counts as non-positive
    pub fn for_delta(delta: i64) -> Color {
        if delta > 0 {
            Self::POSITIVE
        } else {
            Self::NEGATIVE
        }
    }
}

/// Directional indicator appended to delta labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Up,
    Down,
}

impl Glyph {
    pub fn for_delta(delta: i64) -> Self {
        if delta > 0 { Glyph::Up } else { Glyph::Down }
    }

    pub fn as_char(&self) -> char {
        match self {
            Glyph::Up => '\u{1F815}',
            Glyph::Down => '\u{1F817}',
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
