//! The 8-bit ARGB color exchanged with callers.
//!
//! Every floating-point color space in this crate is an implementation
//! detail; scales and palettes take and return [`Color`].
//!
//! Colors parse from and print as hex strings:
//!
//! - `#rgb` (each digit doubled, opaque)
//! - `#rrggbb` (opaque)
//! - `#aarrggbb`
//!
//! ```rust
//! use hueramp::Color;
//!
//! let accent: Color = "#0078d7".parse().unwrap();
//! assert_eq!(accent, Color::from_rgb(0, 120, 215));
//! assert_eq!(accent.to_string(), "#0078D7");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaletteError;
use crate::math::lerp_byte;

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::from_rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::from_argb(0x00, 0xFF, 0xFF, 0xFF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Channel-wise interpolation of all four channels in 8-bit space.
    ///
    /// Returns `left` for `t <= 0` and `right` for `t >= 1`.
    pub fn interpolate(left: Color, right: Color, t: f64) -> Color {
        if t <= 0.0 {
            return left;
        }
        if t >= 1.0 {
            return right;
        }

        Color::from_argb(
            lerp_byte(left.a, right.a, t),
            lerp_byte(left.r, right.r, t),
            lerp_byte(left.g, right.g, t),
            lerp_byte(left.b, right.b, t),
        )
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            // #rgb -> #rrggbb
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                Some(Color::from_rgb(
                    digit(0)? * 17,
                    digit(1)? * 17,
                    digit(2)? * 17,
                ))
            }
            6 => Some(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::from_argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        Self::parse_hex(hex).ok_or_else(|| PaletteError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
