//! Floating-point color space value types.
//!
//! Each type is an immutable triple of `f64` with component-wise equality.
//! Construction applies a [`Rounding`] policy: the plain `new` constructors
//! round to [`DEFAULT_ROUNDING_DIGITS`] fractional digits, and conversion
//! chains pass [`Rounding::Exact`] for intermediates so rounding error does
//! not compound.
//!
//! | Type | Components | Nominal domain |
//! |------|------------|----------------|
//! | [`NormalizedRgb`] | r, g, b | `[0, 1]`, may stray outside during blending |
//! | [`Hsl`] | h, s, l | h in `[0, 360)`, s and l in `[0, 1]` |
//! | [`Lab`] | l, a, b | l in `[0, 100]`, a and b unbounded |
//! | [`Lch`] | l, c, h | l in `[0, 100]`, c >= 0, h in `[0, 360)` |
//! | [`Xyz`] | x, y, z | D65, white is `(0.95047, 1.0, 1.08883)` |

use std::fmt;

use crate::color::Color;
use crate::math::{clamp_to_byte, round_to};

/// Fractional digits kept by the default constructors.
pub const DEFAULT_ROUNDING_DIGITS: u8 = 5;

/// Rounding applied to each component when a color space value is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Keep components as computed.
    Exact,
    /// Round each component to this many fractional digits (half-to-even).
    Digits(u8),
}

impl Rounding {
    pub const DEFAULT: Rounding = Rounding::Digits(DEFAULT_ROUNDING_DIGITS);

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Exact => value,
            Rounding::Digits(digits) => round_to(value, digits),
        }
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Rounding::DEFAULT
    }
}

macro_rules! color_space {
    (
        $(#[$meta:meta])*
        $name:ident { $c0:ident, $c1:ident, $c2:ident }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            pub $c0: f64,
            pub $c1: f64,
            pub $c2: f64,
        }

        impl $name {
            /// Builds a value rounded with [`Rounding::DEFAULT`].
            pub fn new($c0: f64, $c1: f64, $c2: f64) -> Self {
                Self::with_rounding($c0, $c1, $c2, Rounding::DEFAULT)
            }

            /// Builds a value without rounding.
            pub fn exact($c0: f64, $c1: f64, $c2: f64) -> Self {
                Self { $c0, $c1, $c2 }
            }

            pub fn with_rounding($c0: f64, $c1: f64, $c2: f64, rounding: Rounding) -> Self {
                Self {
                    $c0: rounding.apply($c0),
                    $c1: rounding.apply($c1),
                    $c2: rounding.apply($c2),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{},{},{}", self.$c0, self.$c1, self.$c2)
            }
        }
    };
}

color_space! {
    /// RGB with each channel divided by 255.
    ///
    /// Channels are nominally in `[0, 1]` but are allowed outside that range
    /// in the middle of a calculation, as long as they are clamped by the
    /// time the value is [denormalized](NormalizedRgb::denormalize).
    NormalizedRgb { r, g, b }
}

color_space! {
    /// Hue (degrees), saturation and lightness.
    Hsl { h, s, l }
}

color_space! {
    /// CIE 1976 L\*a\*b\*, D65 2° observer.
    Lab { l, a, b }
}

color_space! {
    /// Polar form of [`Lab`]: lightness, chroma and hue in degrees.
    ///
    /// Hue is unstable near zero chroma: a tiny sign flip in `a` or `b`
    /// moves it by roughly 180°.
    Lch { l, c, h }
}

color_space! {
    /// CIE 1931 XYZ, D65.
    Xyz { x, y, z }
}

impl NormalizedRgb {
    /// Normalizes the color channels of `color`, ignoring alpha.
    pub fn from_color(color: Color, rounding: Rounding) -> Self {
        Self::with_rounding(
            color.r as f64 / 255.0,
            color.g as f64 / 255.0,
            color.b as f64 / 255.0,
            rounding,
        )
    }

    /// Converts back to 8-bit channels, rounding and clamping each one.
    pub fn denormalize(&self, alpha: u8) -> Color {
        Color::from_argb(
            alpha,
            clamp_to_byte(self.r * 255.0),
            clamp_to_byte(self.g * 255.0),
            clamp_to_byte(self.b * 255.0),
        )
    }

    /// Opaque [`denormalize`](NormalizedRgb::denormalize).
    pub fn to_color(&self) -> Color {
        self.denormalize(0xFF)
    }
}

impl From<Color> for NormalizedRgb {
    fn from(color: Color) -> Self {
        NormalizedRgb::from_color(color, Rounding::DEFAULT)
    }
}
