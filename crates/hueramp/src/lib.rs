//! # Hueramp - Tonal Palettes From a Single Seed Color
//!
//! `hueramp` is a small color-science engine. It converts between sRGB,
//! HSL, CIE XYZ, CIE L\*a\*b\* and LCH, interpolates in RGB, LAB or XYZ,
//! blends layers with the classic compositing modes and, on top of those,
//! derives an N-step light-to-dark ramp around a seed color.
//!
//! ## Core Concepts
//!
//! - [`Color`]: 8-bit ARGB value, parsed from and printed as `#RRGGBB`
//! - [`NormalizedRgb`], [`Hsl`], [`Xyz`], [`Lab`], [`Lch`]: float color spaces
//! - [`InterpolationMode`]: the space used to mix two colors
//! - [`BlendMode`]: per-channel compositing of a top layer over a bottom one
//! - [`ColorScale`]: a piecewise gradient through positioned stops
//! - [`ColorPalette`]: the recipe that turns a seed into a tonal ramp
//! - [`ThemeResources`]: named light/dark theme slots picked from palettes
//!
//! ## Quick Start
//!
//! ```rust
//! use hueramp::{Color, ColorPalette};
//!
//! let seed: Color = "#0078D7".parse().unwrap();
//! let colors = ColorPalette::with_seed(seed).generate_palette().unwrap();
//!
//! assert_eq!(colors.len(), 11);
//! assert_eq!(colors[5], seed);
//! assert_eq!(colors[0].to_string(), "#93CFFB");
//! ```
//!
//! ## Scales
//!
//! ```rust
//! use hueramp::{Color, ColorScale, InterpolationMode};
//!
//! let scale = ColorScale::new([Color::WHITE, Color::BLACK]).unwrap();
//! let mid = scale.get_color(0.5, InterpolationMode::Lab);
//! assert_eq!(mid, Color::from_rgb(119, 119, 119));
//!
//! let trimmed = scale.trim(0.25, 0.75, InterpolationMode::Rgb).unwrap();
//! assert_eq!(trimmed.len(), 2);
//! ```
//!
//! ## Conversions
//!
//! Every conversion takes a [`Rounding`]. [`Rounding::DEFAULT`] rounds each
//! component to five decimal places; [`Rounding::Exact`] keeps full precision.
//!
//! ```rust
//! use hueramp::{convert, Color, Rounding};
//!
//! let hsl = convert::color_to_hsl(Color::from_rgb(0, 120, 215), Rounding::DEFAULT);
//! assert!((hsl.h - 206.51163).abs() < 1e-9);
//! assert_eq!(hsl.s, 1.0);
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: palette adjustments at
//! `debug` level and scale trimming at `trace` level. Install any logger in
//! the host binary to see them.

pub mod blend;
mod color;
mod config;
pub mod convert;
mod error;
pub mod math;
pub mod palette;
pub mod scale;
mod space;
pub mod theme;

// Error types
pub use error::{PaletteError, Result};

// Color values and spaces
pub use color::Color;
pub use space::{Hsl, Lab, Lch, NormalizedRgb, Rounding, Xyz, DEFAULT_ROUNDING_DIGITS};

// Conversion and interpolation
pub use convert::{interpolate, interpolate_colors, InterpolationMode};

// Blending
pub use blend::{saturate_via_lch, BlendMode};

// Scales and palettes
pub use palette::{ColorPalette, PaletteEndpoints};
pub use scale::{ColorScale, ColorScaleStop};

// Theme derivation
pub use theme::{PaletteResources, ThemeConfig, ThemeResources, ThemeSeeds, ThemeVariant};
