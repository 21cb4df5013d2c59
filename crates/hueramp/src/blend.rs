//! Photo-compositing blend modes and LCH saturation adjustment.
//!
//! Blends work channel by channel on [`NormalizedRgb`] with a `bottom`
//! (backdrop) and a `top` (source) layer. Inputs are not clamped before
//! combining; only overlay and dodge clamp their output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{lch_to_rgb, rgb_to_lch};
use crate::error::PaletteError;
use crate::math::clamp_to_unit;
use crate::space::{Lch, NormalizedRgb, Rounding};

/// Chroma added per unit of saturation by [`saturate_via_lch`].
pub const DEFAULT_SATURATION_CONSTANT: f64 = 18.0;

/// Blend mode for combining two layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    Burn,
    Darken,
    Dodge,
    Lighten,
    Multiply,
    Overlay,
    Screen,
}

impl BlendMode {
    pub const ALL: [BlendMode; 7] = [
        BlendMode::Burn,
        BlendMode::Darken,
        BlendMode::Dodge,
        BlendMode::Lighten,
        BlendMode::Multiply,
        BlendMode::Overlay,
        BlendMode::Screen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlendMode::Burn => "burn",
            BlendMode::Darken => "darken",
            BlendMode::Dodge => "dodge",
            BlendMode::Lighten => "lighten",
            BlendMode::Multiply => "multiply",
            BlendMode::Overlay => "overlay",
            BlendMode::Screen => "screen",
        }
    }

    /// Blends a single channel in `[0, 1]`.
    pub fn channel(&self, bottom: f64, top: f64) -> f64 {
        match self {
            BlendMode::Burn => burn(bottom, top),
            BlendMode::Darken => bottom.min(top),
            BlendMode::Dodge => dodge(bottom, top),
            BlendMode::Lighten => bottom.max(top),
            BlendMode::Multiply => bottom * top,
            BlendMode::Overlay => overlay(bottom, top),
            BlendMode::Screen => 1.0 - (1.0 - top) * (1.0 - bottom),
        }
    }

    /// Blends `top` over `bottom`.
    pub fn blend(&self, bottom: NormalizedRgb, top: NormalizedRgb) -> NormalizedRgb {
        NormalizedRgb::exact(
            self.channel(bottom.r, top.r),
            self.channel(bottom.g, top.g),
            self.channel(bottom.b, top.b),
        )
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or_else(|| PaletteError::UnknownBlendMode(s.to_string()))
    }
}

fn burn(bottom: f64, top: f64) -> f64 {
    // Zero, not the limit of 1, at the discontinuity.
    if top == 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - bottom) / top
}

fn dodge(bottom: f64, top: f64) -> f64 {
    if top >= 1.0 {
        return 1.0;
    }
    (bottom / (1.0 - top)).min(1.0)
}

fn overlay(bottom: f64, top: f64) -> f64 {
    if bottom < 0.5 {
        clamp_to_unit(2.0 * top * bottom)
    } else {
        clamp_to_unit(1.0 - 2.0 * (1.0 - top) * (1.0 - bottom))
    }
}

/// Convenience dispatcher, equivalent to `mode.blend(bottom, top)`.
pub fn blend(bottom: NormalizedRgb, top: NormalizedRgb, mode: BlendMode) -> NormalizedRgb {
    mode.blend(bottom, top)
}

/// Raises LCH chroma by `saturation * saturation_constant`, flooring at 0.
///
/// Negative `saturation` desaturates.
pub fn saturate_via_lch_with(
    input: NormalizedRgb,
    saturation: f64,
    saturation_constant: f64,
) -> NormalizedRgb {
    let lch = rgb_to_lch(input, Rounding::Exact);
    let chroma = (lch.c + saturation * saturation_constant).max(0.0);
    lch_to_rgb(Lch::exact(lch.l, chroma, lch.h), Rounding::Exact)
}

/// [`saturate_via_lch_with`] using [`DEFAULT_SATURATION_CONSTANT`].
pub fn saturate_via_lch(input: NormalizedRgb, saturation: f64) -> NormalizedRgb {
    saturate_via_lch_with(input, saturation, DEFAULT_SATURATION_CONSTANT)
}
