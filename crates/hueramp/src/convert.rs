//! Conversions between the color spaces in [`crate::space`].
//!
//! Everything is reachable from RGB:
//!
//! ```text
//! HSL <- RGB <-> XYZ <-> LAB <-> LCH
//! ```
//!
//! Every conversion takes a [`Rounding`] for its output. Chained conversions
//! compute their intermediates with [`Rounding::Exact`] and only round the
//! final value, so error does not accumulate across hops.
//!
//! XYZ and LAB use the D65 2° white point `(0.95047, 1.0, 1.08883)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::PaletteError;
use crate::math::{clamp_to_unit, degrees_to_radians, lerp, radians_to_degrees};
use crate::space::{Hsl, Lab, Lch, NormalizedRgb, Rounding, Xyz};

/// D65 reference white point for CIE XYZ <-> LAB.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Precision LAB is rounded to before taking its polar form.
///
/// Rounding here snaps near-zero `a`/`b` to zero so that `atan2` does not
/// see sign noise on achromatic colors.
const LCH_LAB_DIGITS: u8 = 4;

/// Color space in which two colors are mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Straight channel mixing on gamma-encoded sRGB.
    #[default]
    Rgb,
    /// Mixing in CIE LAB; perceptually more even.
    Lab,
    /// Mixing in CIE XYZ; holds up better than LAB for very dark colors.
    Xyz,
}

impl InterpolationMode {
    pub const ALL: [InterpolationMode; 3] = [
        InterpolationMode::Rgb,
        InterpolationMode::Lab,
        InterpolationMode::Xyz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMode::Rgb => "rgb",
            InterpolationMode::Lab => "lab",
            InterpolationMode::Xyz => "xyz",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(InterpolationMode::Rgb),
            "lab" => Ok(InterpolationMode::Lab),
            "xyz" => Ok(InterpolationMode::Xyz),
            _ => Err(PaletteError::UnknownInterpolationMode(s.to_string())),
        }
    }
}

// ─── RGB <-> HSL ────────────────────────────────────────────────────────────

/// Converts to HSL with the min/max/delta hue-sector formula.
pub fn rgb_to_hsl(rgb: NormalizedRgb, rounding: Rounding) -> Hsl {
    let max = rgb.r.max(rgb.g.max(rgb.b));
    let min = rgb.r.min(rgb.g.min(rgb.b));
    let delta = max - min;

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == rgb.r {
        60.0 * (((rgb.g - rgb.b) / delta) % 6.0)
    } else if max == rgb.g {
        60.0 * ((rgb.b - rgb.r) / delta + 2.0)
    } else {
        60.0 * ((rgb.r - rgb.g) / delta + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let lightness = (max + min) / 2.0;
    let saturation = if delta != 0.0 {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    } else {
        0.0
    };

    Hsl::with_rounding(hue, saturation, lightness, rounding)
}

/// HSL of an 8-bit color; alpha is ignored.
pub fn color_to_hsl(color: Color, rounding: Rounding) -> Hsl {
    rgb_to_hsl(NormalizedRgb::from_color(color, Rounding::Exact), rounding)
}

// ─── RGB <-> XYZ ────────────────────────────────────────────────────────────

/// Gamma-encoded sRGB channel to linear light.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light to gamma-encoded sRGB channel, unclamped.
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub fn rgb_to_xyz(rgb: NormalizedRgb, rounding: Rounding) -> Xyz {
    let r = srgb_to_linear(rgb.r);
    let g = srgb_to_linear(rgb.g);
    let b = srgb_to_linear(rgb.b);

    // sRGB -> XYZ (D65)
    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    Xyz::with_rounding(x, y, z, rounding)
}

/// Converts to RGB, clamping every channel into `[0, 1]`.
pub fn xyz_to_rgb(xyz: Xyz, rounding: Rounding) -> NormalizedRgb {
    // XYZ -> linear RGB (D65)
    let r = linear_to_srgb(xyz.x * 3.2404542 - xyz.y * 1.5371385 - xyz.z * 0.4985314);
    let g = linear_to_srgb(xyz.x * -0.9692660 + xyz.y * 1.8760108 + xyz.z * 0.0415560);
    let b = linear_to_srgb(xyz.x * 0.0556434 - xyz.y * 0.2040259 + xyz.z * 1.0572252);

    NormalizedRgb::with_rounding(
        clamp_to_unit(r),
        clamp_to_unit(g),
        clamp_to_unit(b),
        rounding,
    )
}

/// XYZ of an 8-bit color; alpha is ignored.
pub fn color_to_xyz(color: Color, rounding: Rounding) -> Xyz {
    rgb_to_xyz(NormalizedRgb::from_color(color, Rounding::Exact), rounding)
}

// ─── XYZ <-> LAB ────────────────────────────────────────────────────────────

/// LAB forward transform helper.
fn lab_f(t: f64) -> f64 {
    if t > 0.008856452 {
        t.cbrt()
    } else {
        t / 0.12841855 + 0.137931034
    }
}

/// LAB inverse transform helper.
fn lab_f_inv(t: f64) -> f64 {
    if t > 0.206896552 {
        t * t * t
    } else {
        0.12841855 * (t - 0.137931034)
    }
}

pub fn xyz_to_lab(xyz: Xyz, rounding: Rounding) -> Lab {
    let fx = lab_f(xyz.x / XN);
    let fy = lab_f(xyz.y / YN);
    let fz = lab_f(xyz.z / ZN);

    Lab::with_rounding(
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        -200.0 * (fz - fy),
        rounding,
    )
}

pub fn lab_to_xyz(lab: Lab, rounding: Rounding) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz::with_rounding(
        XN * lab_f_inv(fx),
        YN * lab_f_inv(fy),
        ZN * lab_f_inv(fz),
        rounding,
    )
}

// ─── RGB <-> LAB ────────────────────────────────────────────────────────────

pub fn rgb_to_lab(rgb: NormalizedRgb, rounding: Rounding) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb, Rounding::Exact), rounding)
}

pub fn lab_to_rgb(lab: Lab, rounding: Rounding) -> NormalizedRgb {
    xyz_to_rgb(lab_to_xyz(lab, Rounding::Exact), rounding)
}

/// LAB of an 8-bit color; alpha is ignored.
pub fn color_to_lab(color: Color, rounding: Rounding) -> Lab {
    rgb_to_lab(NormalizedRgb::from_color(color, Rounding::Exact), rounding)
}

// ─── LAB <-> LCH ────────────────────────────────────────────────────────────

/// Polar form of LAB. Hue is `atan2(b, a)` in degrees, wrapped into `[0, 360)`.
///
/// Chroma has a discontinuity at zero: `a = 1e-7` and `a = -1e-7` give hues
/// 180° apart. Callers starting from RGB should use [`rgb_to_lch`], which
/// snaps that noise away first.
pub fn lab_to_lch(lab: Lab, rounding: Rounding) -> Lch {
    let h = (radians_to_degrees(lab.b.atan2(lab.a)) + 360.0) % 360.0;
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();

    Lch::with_rounding(lab.l, c, h, rounding)
}

/// Cartesian form of LCH. A hue of exactly `0` is read as "no hue" and
/// yields `a = b = 0` whatever the chroma.
pub fn lch_to_lab(lch: Lch, rounding: Rounding) -> Lab {
    let (a, b) = if lch.h != 0.0 {
        let h = degrees_to_radians(lch.h);
        (h.cos() * lch.c, h.sin() * lch.c)
    } else {
        (0.0, 0.0)
    };

    Lab::with_rounding(lch.l, a, b, rounding)
}

/// Converts to LCH via a LAB value rounded to 4 digits.
///
/// The intermediate rounding is applied even for [`Rounding::Exact`]: without
/// it, white lands on a hue of 180° because `a` comes out as a tiny negative
/// number.
pub fn rgb_to_lch(rgb: NormalizedRgb, rounding: Rounding) -> Lch {
    let lab = rgb_to_lab(rgb, Rounding::Digits(LCH_LAB_DIGITS));

    // -0.0 must become +0.0 before atan2
    let l = if lab.l == 0.0 { 0.0 } else { lab.l };
    let a = if lab.a == 0.0 { 0.0 } else { lab.a };
    let b = if lab.b == 0.0 { 0.0 } else { lab.b };

    lab_to_lch(Lab::exact(l, a, b), rounding)
}

pub fn lch_to_rgb(lch: Lch, rounding: Rounding) -> NormalizedRgb {
    lab_to_rgb(lch_to_lab(lch, Rounding::Exact), rounding)
}

// ─── Interpolation ──────────────────────────────────────────────────────────

/// Channel-wise mix; returns an endpoint exactly outside `(0, 1)`.
pub fn interpolate_rgb(left: NormalizedRgb, right: NormalizedRgb, t: f64) -> NormalizedRgb {
    if t <= 0.0 {
        return left;
    }
    if t >= 1.0 {
        return right;
    }

    NormalizedRgb::exact(
        lerp(left.r, right.r, t),
        lerp(left.g, right.g, t),
        lerp(left.b, right.b, t),
    )
}

pub fn interpolate_lab(left: Lab, right: Lab, t: f64) -> Lab {
    if t <= 0.0 {
        return left;
    }
    if t >= 1.0 {
        return right;
    }

    Lab::exact(
        lerp(left.l, right.l, t),
        lerp(left.a, right.a, t),
        lerp(left.b, right.b, t),
    )
}

pub fn interpolate_xyz(left: Xyz, right: Xyz, t: f64) -> Xyz {
    if t <= 0.0 {
        return left;
    }
    if t >= 1.0 {
        return right;
    }

    Xyz::exact(
        lerp(left.x, right.x, t),
        lerp(left.y, right.y, t),
        lerp(left.z, right.z, t),
    )
}

/// Mixes two normalized colors in the space selected by `mode`.
///
/// LAB and XYZ results are converted back with default rounding; RGB mixing
/// is left unrounded.
pub fn interpolate(
    left: NormalizedRgb,
    right: NormalizedRgb,
    t: f64,
    mode: InterpolationMode,
) -> NormalizedRgb {
    match mode {
        InterpolationMode::Lab => {
            let left = rgb_to_lab(left, Rounding::Exact);
            let right = rgb_to_lab(right, Rounding::Exact);
            lab_to_rgb(interpolate_lab(left, right, t), Rounding::DEFAULT)
        }
        InterpolationMode::Xyz => {
            let left = rgb_to_xyz(left, Rounding::Exact);
            let right = rgb_to_xyz(right, Rounding::Exact);
            xyz_to_rgb(interpolate_xyz(left, right, t), Rounding::DEFAULT)
        }
        InterpolationMode::Rgb => interpolate_rgb(left, right, t),
    }
}

/// Mixes two 8-bit colors in the space selected by `mode`.
///
/// RGB mode mixes all four bytes, alpha included. LAB and XYZ mixing work on
/// the color channels only and produce an opaque result.
pub fn interpolate_colors(left: Color, right: Color, t: f64, mode: InterpolationMode) -> Color {
    match mode {
        InterpolationMode::Lab => {
            let left = color_to_lab(left, Rounding::Exact);
            let right = color_to_lab(right, Rounding::Exact);
            lab_to_rgb(interpolate_lab(left, right, t), Rounding::Exact).to_color()
        }
        InterpolationMode::Xyz => {
            let left = color_to_xyz(left, Rounding::Exact);
            let right = color_to_xyz(right, Rounding::Exact);
            xyz_to_rgb(interpolate_xyz(left, right, t), Rounding::Exact).to_color()
        }
        InterpolationMode::Rgb => Color::interpolate(left, right, t),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
