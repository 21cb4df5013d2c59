//! Scalar helpers shared by the converters, blends and scales.
//!
//! All rounding here is half-to-even, so `2.5` rounds to `2` and `3.5` to `4`.

use std::f64::consts::PI;

/// Largest number of fractional digits [`round_to`] honours.
pub const MAX_ROUNDING_DIGITS: u8 = 15;

/// Rounds to the nearest integer and clamps into `0..=255`.
///
/// NaN and negative infinity map to `0`, positive infinity to `255`.
pub fn clamp_to_byte(c: f64) -> u8 {
    if c.is_nan() || c == f64::NEG_INFINITY {
        return 0;
    }
    if c == f64::INFINITY {
        return 255;
    }

    let c = c.round_ties_even();
    if c <= 0.0 {
        0
    } else if c >= 255.0 {
        255
    } else {
        c as u8
    }
}

/// Clamps into `[0, 1]`.
///
/// NaN and negative infinity map to `0`, positive infinity to `1`.
pub fn clamp_to_unit(c: f64) -> f64 {
    if c.is_nan() || c == f64::NEG_INFINITY {
        return 0.0;
    }
    if c == f64::INFINITY {
        return 1.0;
    }

    if c <= 0.0 {
        0.0
    } else if c >= 1.0 {
        1.0
    } else {
        c
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Linear interpolation that returns the endpoints exactly outside `(0, 1)`.
pub fn lerp(left: f64, right: f64, t: f64) -> f64 {
    if t <= 0.0 {
        left
    } else if t >= 1.0 {
        right
    } else {
        left + t * (right - left)
    }
}

/// Byte-channel interpolation, rounded to the nearest integer.
pub fn lerp_byte(left: u8, right: u8, t: f64) -> u8 {
    if t <= 0.0 || left == right {
        left
    } else if t >= 1.0 {
        right
    } else {
        let l = left as f64;
        let r = right as f64;
        (l + t * (r - l)).round_ties_even() as u8
    }
}

/// Rounds `value` to `digits` fractional digits, half-to-even.
///
/// `digits` above [`MAX_ROUNDING_DIGITS`] are treated as the maximum.
pub fn round_to(value: f64, digits: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let digits = digits.min(MAX_ROUNDING_DIGITS);
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}
