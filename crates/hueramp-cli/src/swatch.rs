//! Terminal color swatches for printed palettes.

use console::Style;
use hueramp::Color;

const SWATCH: &str = "      ";

/// Maps a color onto the xterm 256-color palette.
///
/// Grays go to the 24-step grayscale ramp (232-255), with near-black and
/// near-white snapped to the cube corners. Everything else lands in the
/// 6x6x6 cube (16-231).
pub fn to_ansi256(color: Color) -> u8 {
    let Color { r, g, b, .. } = color;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let level = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * level(r) + 6 * level(g) + level(b)
    }
}

/// A block of background color, or nothing when color is off.
pub fn swatch(color: Color, use_color: bool) -> String {
    if !use_color {
        return String::new();
    }
    Style::new()
        .on_color256(to_ansi256(color))
        .force_styling(true)
        .apply_to(SWATCH)
        .to_string()
}
