//! Color scales: colors anchored at fractional positions in `[0, 1]`.
//!
//! A [`ColorScale`] is sampled with [`get_color`](ColorScale::get_color),
//! which finds the stops surrounding a position and mixes them in the
//! requested [`InterpolationMode`]. [`trim`](ColorScale::trim) zooms into a
//! sub-range, producing a new scale that spans `[0, 1]` again.
//!
//! Stops are kept in the order given. Sampling assumes ascending positions;
//! unsorted stops are not rejected or reordered, and sampling them gives
//! whatever the scan below happens to find.
//!
//! ```rust
//! use hueramp::{Color, ColorScale, InterpolationMode};
//!
//! let scale = ColorScale::new([Color::WHITE, Color::BLACK]).unwrap();
//! let mid = scale.get_color(0.5, InterpolationMode::Rgb);
//! assert_eq!(mid, Color::from_rgb(128, 128, 128));
//!
//! let dark_half = scale.trim(0.5, 1.0, InterpolationMode::Rgb).unwrap();
//! assert_eq!(dark_half.get_color(0.0, InterpolationMode::Rgb), mid);
//! ```

use log::trace;

use crate::color::Color;
use crate::convert::{interpolate_colors, InterpolationMode};
use crate::error::{PaletteError, Result};

/// A color anchored at a position on a [`ColorScale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScaleStop {
    pub color: Color,
    pub position: f64,
}

impl ColorScaleStop {
    pub fn new(color: Color, position: f64) -> Self {
        Self { color, position }
    }
}

/// An ordered, non-empty sequence of [`ColorScaleStop`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<ColorScaleStop>,
}

impl ColorScale {
    /// Spreads `colors` evenly over `[0, 1]`.
    ///
    /// The first color sits at exactly `0` and the last at exactly `1`.
    /// A single color sits at `0`.
    pub fn new<I>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(PaletteError::EmptyScale);
        }

        let count = colors.len();
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(index, color)| {
                let position = if index == 0 {
                    0.0
                } else if index == count - 1 {
                    1.0
                } else {
                    index as f64 * (1.0 / (count - 1) as f64)
                };
                ColorScaleStop::new(color, position)
            })
            .collect();

        Ok(Self { stops })
    }

    /// Builds a scale from explicit stops, kept in the given order.
    pub fn from_stops<I>(stops: I) -> Result<Self>
    where
        I: IntoIterator<Item = ColorScaleStop>,
    {
        let stops: Vec<ColorScaleStop> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(PaletteError::EmptyScale);
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[ColorScaleStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; a scale has at least one stop.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    fn first(&self) -> &ColorScaleStop {
        &self.stops[0]
    }

    fn last(&self) -> &ColorScaleStop {
        &self.stops[self.stops.len() - 1]
    }

    /// Samples the scale at `position`.
    ///
    /// - one stop: that stop's color, whatever the position
    /// - `position <= 0`: the first stop's color
    /// - `position >= 1`: the last stop's color
    ///
    /// Otherwise the lower bound is the highest-indexed stop at or before
    /// `position` (so among equal positions the later stop wins) and the upper
    /// bound is the stop after it.
    pub fn get_color(&self, position: f64, mode: InterpolationMode) -> Color {
        if self.stops.len() == 1 || position <= 0.0 {
            return self.first().color;
        }
        if position >= 1.0 {
            return self.last().color;
        }

        let lower_index = self
            .stops
            .iter()
            .rposition(|stop| stop.position <= position)
            .unwrap_or(0);
        let upper_index = (lower_index + 1).min(self.stops.len() - 1);

        let lower = &self.stops[lower_index];
        let upper = &self.stops[upper_index];
        if upper_index == lower_index {
            return lower.color;
        }

        let local = (position - lower.position) * (1.0 / (upper.position - lower.position));
        interpolate_colors(lower.color, upper.color, local, mode)
    }

    /// Remaps `[lower, upper]` of this scale onto `[0, 1]`.
    ///
    /// Stops inside the range are kept; boundary stops are sampled and added
    /// where no stop sits exactly on a bound. `lower == upper` gives a
    /// single-stop scale holding the color at that point.
    ///
    /// Returns [`PaletteError::InvalidTrimBounds`] unless
    /// `0 <= lower <= upper <= 1`.
    pub fn trim(&self, lower: f64, upper: f64, mode: InterpolationMode) -> Result<ColorScale> {
        if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || upper < lower {
            return Err(PaletteError::InvalidTrimBounds { lower, upper });
        }

        if lower == upper {
            return ColorScale::new([self.get_color(lower, mode)]);
        }

        let mut contained: Vec<ColorScaleStop> = self
            .stops
            .iter()
            .filter(|stop| stop.position >= lower && stop.position <= upper)
            .copied()
            .collect();

        if contained.is_empty() {
            trace!("trim [{}, {}] holds no stops, sampling both bounds", lower, upper);
            return ColorScale::new([self.get_color(lower, mode), self.get_color(upper, mode)]);
        }

        if contained[0].position != lower {
            trace!("trim: synthesizing lower boundary stop at {}", lower);
            contained.insert(0, ColorScaleStop::new(self.get_color(lower, mode), lower));
        }
        if contained[contained.len() - 1].position != upper {
            trace!("trim: synthesizing upper boundary stop at {}", upper);
            contained.push(ColorScaleStop::new(self.get_color(upper, mode), upper));
        }

        let range = upper - lower;
        ColorScale::from_stops(
            contained
                .into_iter()
                .map(|stop| ColorScaleStop::new(stop.color, (stop.position - lower) / range)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_rgb(255, 0, 0);
    const GREEN: Color = Color::from_rgb(0, 255, 0);
    const BLUE: Color = Color::from_rgb(0, 0, 255);

    fn positions(scale: &ColorScale) -> Vec<f64> {
        scale.stops().iter().map(|s| s.position).collect()
    }

    // =====================================================================
    // Construction
    // =====================================================================

    #[test]
    fn new_spaces_colors_evenly() {
        let scale = ColorScale::new([RED, GREEN, BLUE, Color::WHITE, Color::BLACK]).unwrap();
        assert_eq!(positions(&scale), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn new_pins_endpoints_exactly() {
        let scale = ColorScale::new(vec![RED; 7]).unwrap();
        let p = positions(&scale);
        assert_eq!(p[0], 0.0);
        assert_eq!(p[6], 1.0);
    }

    #[test]
    fn single_color_sits_at_zero() {
        let scale = ColorScale::new([RED]).unwrap();
        assert_eq!(positions(&scale), vec![0.0]);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert!(matches!(
            ColorScale::new(Vec::<Color>::new()),
            Err(PaletteError::EmptyScale)
        ));
        assert!(matches!(
            ColorScale::from_stops(Vec::new()),
            Err(PaletteError::EmptyScale)
        ));
    }

    #[test]
    fn from_stops_keeps_order_unsorted() {
        let scale = ColorScale::from_stops([
            ColorScaleStop::new(RED, 0.8),
            ColorScaleStop::new(BLUE, 0.2),
        ])
        .unwrap();
        assert_eq!(positions(&scale), vec![0.8, 0.2]);
    }

    // =====================================================================
    // Sampling
    // =====================================================================

    #[test]
    fn single_stop_ignores_position() {
        let scale = ColorScale::from_stops([ColorScaleStop::new(GREEN, 0.4)]).unwrap();
        for p in [-1.0, 0.0, 0.4, 0.9, 3.0] {
            assert_eq!(scale.get_color(p, InterpolationMode::Lab), GREEN);
        }
    }

    #[test]
    fn out_of_range_positions_return_endpoints() {
        let scale = ColorScale::new([RED, GREEN, BLUE]).unwrap();
        for mode in InterpolationMode::ALL {
            assert_eq!(scale.get_color(-0.5, mode), RED);
            assert_eq!(scale.get_color(0.0, mode), RED);
            assert_eq!(scale.get_color(1.0, mode), BLUE);
            assert_eq!(scale.get_color(1.5, mode), BLUE);
        }
    }

    #[test]
    fn sampling_on_a_stop_returns_it() {
        let scale = ColorScale::new([RED, GREEN, BLUE]).unwrap();
        assert_eq!(scale.get_color(0.5, InterpolationMode::Rgb), GREEN);
    }

    #[test]
    fn rgb_sampling_between_stops() {
        let scale = ColorScale::new([Color::BLACK, Color::WHITE]).unwrap();
        assert_eq!(
            scale.get_color(0.25, InterpolationMode::Rgb),
            Color::from_rgb(64, 64, 64)
        );
    }

    #[test]
    fn later_stop_wins_on_equal_positions() {
        let scale = ColorScale::from_stops([
            ColorScaleStop::new(Color::BLACK, 0.0),
            ColorScaleStop::new(RED, 0.5),
            ColorScaleStop::new(BLUE, 0.5),
            ColorScaleStop::new(Color::WHITE, 1.0),
        ])
        .unwrap();
        assert_eq!(scale.get_color(0.5, InterpolationMode::Rgb), BLUE);
        // just below the tie, black -> red is used
        let below = scale.get_color(0.49, InterpolationMode::Rgb);
        assert_eq!(below.b, 0);
        assert!(below.r > 240);
    }

    #[test]
    fn query_past_last_stop_returns_last_stop() {
        let scale = ColorScale::from_stops([
            ColorScaleStop::new(RED, 0.0),
            ColorScaleStop::new(GREEN, 0.6),
        ])
        .unwrap();
        for mode in InterpolationMode::ALL {
            assert_eq!(scale.get_color(0.8, mode), GREEN);
        }
    }

    // =====================================================================
    // Trim
    // =====================================================================

    #[test]
    fn trim_rejects_bad_bounds() {
        let scale = ColorScale::new([RED, BLUE]).unwrap();
        for (lo, hi) in [(-0.1, 0.5), (0.2, 1.1), (0.7, 0.3)] {
            assert!(matches!(
                scale.trim(lo, hi, InterpolationMode::Rgb),
                Err(PaletteError::InvalidTrimBounds { .. })
            ));
        }
    }

    #[test]
    fn trim_to_a_point_is_single_stop() {
        let scale = ColorScale::new([Color::BLACK, Color::WHITE]).unwrap();
        let trimmed = scale.trim(0.25, 0.25, InterpolationMode::Rgb).unwrap();
        assert_eq!(trimmed.len(), 1);
        assert_eq!(
            trimmed.get_color(0.9, InterpolationMode::Rgb),
            scale.get_color(0.25, InterpolationMode::Rgb)
        );
    }

    #[test]
    fn trim_full_range_is_identity() {
        let scale = ColorScale::new([RED, GREEN, BLUE]).unwrap();
        let trimmed = scale.trim(0.0, 1.0, InterpolationMode::Rgb).unwrap();
        assert_eq!(trimmed, scale);
    }

    #[test]
    fn trim_synthesizes_boundaries_and_remaps() {
        let scale = ColorScale::new([RED, GREEN, BLUE]).unwrap();
        let trimmed = scale.trim(0.25, 0.75, InterpolationMode::Rgb).unwrap();
        assert_eq!(positions(&trimmed), vec![0.0, 0.5, 1.0]);
        assert_eq!(trimmed.stops()[1].color, GREEN);
        assert_eq!(
            trimmed.stops()[0].color,
            scale.get_color(0.25, InterpolationMode::Rgb)
        );
        assert_eq!(
            trimmed.stops()[2].color,
            scale.get_color(0.75, InterpolationMode::Rgb)
        );
    }

    #[test]
    fn trim_between_stops_samples_both_bounds() {
        let scale = ColorScale::new([Color::BLACK, Color::WHITE]).unwrap();
        let trimmed = scale.trim(0.2, 0.6, InterpolationMode::Rgb).unwrap();
        assert_eq!(positions(&trimmed), vec![0.0, 1.0]);
        assert_eq!(
            trimmed.stops()[0].color,
            scale.get_color(0.2, InterpolationMode::Rgb)
        );
        assert_eq!(
            trimmed.stops()[1].color,
            scale.get_color(0.6, InterpolationMode::Rgb)
        );
    }

    #[test]
    fn trim_keeps_stop_on_bound_without_duplicating() {
        let scale = ColorScale::new([RED, GREEN, BLUE]).unwrap();
        let trimmed = scale.trim(0.5, 1.0, InterpolationMode::Lab).unwrap();
        assert_eq!(positions(&trimmed), vec![0.0, 1.0]);
        assert_eq!(trimmed.stops()[0].color, GREEN);
        assert_eq!(trimmed.stops()[1].color, BLUE);
    }
}
