//! Palette recipes: deriving an N-step tonal ramp from one seed color.
//!
//! A [`ColorPalette`] is a parameter bag. Generation runs in four steps:
//!
//! 1. Build the scale `light -> seed -> dark` from the recipe's scale colors.
//! 2. Trim it to `[clip_light, 1 - clip_dark]`; the trimmed ends become the
//!    new light and dark endpoints.
//! 3. Adjust the endpoints:
//!    - if the seed's HSL saturation reaches `saturation_adjustment_cutoff`,
//!      push both endpoints' LCH chroma up (`saturation_light`/`saturation_dark`)
//!    - for every non-zero multiply/overlay weight, blend the endpoint with
//!      the seed and move it toward the blend by that weight
//! 4. Rebuild `light -> seed -> dark` from the adjusted endpoints and sample
//!    it at `steps` evenly spaced positions.
//!
//! # Example
//!
//! ```rust
//! use hueramp::{Color, ColorPalette};
//!
//! let palette = ColorPalette::with_seed(Color::from_rgb(0, 120, 215));
//! let colors = palette.generate_palette().unwrap();
//! assert_eq!(colors.len(), 11);
//! assert_eq!(colors[5], Color::from_rgb(0, 120, 215));
//! ```
//!
//! # From YAML
//!
//! Every field is optional; missing fields keep their defaults.
//!
//! ```rust
//! use hueramp::{ColorPalette, InterpolationMode};
//!
//! let palette = ColorPalette::from_yaml(r##"
//! color: "#0078D7"
//! interpolation_mode: lab
//! steps: 7
//! overlay_dark: 0.0
//! "##).unwrap();
//! assert_eq!(palette.interpolation_mode, InterpolationMode::Lab);
//! assert_eq!(palette.clip_light, 0.185);
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::blend::{saturate_via_lch, BlendMode};
use crate::color::Color;
use crate::config;
use crate::convert::{color_to_hsl, interpolate, InterpolationMode};
use crate::error::Result;
use crate::scale::ColorScale;
use crate::space::{NormalizedRgb, Rounding};

/// Recipe for turning a seed color into a tonal ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorPalette {
    /// Space used for trimming, sampling and weighted blending.
    pub interpolation_mode: InterpolationMode,
    /// Number of colors [`generate_palette`](ColorPalette::generate_palette) returns.
    pub steps: usize,
    /// Light end of the untrimmed scale.
    pub scale_color_light: Color,
    /// Dark end of the untrimmed scale.
    pub scale_color_dark: Color,
    /// The seed color.
    #[serde(alias = "seed")]
    pub color: Color,
    /// Fraction cut from the light end of the base scale.
    pub clip_light: f64,
    /// Fraction cut from the dark end of the base scale.
    pub clip_dark: f64,
    /// Minimum seed HSL saturation for the chroma boost to apply.
    pub saturation_adjustment_cutoff: f64,
    pub saturation_light: f64,
    pub saturation_dark: f64,
    pub overlay_light: f64,
    pub overlay_dark: f64,
    pub multiply_light: f64,
    pub multiply_dark: f64,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            interpolation_mode: InterpolationMode::Rgb,
            steps: 11,
            scale_color_light: Color::WHITE,
            scale_color_dark: Color::BLACK,
            color: Color::default(),
            clip_light: 0.185,
            clip_dark: 0.160,
            saturation_adjustment_cutoff: 0.05,
            saturation_light: 0.35,
            saturation_dark: 1.25,
            overlay_light: 0.0,
            overlay_dark: 0.25,
            multiply_light: 0.0,
            multiply_dark: 0.0,
        }
    }
}

/// Light and dark ends of a palette scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEndpoints {
    pub light: NormalizedRgb,
    pub dark: NormalizedRgb,
}

impl ColorPalette {
    /// The default recipe with `color` as its seed.
    pub fn with_seed(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Parses a recipe from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        config::from_yaml(yaml)
    }

    /// Parses a recipe from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        config::from_json(json)
    }

    /// Loads a recipe file. `.json` files are read as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        config::from_file(path.as_ref())
    }

    /// Endpoints of the base scale after clipping, before any adjustment.
    ///
    /// Fails with [`InvalidTrimBounds`](crate::PaletteError::InvalidTrimBounds)
    /// when the clip fractions do not leave a valid range.
    pub fn trimmed_endpoints(&self, seed: Color) -> Result<PaletteEndpoints> {
        let mode = self.interpolation_mode;
        let base = ColorScale::new([self.scale_color_light, seed, self.scale_color_dark])?;
        let trimmed = base.trim(self.clip_light, 1.0 - self.clip_dark, mode)?;

        Ok(PaletteEndpoints {
            light: NormalizedRgb::from(trimmed.get_color(0.0, mode)),
            dark: NormalizedRgb::from(trimmed.get_color(1.0, mode)),
        })
    }

    /// Endpoints after the saturation, multiply and overlay adjustments.
    pub fn adjusted_endpoints(&self, seed: Color) -> Result<PaletteEndpoints> {
        let trimmed = self.trimmed_endpoints(seed)?;
        Ok(self.adjust(seed, trimmed))
    }

    fn adjust(&self, seed: Color, endpoints: PaletteEndpoints) -> PaletteEndpoints {
        let seed_hsl = color_to_hsl(seed, Rounding::DEFAULT);
        let seed_rgb = NormalizedRgb::from(seed);
        let PaletteEndpoints {
            mut light,
            mut dark,
        } = endpoints;

        if seed_hsl.s >= self.saturation_adjustment_cutoff {
            debug!(
                "seed {} saturation {} >= {}, boosting chroma (light {}, dark {})",
                seed,
                seed_hsl.s,
                self.saturation_adjustment_cutoff,
                self.saturation_light,
                self.saturation_dark
            );
            light = saturate_via_lch(light, self.saturation_light);
            dark = saturate_via_lch(dark, self.saturation_dark);
        } else {
            debug!(
                "seed {} saturation {} below cutoff {}, chroma left alone",
                seed, seed_hsl.s, self.saturation_adjustment_cutoff
            );
        }

        light = self.blend_toward(seed_rgb, light, BlendMode::Multiply, self.multiply_light);
        dark = self.blend_toward(seed_rgb, dark, BlendMode::Multiply, self.multiply_dark);
        light = self.blend_toward(seed_rgb, light, BlendMode::Overlay, self.overlay_light);
        dark = self.blend_toward(seed_rgb, dark, BlendMode::Overlay, self.overlay_dark);

        PaletteEndpoints { light, dark }
    }

    /// Moves `endpoint` toward `mode.blend(seed, endpoint)` by `weight`.
    fn blend_toward(
        &self,
        seed: NormalizedRgb,
        endpoint: NormalizedRgb,
        mode: BlendMode,
        weight: f64,
    ) -> NormalizedRgb {
        if weight == 0.0 {
            return endpoint;
        }
        debug!("applying {} at weight {}", mode, weight);
        let blended = mode.blend(seed, endpoint);
        interpolate(endpoint, blended, weight, self.interpolation_mode)
    }

    /// The continuous `light -> seed -> dark` scale for `seed`.
    ///
    /// The seed sits at position `0.5`.
    pub fn get_palette_scale(&self, seed: Color) -> Result<ColorScale> {
        let PaletteEndpoints { light, dark } = self.adjusted_endpoints(seed)?;
        ColorScale::new([light.to_color(), seed, dark.to_color()])
    }

    /// Samples `scale` at `steps` evenly spaced positions `i / (steps - 1)`.
    ///
    /// One step yields the color at position `0`; zero steps yield nothing.
    pub fn sample(&self, scale: &ColorScale) -> Vec<Color> {
        let mode = self.interpolation_mode;
        match self.steps {
            0 => Vec::new(),
            1 => vec![scale.get_color(0.0, mode)],
            steps => (0..steps)
                .map(|i| scale.get_color(i as f64 / (steps - 1) as f64, mode))
                .collect(),
        }
    }

    /// Generates the palette for this recipe's own [`color`](ColorPalette::color).
    pub fn generate_palette(&self) -> Result<Vec<Color>> {
        self.generate_palette_for(self.color)
    }

    /// Generates the palette for an arbitrary seed with this recipe.
    pub fn generate_palette_for(&self, seed: Color) -> Result<Vec<Color>> {
        let scale = self.get_palette_scale(seed)?;
        Ok(self.sample(&scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::color_to_lab;
    use crate::error::PaletteError;

    const ACCENT: Color = Color::from_rgb(0, 120, 215);

    // =====================================================================
    // Defaults and loading
    // =====================================================================

    #[test]
    fn default_recipe_values() {
        let p = ColorPalette::default();
        assert_eq!(p.steps, 11);
        assert_eq!(p.interpolation_mode, InterpolationMode::Rgb);
        assert_eq!(p.scale_color_light, Color::WHITE);
        assert_eq!(p.scale_color_dark, Color::BLACK);
        assert_eq!(p.clip_light, 0.185);
        assert_eq!(p.clip_dark, 0.160);
        assert_eq!(p.saturation_adjustment_cutoff, 0.05);
        assert_eq!(p.saturation_light, 0.35);
        assert_eq!(p.saturation_dark, 1.25);
        assert_eq!(p.overlay_light, 0.0);
        assert_eq!(p.overlay_dark, 0.25);
        assert_eq!(p.multiply_light, 0.0);
        assert_eq!(p.multiply_dark, 0.0);
    }

    #[test]
    fn yaml_partial_recipe_keeps_defaults() {
        let p = ColorPalette::from_yaml(
            r##"
seed: "#0078D7"
steps: 5
multiply_dark: 0.5
"##,
        )
        .unwrap();
        assert_eq!(p.color, ACCENT);
        assert_eq!(p.steps, 5);
        assert_eq!(p.multiply_dark, 0.5);
        assert_eq!(p.overlay_dark, 0.25);
    }

    #[test]
    fn yaml_rejects_unknown_fields() {
        let err = ColorPalette::from_yaml("clip_lite: 0.2").unwrap_err();
        assert!(matches!(err, PaletteError::Yaml(_)));
    }

    #[test]
    fn json_recipe() {
        let p = ColorPalette::from_json(r##"{"color": "#ff0000", "interpolation_mode": "xyz"}"##)
            .unwrap();
        assert_eq!(p.color, Color::from_rgb(255, 0, 0));
        assert_eq!(p.interpolation_mode, InterpolationMode::Xyz);
    }

    #[test]
    fn recipe_survives_yaml_round_trip() {
        let p = ColorPalette {
            interpolation_mode: InterpolationMode::Lab,
            overlay_light: 0.1,
            ..ColorPalette::with_seed(ACCENT)
        };
        let yaml = serde_yaml::to_string(&p).unwrap();
        assert_eq!(ColorPalette::from_yaml(&yaml).unwrap(), p);
    }

    #[test]
    fn from_file_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("recipe.json");
        std::fs::write(&json_path, r##"{"steps": 3}"##).unwrap();
        assert_eq!(ColorPalette::from_file(&json_path).unwrap().steps, 3);

        let yaml_path = dir.path().join("recipe.yaml");
        std::fs::write(&yaml_path, "steps: 4\n").unwrap();
        assert_eq!(ColorPalette::from_file(&yaml_path).unwrap().steps, 4);
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err = ColorPalette::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, PaletteError::Io { .. }));
    }

    // =====================================================================
    // Generation
    // =====================================================================

    #[test]
    fn accent_palette_has_eleven_darkening_steps() {
        let palette = ColorPalette::with_seed(ACCENT);
        let colors = palette.generate_palette().unwrap();
        assert_eq!(colors.len(), 11);

        let lightness: Vec<f64> = colors
            .iter()
            .map(|c| color_to_lab(*c, Rounding::DEFAULT).l)
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[1] < pair[0], "lightness not decreasing: {:?}", lightness);
        }

        assert_eq!(colors[0], Color::from_rgb(0x93, 0xCF, 0xFB));
        assert_eq!(colors[5], ACCENT);
        assert_eq!(colors[10], Color::from_rgb(0x00, 0x28, 0x80));
    }

    #[test]
    fn palette_scale_reproduces_seed_at_its_stop() {
        for mode in InterpolationMode::ALL {
            let palette = ColorPalette {
                interpolation_mode: mode,
                ..ColorPalette::default()
            };
            let scale = palette.get_palette_scale(ACCENT).unwrap();
            assert_eq!(scale.len(), 3);
            assert_eq!(scale.stops()[1].position, 0.5);
            assert_eq!(scale.get_color(0.5, mode), ACCENT, "{}", mode);
        }
    }

    #[test]
    fn palette_ends_are_the_adjusted_endpoints() {
        let palette = ColorPalette::with_seed(ACCENT);
        let ends = palette.adjusted_endpoints(ACCENT).unwrap();
        let colors = palette.generate_palette().unwrap();
        assert_eq!(colors[0], ends.light.to_color());
        assert_eq!(colors[10], ends.dark.to_color());
    }

    #[test]
    fn desaturated_seed_skips_saturation_step() {
        let gray = Color::from_rgb(128, 128, 128);
        let palette = ColorPalette {
            overlay_dark: 0.0,
            ..ColorPalette::with_seed(gray)
        };
        let trimmed = palette.trimmed_endpoints(gray).unwrap();
        let adjusted = palette.adjusted_endpoints(gray).unwrap();
        assert_eq!(adjusted, trimmed);
    }

    #[test]
    fn saturated_seed_changes_endpoints() {
        let palette = ColorPalette {
            overlay_dark: 0.0,
            ..ColorPalette::with_seed(ACCENT)
        };
        let trimmed = palette.trimmed_endpoints(ACCENT).unwrap();
        let adjusted = palette.adjusted_endpoints(ACCENT).unwrap();
        assert_ne!(adjusted.light, trimmed.light);
        assert_ne!(adjusted.dark, trimmed.dark);
    }

    #[test]
    fn multiply_weight_darkens_light_end() {
        let plain = ColorPalette::with_seed(ACCENT);
        let multiplied = ColorPalette {
            multiply_light: 1.0,
            ..plain.clone()
        };
        let before = color_to_lab(plain.adjusted_endpoints(ACCENT).unwrap().light.to_color(), Rounding::DEFAULT);
        let after = color_to_lab(
            multiplied.adjusted_endpoints(ACCENT).unwrap().light.to_color(),
            Rounding::DEFAULT,
        );
        assert!(after.l < before.l, "{} !< {}", after.l, before.l);
    }

    #[test]
    fn steps_zero_and_one() {
        let none = ColorPalette {
            steps: 0,
            ..ColorPalette::with_seed(ACCENT)
        };
        assert!(none.generate_palette().unwrap().is_empty());

        let one = ColorPalette {
            steps: 1,
            ..ColorPalette::with_seed(ACCENT)
        };
        let scale = one.get_palette_scale(ACCENT).unwrap();
        assert_eq!(
            one.generate_palette().unwrap(),
            vec![scale.get_color(0.0, InterpolationMode::Rgb)]
        );
    }

    #[test]
    fn overlapping_clips_are_rejected() {
        let palette = ColorPalette {
            clip_light: 0.7,
            clip_dark: 0.6,
            ..ColorPalette::with_seed(ACCENT)
        };
        assert!(matches!(
            palette.generate_palette(),
            Err(PaletteError::InvalidTrimBounds { .. })
        ));
    }

    #[test]
    fn zero_clips_keep_scale_colors() {
        let palette = ColorPalette {
            clip_light: 0.0,
            clip_dark: 0.0,
            saturation_adjustment_cutoff: 2.0,
            overlay_dark: 0.0,
            ..ColorPalette::with_seed(ACCENT)
        };
        let colors = palette.generate_palette().unwrap();
        assert_eq!(colors[0], Color::WHITE);
        assert_eq!(colors[10], Color::BLACK);
    }
}
