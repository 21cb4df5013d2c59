//! Light and dark theme resources derived from a handful of seed colors.
//!
//! A theme variant is described by three seeds: the window region color, a
//! neutral base color and a primary (accent) color. The base and primary
//! seeds are each expanded into an 11-step palette, and every named
//! resource slot picks a fixed step from one of them. Slot choices differ
//! between variants: a light theme draws its chrome from the dark end of the
//! base ramp and a dark theme from the light end.
//!
//! ```rust
//! use hueramp::{Color, ThemeSeeds, ThemeVariant, PaletteResources};
//!
//! let seeds = ThemeSeeds {
//!     region: Color::from_rgb(0xF3, 0xF3, 0xF3),
//!     base: Color::from_rgb(0x80, 0x80, 0x80),
//!     primary: Color::from_rgb(0x00, 0x78, 0xD7),
//! };
//! let light = PaletteResources::derive(ThemeVariant::Light, &seeds).unwrap();
//! assert_eq!(light.accent, seeds.primary);
//! assert_eq!(light.base_high, Color::BLACK);
//! ```

use std::fmt;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config;
use crate::error::Result;
use crate::palette::ColorPalette;

/// Step count of the palettes the slot table indexes into.
pub const THEME_STEPS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeVariant::Light => f.write_str("light"),
            ThemeVariant::Dark => f.write_str("dark"),
        }
    }
}

/// Seed colors for one theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSeeds {
    pub region: Color,
    pub base: Color,
    pub primary: Color,
}

/// Seeds for both variants plus the recipe used to expand them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub light: ThemeSeeds,
    pub dark: ThemeSeeds,
    /// Recipe for the base and primary palettes. Its `steps` and `color`
    /// are overridden during derivation.
    #[serde(default)]
    pub recipe: ColorPalette,
}

impl ThemeConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        config::from_yaml(yaml)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        config::from_json(json)
    }

    /// Loads a theme file. `.json` files are read as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        config::from_file(path.as_ref())
    }
}

/// The named color slots of one theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteResources {
    pub region: Color,
    pub accent: Color,
    pub alt_high: Color,
    pub alt_low: Color,
    pub alt_medium: Color,
    pub alt_medium_high: Color,
    pub alt_medium_low: Color,
    pub base_high: Color,
    pub base_low: Color,
    pub base_medium: Color,
    pub base_medium_high: Color,
    pub base_medium_low: Color,
    pub chrome_alt_low: Color,
    pub chrome_black_high: Color,
    pub chrome_black_low: Color,
    pub chrome_black_medium: Color,
    pub chrome_black_medium_low: Color,
    pub chrome_disabled_high: Color,
    pub chrome_disabled_low: Color,
    pub chrome_gray: Color,
    pub chrome_high: Color,
    pub chrome_low: Color,
    pub chrome_medium: Color,
    pub chrome_medium_low: Color,
    pub chrome_white: Color,
    pub list_low: Color,
    pub list_medium: Color,
}

impl PaletteResources {
    /// Derives a variant's slots with the default recipe.
    pub fn derive(variant: ThemeVariant, seeds: &ThemeSeeds) -> Result<Self> {
        Self::derive_with(&ColorPalette::default(), variant, seeds)
    }

    /// Derives a variant's slots, expanding the seeds with `recipe`.
    pub fn derive_with(recipe: &ColorPalette, variant: ThemeVariant, seeds: &ThemeSeeds) -> Result<Self> {
        let recipe = ColorPalette {
            steps: THEME_STEPS,
            ..recipe.clone()
        };
        let base = recipe.generate_palette_for(seeds.base)?;
        let primary = recipe.generate_palette_for(seeds.primary)?;
        debug!(
            "deriving {} resources from base {} and primary {}",
            variant, seeds.base, seeds.primary
        );

        Ok(match variant {
            ThemeVariant::Light => Self::light(seeds.region, &base, &primary),
            ThemeVariant::Dark => Self::dark(seeds.region, &base, &primary),
        })
    }

    fn light(region: Color, base: &[Color], primary: &[Color]) -> Self {
        Self {
            region,
            accent: primary[5],
            alt_high: Color::WHITE,
            alt_low: Color::WHITE,
            alt_medium: Color::WHITE,
            alt_medium_high: Color::WHITE,
            alt_medium_low: Color::WHITE,
            base_high: Color::BLACK,
            base_low: base[5],
            base_medium: base[8],
            base_medium_high: base[10],
            base_medium_low: base[9],
            chrome_alt_low: base[10],
            chrome_black_high: Color::BLACK,
            chrome_black_low: base[5],
            chrome_black_medium: base[10],
            chrome_black_medium_low: base[8],
            chrome_disabled_high: base[5],
            chrome_disabled_low: base[8],
            chrome_gray: base[9],
            chrome_high: base[5],
            chrome_low: base[0],
            chrome_medium: base[1],
            chrome_medium_low: base[0],
            chrome_white: Color::WHITE,
            list_low: base[1],
            list_medium: base[5],
        }
    }

    fn dark(region: Color, base: &[Color], primary: &[Color]) -> Self {
        Self {
            region,
            accent: primary[5],
            alt_high: Color::BLACK,
            alt_low: Color::BLACK,
            alt_medium: Color::BLACK,
            alt_medium_high: Color::BLACK,
            alt_medium_low: Color::BLACK,
            base_high: Color::WHITE,
            base_low: base[5],
            base_medium: base[1],
            base_medium_high: base[0],
            base_medium_low: base[3],
            chrome_alt_low: base[0],
            chrome_black_high: Color::BLACK,
            chrome_black_low: base[0],
            chrome_black_medium: Color::BLACK,
            chrome_black_medium_low: Color::BLACK,
            chrome_disabled_high: base[5],
            chrome_disabled_low: base[1],
            chrome_gray: base[2],
            chrome_high: base[2],
            chrome_low: base[9],
            chrome_medium: base[8],
            chrome_medium_low: base[6],
            chrome_white: Color::WHITE,
            list_low: base[8],
            list_medium: base[5],
        }
    }
}

/// Resources for both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeResources {
    pub light: PaletteResources,
    pub dark: PaletteResources,
}

impl ThemeResources {
    pub fn derive(config: &ThemeConfig) -> Result<Self> {
        Ok(Self {
            light: PaletteResources::derive_with(&config.recipe, ThemeVariant::Light, &config.light)?,
            dark: PaletteResources::derive_with(&config.recipe, ThemeVariant::Dark, &config.dark)?,
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::InterpolationMode;

    fn seeds() -> ThemeSeeds {
        ThemeSeeds {
            region: Color::from_rgb(0x20, 0x20, 0x20),
            base: Color::from_rgb(0x80, 0x80, 0x80),
            primary: Color::from_rgb(0x00, 0x78, 0xD7),
        }
    }

    const CONFIG_YAML: &str = r##"
light:
  region: "#F3F3F3"
  base: "#808080"
  primary: "#0078D7"
dark:
  region: "#202020"
  base: "#808080"
  primary: "#0078D7"
"##;

    #[test]
    fn accent_is_the_seed_step() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            let res = PaletteResources::derive(variant, &seeds()).unwrap();
            assert_eq!(res.accent, seeds().primary);
            assert_eq!(res.region, seeds().region);
        }
    }

    #[test]
    fn variants_use_opposite_fixed_colors() {
        let light = PaletteResources::derive(ThemeVariant::Light, &seeds()).unwrap();
        let dark = PaletteResources::derive(ThemeVariant::Dark, &seeds()).unwrap();
        assert_eq!(light.alt_high, Color::WHITE);
        assert_eq!(light.base_high, Color::BLACK);
        assert_eq!(dark.alt_high, Color::BLACK);
        assert_eq!(dark.base_high, Color::WHITE);
        assert_eq!(light.chrome_white, Color::WHITE);
        assert_eq!(dark.chrome_white, Color::WHITE);
    }

    #[test]
    fn slots_index_the_base_palette() {
        let base = ColorPalette::default().generate_palette_for(seeds().base).unwrap();
        let light = PaletteResources::derive(ThemeVariant::Light, &seeds()).unwrap();
        let dark = PaletteResources::derive(ThemeVariant::Dark, &seeds()).unwrap();

        assert_eq!(light.base_medium_high, base[10]);
        assert_eq!(light.chrome_low, base[0]);
        assert_eq!(light.list_low, base[1]);
        assert_eq!(dark.base_medium_high, base[0]);
        assert_eq!(dark.chrome_low, base[9]);
        assert_eq!(dark.chrome_medium_low, base[6]);
        assert_eq!(light.base_low, dark.base_low);
    }

    #[test]
    fn recipe_steps_are_forced_to_eleven() {
        let recipe = ColorPalette {
            steps: 3,
            ..ColorPalette::default()
        };
        let res = PaletteResources::derive_with(&recipe, ThemeVariant::Light, &seeds()).unwrap();
        assert_eq!(res.accent, seeds().primary);
    }

    #[test]
    fn config_from_yaml_with_default_recipe() {
        let config = ThemeConfig::from_yaml(CONFIG_YAML).unwrap();
        assert_eq!(config.light.region, Color::from_rgb(0xF3, 0xF3, 0xF3));
        assert_eq!(config.recipe, ColorPalette::default());
    }

    #[test]
    fn config_recipe_overrides() {
        let yaml = format!("{}recipe:\n  interpolation_mode: lab\n", CONFIG_YAML);
        let config = ThemeConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.recipe.interpolation_mode, InterpolationMode::Lab);
        assert!(ThemeResources::derive(&config).is_ok());
    }

    #[test]
    fn resources_serialize_with_hex_colors() {
        let config = ThemeConfig::from_yaml(CONFIG_YAML).unwrap();
        let resources = ThemeResources::derive(&config).unwrap();
        let json = resources.to_json().unwrap();
        assert!(json.contains("\"accent\": \"#0078D7\""));
        let yaml = resources.to_yaml().unwrap();
        let back: ThemeResources = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, resources);
    }
}
