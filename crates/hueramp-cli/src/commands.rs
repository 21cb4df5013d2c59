//! Command handlers. Each one returns the text to print so it can be tested
//! without a terminal.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hueramp::convert::{color_to_hsl, color_to_lab, color_to_xyz, rgb_to_lch};
use hueramp::{
    BlendMode, Color, ColorPalette, InterpolationMode, NormalizedRgb, Rounding, ThemeConfig,
    ThemeResources,
};
use log::debug;

use crate::swatch::swatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Options for `hueramp palette`.
#[derive(Debug, Clone, Default)]
pub struct PaletteOptions<'a> {
    pub recipe: Option<&'a Path>,
    pub steps: Option<usize>,
    pub mode: Option<InterpolationMode>,
}

/// Loads the recipe (or the default one) and applies command-line overrides.
pub fn load_recipe(options: &PaletteOptions<'_>) -> Result<ColorPalette> {
    let mut recipe = match options.recipe {
        Some(path) => ColorPalette::from_file(path)
            .with_context(|| format!("loading recipe {}", path.display()))?,
        None => ColorPalette::default(),
    };
    if let Some(steps) = options.steps {
        recipe.steps = steps;
    }
    if let Some(mode) = options.mode {
        recipe.interpolation_mode = mode;
    }
    Ok(recipe)
}

pub fn palette(
    seed: Color,
    options: &PaletteOptions<'_>,
    format: OutputFormat,
    use_color: bool,
) -> Result<String> {
    let recipe = load_recipe(options)?;
    debug!(
        "generating {} steps for {} in {} mode",
        recipe.steps, seed, recipe.interpolation_mode
    );
    let colors = recipe
        .generate_palette_for(seed)
        .with_context(|| format!("generating palette for {}", seed))?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&colors)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&colors)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, color) in colors.iter().enumerate() {
                let marker = if *color == seed { " *" } else { "" };
                writeln!(out, "{:>3}  {}  {}{}", i, color, swatch(*color, use_color), marker)?;
            }
            Ok(out)
        }
    }
}

pub fn convert(color: Color) -> Result<String> {
    let rgb = NormalizedRgb::from(color);
    let mut out = String::new();
    writeln!(out, "hex  {}", color)?;
    writeln!(out, "rgb  {},{},{}", color.r, color.g, color.b)?;
    writeln!(out, "hsl  {}", color_to_hsl(color, Rounding::DEFAULT))?;
    writeln!(out, "xyz  {}", color_to_xyz(color, Rounding::DEFAULT))?;
    writeln!(out, "lab  {}", color_to_lab(color, Rounding::DEFAULT))?;
    writeln!(out, "lch  {}", rgb_to_lch(rgb, Rounding::DEFAULT))?;
    Ok(out)
}

pub fn blend(bottom: Color, top: Color, mode: BlendMode, use_color: bool) -> Result<String> {
    let blended = mode
        .blend(NormalizedRgb::from(bottom), NormalizedRgb::from(top))
        .to_color();
    Ok(format!("{}  {}\n", blended, swatch(blended, use_color)))
}

pub fn theme(config: &Path, format: OutputFormat, use_color: bool) -> Result<String> {
    let config = ThemeConfig::from_file(config)
        .with_context(|| format!("loading theme config {}", config.display()))?;
    let resources = ThemeResources::derive(&config).context("deriving theme resources")?;

    match format {
        OutputFormat::Json => Ok(resources.to_json()? + "\n"),
        OutputFormat::Yaml => Ok(resources.to_yaml()?),
        OutputFormat::Text => theme_table(&resources, use_color),
    }
}

/// One row per slot, light and dark side by side.
fn theme_table(resources: &ThemeResources, use_color: bool) -> Result<String> {
    let light = slot_map(&resources.light)?;
    let dark = slot_map(&resources.dark)?;
    let width = light.keys().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    writeln!(out, "{:<width$}  {:<9}{:<8}  dark", "slot", "light", "", width = width)?;
    for (slot, light_color) in &light {
        let Some(dark_color) = dark.get(slot) else {
            continue;
        };
        writeln!(
            out,
            "{:<width$}  {}  {}  {}  {}",
            slot,
            light_color,
            swatch(*light_color, use_color),
            dark_color,
            swatch(*dark_color, use_color),
            width = width
        )?;
    }
    Ok(out)
}

fn slot_map(
    resources: &hueramp::PaletteResources,
) -> Result<std::collections::BTreeMap<String, Color>> {
    let value = serde_json::to_value(resources)?;
    Ok(serde_json::from_value(value)?)
}
