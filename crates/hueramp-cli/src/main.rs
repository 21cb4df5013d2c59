//! `hueramp` - derive tonal palettes and theme resources from seed colors.

mod commands;
mod swatch;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hueramp::{BlendMode, Color, InterpolationMode};
use log::LevelFilter;

use commands::{OutputFormat, PaletteOptions};

/// Derive tonal palettes and theme resources from seed colors
#[derive(Parser, Debug)]
#[command(name = "hueramp", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print hex values without terminal swatches
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a light-to-dark palette around a seed color
    Palette(PaletteArgs),

    /// Show a color in every supported color space
    Convert {
        /// Color as #RGB, #RRGGBB or #AARRGGBB
        color: Color,
    },

    /// Blend a top color over a bottom color
    Blend {
        /// Bottom (backdrop) color
        bottom: Color,
        /// Top (source) color
        top: Color,
        /// burn, darken, dodge, lighten, multiply, overlay or screen
        #[arg(short, long)]
        mode: BlendMode,
    },

    /// Derive light and dark theme resources from a seed file
    Theme {
        /// YAML or JSON file with `light` and `dark` seeds
        config: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args, Debug)]
struct PaletteArgs {
    /// Seed color as #RGB, #RRGGBB or #AARRGGBB
    seed: Color,

    /// Number of colors to generate
    #[arg(short, long)]
    steps: Option<usize>,

    /// Interpolation space: rgb, lab or xyz
    #[arg(short, long)]
    mode: Option<InterpolationMode>,

    /// Recipe file (YAML, or JSON by extension)
    #[arg(short, long)]
    recipe: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let use_color = !cli.no_color && console::colors_enabled();

    match cli.command {
        Commands::Palette(args) => {
            let options = PaletteOptions {
                recipe: args.recipe.as_deref(),
                steps: args.steps,
                mode: args.mode,
            };
            commands::palette(args.seed, &options, args.format, use_color)
        }
        Commands::Convert { color } => commands::convert(color),
        Commands::Blend { bottom, top, mode } => commands::blend(bottom, top, mode, use_color),
        Commands::Theme { config, format } => commands::theme(&config, format, use_color),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    print!("{}", run(cli)?);
    Ok(())
}
