//! Error types for the hueramp crate.
//!
//! Every variant is a caller-contract violation or a configuration problem.
//! Numeric degeneracy (NaN, infinities, hue instability near achromatic
//! colors) is handled by the clamping rules in [`crate::math`] and
//! [`crate::convert`] and never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by scale construction, trimming, parsing and recipe loading.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color scale was built from an empty color or stop sequence.
    #[error("a color scale needs at least one stop")]
    EmptyScale,

    /// Trim bounds fall outside `[0, 1]` or are inverted.
    #[error("invalid trim bounds [{lower}, {upper}]: expected 0 <= lower <= upper <= 1")]
    InvalidTrimBounds { lower: f64, upper: f64 },

    /// A color string could not be parsed.
    #[error("invalid color '{0}': expected #RGB, #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    /// A blend mode selector did not name a known mode.
    #[error("unknown blend mode '{0}'")]
    UnknownBlendMode(String),

    /// An interpolation mode selector did not name a known mode.
    #[error("unknown interpolation mode '{0}'")]
    UnknownInterpolationMode(String),

    /// YAML recipe or theme could not be parsed.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON recipe or theme could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for hueramp operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
