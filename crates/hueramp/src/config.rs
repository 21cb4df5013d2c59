//! Shared loading for YAML/JSON configuration files.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{PaletteError, Result};

/// File extensions read as JSON; everything else is YAML.
const JSON_EXTENSIONS: &[&str] = &["json"];

pub(crate) fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub(crate) fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

pub(crate) fn from_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            JSON_EXTENSIONS
                .iter()
                .any(|json| ext.eq_ignore_ascii_case(json))
        });

    if is_json {
        from_json(&content)
    } else {
        from_yaml(&content)
    }
}
