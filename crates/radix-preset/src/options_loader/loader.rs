//! Core options loading: read and deserialize by file format.

use radix_common::ConfigError;
use std::path::Path;
use tracing::info;

use crate::options::PresetOptions;

/// Serialization format of an options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Toml,
    Yaml,
    Json,
}

impl OptionsFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Deserialize options from `content` in the given format.
pub fn load_options_from_str(
    content: &str,
    format: OptionsFormat,
) -> Result<PresetOptions, ConfigError> {
    let parsed: Result<PresetOptions, String> = match format {
        OptionsFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        OptionsFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        OptionsFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| ConfigError::ParseError(format!("failed to parse {format:?} options: {e}")))
}

/// Load options from a file. The format follows the extension
/// (`.toml`, `.yaml`/`.yml`, `.json`).
pub fn load_options_from_path(path: &Path) -> Result<PresetOptions, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let format = OptionsFormat::from_path(path).ok_or_else(|| {
        ConfigError::ParseError(format!(
            "unsupported options file extension: {}",
            path.display()
        ))
    })?;

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let options = load_options_from_str(&content, format)?;
    info!("loaded preset options from {}", path.display());
    Ok(options)
}
