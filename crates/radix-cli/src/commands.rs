//! Subcommand handlers. Each returns the text to print on stdout.

use radix_common::{ConfigError, PresetError, Result};
use radix_palette::ColorFamily;
use radix_preset::{
    default_options_path, load_options_from_path, preset_radix_colors, PresetOptions,
    ValidationMode,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::cli::Command;

/// Load options from `explicit`, or the first default location that exists.
pub fn load_options(explicit: Option<&Path>, strict: bool) -> Result<PresetOptions> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_options_path()
            .ok_or_else(|| ConfigError::FileNotFound(PathBuf::from("radix-colors.toml")))?,
    };

    let mut options = load_options_from_path(&path)?;
    if strict {
        options.validation = ValidationMode::Strict;
    }
    Ok(options)
}

pub fn run(command: &Command, options: PresetOptions) -> Result<String> {
    match command {
        Command::Families => Ok(families()),
        Command::Css => {
            let preset = preset_radix_colors(options)?;
            Ok(preset.css())
        }
        Command::Theme { input } => {
            let base = match input {
                Some(path) => read_theme(path)?,
                None => Value::Object(Default::default()),
            };
            let preset = preset_radix_colors(options)?;
            let theme = preset.extend_theme(base);
            serde_json::to_string_pretty(&theme).map_err(|e| PresetError::Serialize(e.to_string()))
        }
        Command::Rule { selector } => {
            let preset = preset_radix_colors(options)?;
            preset
                .match_rule(selector)
                .map(|props| props.to_css(selector))
                .ok_or_else(|| PresetError::Other(format!("no rule matches '{selector}'")))
        }
    }
}

pub fn families() -> String {
    ColorFamily::ALL
        .iter()
        .map(|family| family.name())
        .collect::<Vec<_>>()
        .join("\n")
}

fn read_theme(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())).into())
}
