//! Strict option validation.
//!
//! Lenient presets never call this: unknown names are dropped instead. In
//! strict mode every check runs and all problems are collected into a
//! single `ConfigError`.


use radix_common::ConfigError;
use radix_palette::ColorFamily;

use crate::options::PresetOptions;
use crate::sanitize::{validate_css_color, validate_css_ident, validate_css_selector};

/// Run all validations on the options, collecting all errors.
pub fn validate(options: &PresetOptions) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_colors(&mut errors, options);
    validate_aliases(&mut errors, options);
    validate_selectors(&mut errors, options);
    validate_foregrounds(&mut errors, options);

    if let Err(e) = validate_css_ident(&options.prefix) {
        errors.push(format!("prefix: {e}"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_colors(errors: &mut Vec<String>, options: &PresetOptions) {
    for name in &options.colors {
        if ColorFamily::from_name(name).is_none() {
            errors.push(format!("colors: unknown color family '{name}'"));
        }
    }
}

fn validate_aliases(errors: &mut Vec<String>, options: &PresetOptions) {
    for (alias, target) in &options.aliases {
        if alias.is_empty() {
            errors.push("aliases: alias name must not be empty".into());
        } else if let Err(e) = validate_css_ident(alias) {
            errors.push(format!("aliases.{alias}: {e}"));
        }

        if ColorFamily::from_name(target).is_none() {
            errors.push(format!(
                "aliases.{alias}: target '{target}' is not a color family"
            ));
        } else if !options.colors.iter().any(|name| name == target) {
            errors.push(format!(
                "aliases.{alias}: target '{target}' is not listed in colors, so its variables are never defined"
            ));
        }
    }
}

fn validate_selectors(errors: &mut Vec<String>, options: &PresetOptions) {
    let selectors = [
        ("light_selector", options.light_selector.as_str()),
        ("dark_selector", options.dark_selector.as_str()),
    ];
    for (name, selector) in selectors {
        if let Err(e) = validate_css_selector(selector) {
            errors.push(format!("{name}: {e}"));
        }
    }

    if options.typography {
        if options.typography_selector.is_empty() {
            errors.push("typography_selector: must not be empty".into());
        } else if let Err(e) = validate_css_ident(&options.typography_selector) {
            errors.push(format!("typography_selector: {e}"));
        }
    }
}

fn validate_foregrounds(errors: &mut Vec<String>, options: &PresetOptions) {
    for (name, value) in options.foregrounds.entries() {
        if let Err(e) = validate_css_ident(name) {
            errors.push(format!("foregrounds.{name}: {e}"));
        }
        if let Err(e) = validate_css_color(value) {
            errors.push(format!("foregrounds.{name}: {e}"));
        }
    }
}
