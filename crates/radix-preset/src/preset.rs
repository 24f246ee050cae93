//! The preset object handed to the host build tool.

use radix_common::ConfigError;
use serde_json::Value;
use std::fmt;

use crate::css::generate_css;
use crate::options::{PresetOptions, ValidationMode};
use crate::resolve::ResolvedColors;
use crate::rules::{CssProperties, StyleRule, TypographyRule};
use crate::theme;
use crate::tokens::TokenMapping;
use crate::validation;

/// Identifying name the host registers the preset under.
pub const PRESET_NAME: &str = "unocss-preset-radix-colors";

/// A lazily evaluated style sheet.
pub struct Preflight {
    get_css: Box<dyn Fn() -> String + Send + Sync>,
}

impl Preflight {
    pub fn new(get_css: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            get_css: Box::new(get_css),
        }
    }

    /// Compute the CSS text. Nothing is generated until this is called.
    pub fn get_css(&self) -> String {
        (self.get_css)()
    }
}

impl fmt::Debug for Preflight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preflight").finish_non_exhaustive()
    }
}

/// Radix colors preset: theme tokens, dynamic rules and preflight CSS.
#[derive(Debug)]
pub struct Preset {
    name: &'static str,
    rules: Vec<Box<dyn StyleRule>>,
    preflights: Vec<Preflight>,
    tokens: TokenMapping,
    prefix: String,
    extend: bool,
}

impl Preset {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn rules(&self) -> &[Box<dyn StyleRule>] {
        &self.rules
    }

    pub fn preflights(&self) -> &[Preflight] {
        &self.preflights
    }

    /// Generated color tokens, before merging into a theme.
    pub fn token_mapping(&self) -> &TokenMapping {
        &self.tokens
    }

    /// Return `theme` with the generated color tokens merged into `colors`.
    pub fn extend_theme(&self, theme: Value) -> Value {
        theme::extend_theme(theme, &self.tokens, &self.prefix, self.extend)
    }

    /// Properties from the first rule matching `selector`.
    pub fn match_rule(&self, selector: &str) -> Option<CssProperties> {
        self.rules.iter().find_map(|rule| rule.matches(selector))
    }

    /// All preflight CSS concatenated.
    pub fn css(&self) -> String {
        self.preflights.iter().map(Preflight::get_css).collect()
    }
}

/// Build the preset from `options`.
///
/// In [`ValidationMode::Lenient`] this only fails if the typography pattern
/// cannot be compiled; unknown color names and aliases are dropped. In
/// [`ValidationMode::Strict`] any invalid option is an error.
pub fn preset_radix_colors(options: PresetOptions) -> Result<Preset, ConfigError> {
    if options.validation == ValidationMode::Strict {
        validation::validate(&options)?;
    }

    let resolved = ResolvedColors::from_options(&options);
    let tokens = TokenMapping::build(&resolved, &options.prefix, options.alpha);

    let mut rules: Vec<Box<dyn StyleRule>> = Vec::new();
    if options.typography {
        let rule = TypographyRule::new(
            &options.typography_selector,
            &options.prefix,
            resolved.families(),
        )
        .map_err(|e| {
            ConfigError::ValidationError(format!("typography_selector: invalid pattern: {e}"))
        })?;
        rules.push(Box::new(rule));
    }

    tracing::debug!(
        families = resolved.families().len(),
        aliases = resolved.aliases().len(),
        rules = rules.len(),
        "built radix colors preset"
    );

    let prefix = options.prefix.clone();
    let extend = options.extend;
    let preflight = Preflight::new(move || generate_css(&options, &resolved));

    Ok(Preset {
        name: PRESET_NAME,
        rules,
        preflights: vec![preflight],
        tokens,
        prefix,
        extend,
    })
}

// =============================================================================
// TESTS
// =============================================================================
