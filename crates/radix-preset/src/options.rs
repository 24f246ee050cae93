//! Preset options schema.
//!
//! Every field except `colors` has a default, so partial option files work.
//! Field names are snake_case; the camelCase spellings used by JavaScript
//! hosts (`lightSelector`, `prefersColorScheme`, ...) are accepted as aliases.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PREFIX: &str = "radix-";
pub const DEFAULT_LIGHT_SELECTOR: &str = ".light, .light-theme";
pub const DEFAULT_DARK_SELECTOR: &str = ".dark, .dark-theme";
pub const DEFAULT_TYPOGRAPHY_SELECTOR: &str = "prose";

/// How unknown color names and bad option values are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Unknown names are dropped; the preset always builds.
    #[default]
    Lenient,
    /// Any invalid option fails preset construction.
    Strict,
}

/// Options for [`crate::preset_radix_colors`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetOptions {
    /// Color family names to generate variables for.
    pub colors: Vec<String>,
    /// Prefix for every generated custom property.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_light_selector", alias = "lightSelector")]
    pub light_selector: String,
    #[serde(default = "default_dark_selector", alias = "darkSelector")]
    pub dark_selector: String,
    /// Keep colors from the incoming theme instead of replacing them.
    #[serde(default)]
    pub extend: bool,
    #[serde(default = "default_true")]
    pub alpha: bool,
    #[serde(default = "default_true")]
    pub dark: bool,
    /// Also apply dark variables under `prefers-color-scheme: dark`.
    /// Only meaningful when `dark` is enabled.
    #[serde(default = "default_true", alias = "prefersColorScheme")]
    pub prefers_color_scheme: bool,
    #[serde(default = "default_true")]
    pub p3: bool,
    #[serde(default)]
    pub foregrounds: Foregrounds,
    /// Extra token names mapped to an existing family (`primary = "blue"`).
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Register the `<typography_selector>-radix-<color>` rule.
    #[serde(default)]
    pub typography: bool,
    #[serde(default = "default_typography_selector", alias = "typographySelector")]
    pub typography_selector: String,
    #[serde(default)]
    pub validation: ValidationMode,
}

impl PresetOptions {
    /// Options for `colors` with every other field at its default.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            prefix: default_prefix(),
            light_selector: default_light_selector(),
            dark_selector: default_dark_selector(),
            extend: false,
            alpha: true,
            dark: true,
            prefers_color_scheme: true,
            p3: true,
            foregrounds: Foregrounds::default(),
            aliases: BTreeMap::new(),
            typography: false,
            typography_selector: default_typography_selector(),
            validation: ValidationMode::default(),
        }
    }
}

/// Literal values for the foreground overlay variables (`--<prefix>fg-<name>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foregrounds {
    #[serde(default = "default_fg_white")]
    pub white: String,
    #[serde(default = "default_fg_black")]
    pub black: String,
    /// Additional named foregrounds.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for Foregrounds {
    fn default() -> Self {
        Self {
            white: default_fg_white(),
            black: default_fg_black(),
            extra: BTreeMap::new(),
        }
    }
}

impl Foregrounds {
    /// `white`, `black`, then extras in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            ("white", self.white.as_str()),
            ("black", self.black.as_str()),
        ]
        .into_iter()
        .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.into()
}

fn default_light_selector() -> String {
    DEFAULT_LIGHT_SELECTOR.into()
}

fn default_dark_selector() -> String {
    DEFAULT_DARK_SELECTOR.into()
}

fn default_typography_selector() -> String {
    DEFAULT_TYPOGRAPHY_SELECTOR.into()
}

fn default_fg_white() -> String {
    "#fff".into()
}

fn default_fg_black() -> String {
    "#000".into()
}

fn default_true() -> bool {
    true
}
