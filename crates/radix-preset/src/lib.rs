//! Radix colors preset.
//!
//! Turns a list of Radix color family names into theme tokens that
//! reference CSS custom properties, plus the CSS that defines those
//! properties for light, dark and wide-gamut (P3) displays.
//!
//! # Quick Start
//!
//! ```rust
//! use radix_preset::{preset_radix_colors, PresetOptions};
//! use serde_json::json;
//!
//! let preset = preset_radix_colors(PresetOptions::new(["blue", "amber"])).unwrap();
//!
//! let theme = preset.extend_theme(json!({}));
//! assert_eq!(theme["colors"]["blue"]["9"], "var(--radix-blue9)");
//! assert_eq!(theme["colors"]["amber"]["fg"], "var(--radix-fg-black)");
//!
//! let css = preset.preflights()[0].get_css();
//! assert!(css.contains("--radix-blue9: #0090ff;"));
//! ```

pub mod css;
pub mod options;
pub mod options_loader;
pub mod preset;
pub mod resolve;
pub mod rules;
pub mod sanitize;
pub mod theme;
pub mod tokens;
pub mod validation;

#[cfg(test)]
mod properties;

// Re-export core types for convenience
pub use options::{Foregrounds, PresetOptions, ValidationMode};
pub use options_loader::{default_options_path, load_options_from_path};
pub use preset::{preset_radix_colors, Preflight, Preset, PRESET_NAME};
pub use resolve::ResolvedColors;
pub use rules::{CssProperties, StyleRule, TypographyRule};
pub use tokens::{foreground_for, Foreground, TokenMapping};
