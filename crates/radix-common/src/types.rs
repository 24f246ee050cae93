use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Number of steps in every color scale.
pub const STEP_COUNT: usize = 12;

/// Scale steps in order, `1..=12`.
pub fn steps() -> RangeInclusive<u8> {
    1..=STEP_COUNT as u8
}

/// Color gamut a palette is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gamut {
    /// sRGB literals (hex).
    Standard,
    /// Wide-gamut `color(display-p3 ...)` literals.
    P3,
}

impl Gamut {
    pub const ALL: [Gamut; 2] = [Gamut::Standard, Gamut::P3];
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gamut::Standard => f.write_str("standard"),
            Gamut::P3 => f.write_str("p3"),
        }
    }
}

/// Light or dark color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

/// Solid (opaque) or alpha (translucent) scale variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Solid,
    Alpha,
}

impl ScaleKind {
    /// Suffix appended to a variable stem (`blue` -> `blueA`).
    pub fn stem_suffix(self) -> &'static str {
        match self {
            ScaleKind::Solid => "",
            ScaleKind::Alpha => "A",
        }
    }

    /// Suffix appended to a token key (`1` -> `1a`).
    pub fn token_suffix(self) -> &'static str {
        match self {
            ScaleKind::Solid => "",
            ScaleKind::Alpha => "a",
        }
    }
}
