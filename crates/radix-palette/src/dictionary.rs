//! The vendored Radix color dictionary.
//!
//! Keys follow the upstream export naming: `blue`, `blueA`, `blueP3`,
//! `blueP3A`, `blueDark`, `blueDarkA`, `blueDarkP3`, `blueDarkP3A`, plus the
//! overlay scales `blackA`, `whiteA`, `blackP3A`, `whiteP3A`. Every value is
//! exactly 12 literals, step 1 first.

use radix_common::{Appearance, Gamut, ScaleKind, STEP_COUNT};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::family::ColorFamily;

const RAW_DICTIONARY: &str = include_str!("../data/radix-colors.json");

static DICTIONARY: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::parse(RAW_DICTIONARY).unwrap_or_else(|e| {
        tracing::error!(error = %e, "embedded color dictionary is malformed");
        Dictionary::default()
    })
});

/// Literals for one scale, indexed by `step - 1`.
pub type ScaleSteps = [String; STEP_COUNT];

/// Key/scale lookup over the color dictionary.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    scales: HashMap<String, ScaleSteps>,
}

impl Dictionary {
    /// Parse a dictionary from its JSON form.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn get(&self, key: &str) -> Option<&ScaleSteps> {
        self.scales.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.scales.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

/// The embedded dictionary, parsed on first use.
pub fn dictionary() -> &'static Dictionary {
    &DICTIONARY
}

/// Dictionary key for a family scale, e.g. `blueDarkP3A`.
pub fn scale_key(
    family: ColorFamily,
    appearance: Appearance,
    gamut: Gamut,
    kind: ScaleKind,
) -> String {
    let mut key = String::from(family.name());
    if appearance == Appearance::Dark {
        key.push_str("Dark");
    }
    if gamut == Gamut::P3 {
        key.push_str("P3");
    }
    key.push_str(kind.stem_suffix());
    key
}

/// Dictionary key for an overlay scale, e.g. `whiteP3A`.
pub fn overlay_key(base: &str, gamut: Gamut) -> String {
    match gamut {
        Gamut::Standard => format!("{base}A"),
        Gamut::P3 => format!("{base}P3A"),
    }
}
