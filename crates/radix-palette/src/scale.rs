//! A single 12-step color scale bound to its CSS variable stem.

use radix_common::steps;

use crate::dictionary::Dictionary;

/// One scale of literals plus the stem its custom properties are named by.
///
/// The stem does not encode appearance or gamut: `blueDarkA` is still
/// emitted as `blueA1`..`blueA12`, so dark and P3 blocks redefine the same
/// variables as the light block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    stem: String,
    literals: Vec<String>,
}

impl Scale {
    /// Read `key` from the dictionary. A missing key yields an empty scale
    /// that contributes no declarations.
    pub fn from_dictionary(dictionary: &Dictionary, key: &str, stem: impl Into<String>) -> Self {
        let stem = stem.into();
        match dictionary.get(key) {
            Some(literals) => Self {
                stem,
                literals: literals.to_vec(),
            },
            None => {
                tracing::warn!(key, "color dictionary has no scale for key");
                Self {
                    stem,
                    literals: Vec::new(),
                }
            }
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literal for a step in `1..=12`.
    pub fn get(&self, step: u8) -> Option<&str> {
        let index = usize::from(step).checked_sub(1)?;
        self.literals.get(index).map(String::as_str)
    }

    /// `(variable key, literal)` pairs in step order, e.g. `("blueA3", "#...")`.
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        steps()
            .zip(self.literals.iter())
            .map(move |(step, literal)| (format!("{}{step}", self.stem), literal.as_str()))
    }
}
