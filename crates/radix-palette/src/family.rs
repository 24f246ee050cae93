//! The fixed set of named Radix color families.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named Radix color scale.
///
/// The set is closed: only these 31 families exist in the dictionary.
/// Names are the lowercase variant names (`"gray"`, `"tomato"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Gray,
    Mauve,
    Slate,
    Sage,
    Olive,
    Sand,
    Tomato,
    Red,
    Ruby,
    Crimson,
    Pink,
    Plum,
    Purple,
    Violet,
    Iris,
    Indigo,
    Blue,
    Cyan,
    Teal,
    Jade,
    Green,
    Grass,
    Bronze,
    Gold,
    Brown,
    Orange,
    Amber,
    Yellow,
    Lime,
    Mint,
    Sky,
}

impl ColorFamily {
    /// Every family, in palette order.
    pub const ALL: [ColorFamily; 31] = [
        ColorFamily::Gray,
        ColorFamily::Mauve,
        ColorFamily::Slate,
        ColorFamily::Sage,
        ColorFamily::Olive,
        ColorFamily::Sand,
        ColorFamily::Tomato,
        ColorFamily::Red,
        ColorFamily::Ruby,
        ColorFamily::Crimson,
        ColorFamily::Pink,
        ColorFamily::Plum,
        ColorFamily::Purple,
        ColorFamily::Violet,
        ColorFamily::Iris,
        ColorFamily::Indigo,
        ColorFamily::Blue,
        ColorFamily::Cyan,
        ColorFamily::Teal,
        ColorFamily::Jade,
        ColorFamily::Green,
        ColorFamily::Grass,
        ColorFamily::Bronze,
        ColorFamily::Gold,
        ColorFamily::Brown,
        ColorFamily::Orange,
        ColorFamily::Amber,
        ColorFamily::Yellow,
        ColorFamily::Lime,
        ColorFamily::Mint,
        ColorFamily::Sky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorFamily::Gray => "gray",
            ColorFamily::Mauve => "mauve",
            ColorFamily::Slate => "slate",
            ColorFamily::Sage => "sage",
            ColorFamily::Olive => "olive",
            ColorFamily::Sand => "sand",
            ColorFamily::Tomato => "tomato",
            ColorFamily::Red => "red",
            ColorFamily::Ruby => "ruby",
            ColorFamily::Crimson => "crimson",
            ColorFamily::Pink => "pink",
            ColorFamily::Plum => "plum",
            ColorFamily::Purple => "purple",
            ColorFamily::Violet => "violet",
            ColorFamily::Iris => "iris",
            ColorFamily::Indigo => "indigo",
            ColorFamily::Blue => "blue",
            ColorFamily::Cyan => "cyan",
            ColorFamily::Teal => "teal",
            ColorFamily::Jade => "jade",
            ColorFamily::Green => "green",
            ColorFamily::Grass => "grass",
            ColorFamily::Bronze => "bronze",
            ColorFamily::Gold => "gold",
            ColorFamily::Brown => "brown",
            ColorFamily::Orange => "orange",
            ColorFamily::Amber => "amber",
            ColorFamily::Yellow => "yellow",
            ColorFamily::Lime => "lime",
            ColorFamily::Mint => "mint",
            ColorFamily::Sky => "sky",
        }
    }

    /// Look up a family by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.name() == name)
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that is not one of the 31 families.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color family: '{0}'")]
pub struct UnknownFamily(pub String);

impl FromStr for ColorFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownFamily(s.to_string()))
    }
}
