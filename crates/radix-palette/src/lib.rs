//! Radix color palette table.
//!
//! A read-only view over the vendored Radix color dictionary. The
//! dictionary is embedded at compile time and parsed once; palettes are
//! built per [`Gamut`] and cached for the life of the process.
//!
//! ```rust
//! use radix_palette::{palette, ColorFamily, Gamut};
//!
//! let table = palette(Gamut::Standard);
//! let blue = table.family(ColorFamily::Blue).unwrap();
//! assert_eq!(blue.light.solid.get(9), Some("#0090ff"));
//! ```

pub mod dictionary;
pub mod family;
pub mod palette;
pub mod scale;

pub use family::{ColorFamily, UnknownFamily};
pub use palette::{build_palette, palette, FamilyPalette, ModeScales, Overlays, Palette};
pub use radix_common::{Appearance, Gamut, ScaleKind};
pub use scale::Scale;
