//! Normalized palette views, one per gamut.

use radix_common::{Appearance, Gamut, ScaleKind};
use std::sync::LazyLock;

use crate::dictionary::{dictionary, overlay_key, scale_key, Dictionary};
use crate::family::ColorFamily;
use crate::scale::Scale;

static STANDARD_PALETTE: LazyLock<Palette> =
    LazyLock::new(|| build_palette_from(dictionary(), Gamut::Standard));
static P3_PALETTE: LazyLock<Palette> =
    LazyLock::new(|| build_palette_from(dictionary(), Gamut::P3));

/// Solid and alpha scales for one appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeScales {
    pub solid: Scale,
    pub alpha: Scale,
}

impl ModeScales {
    pub fn scale(&self, kind: ScaleKind) -> &Scale {
        match kind {
            ScaleKind::Solid => &self.solid,
            ScaleKind::Alpha => &self.alpha,
        }
    }
}

/// All scales of one family within a gamut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyPalette {
    pub family: ColorFamily,
    pub light: ModeScales,
    pub dark: ModeScales,
}

impl FamilyPalette {
    pub fn mode(&self, appearance: Appearance) -> &ModeScales {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }
}

/// Black and white alpha-only backdrop scales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlays {
    pub black: Scale,
    pub white: Scale,
}

impl Overlays {
    /// Black then white, the order their declarations are emitted in.
    pub fn iter(&self) -> impl Iterator<Item = &Scale> {
        [&self.black, &self.white].into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub gamut: Gamut,
    pub overlays: Overlays,
    pub colors: Vec<FamilyPalette>,
}

impl Palette {
    pub fn family(&self, family: ColorFamily) -> Option<&FamilyPalette> {
        self.colors.iter().find(|entry| entry.family == family)
    }
}

/// Build a palette for `gamut` from the embedded dictionary.
pub fn build_palette(gamut: Gamut) -> Palette {
    build_palette_from(dictionary(), gamut)
}

/// Cached palette for `gamut`, built on first use.
pub fn palette(gamut: Gamut) -> &'static Palette {
    match gamut {
        Gamut::Standard => &STANDARD_PALETTE,
        Gamut::P3 => &P3_PALETTE,
    }
}

pub(crate) fn build_palette_from(dictionary: &Dictionary, gamut: Gamut) -> Palette {
    let overlay = |base: &str| {
        Scale::from_dictionary(dictionary, &overlay_key(base, gamut), format!("{base}A"))
    };

    let mode_scales = |family: ColorFamily, appearance: Appearance| {
        let scale = |kind: ScaleKind| {
            Scale::from_dictionary(
                dictionary,
                &scale_key(family, appearance, gamut, kind),
                format!("{}{}", family.name(), kind.stem_suffix()),
            )
        };
        ModeScales {
            solid: scale(ScaleKind::Solid),
            alpha: scale(ScaleKind::Alpha),
        }
    };

    Palette {
        gamut,
        overlays: Overlays {
            black: overlay("black"),
            white: overlay("white"),
        },
        colors: ColorFamily::ALL
            .into_iter()
            .map(|family| FamilyPalette {
                family,
                light: mode_scales(family, Appearance::Light),
                dark: mode_scales(family, Appearance::Dark),
            })
            .collect(),
    }
}
