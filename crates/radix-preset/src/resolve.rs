//! Color name and alias resolution.

use radix_palette::ColorFamily;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::options::PresetOptions;

/// The validated set of families and aliases a preset generates tokens for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColors {
    families: Vec<ColorFamily>,
    aliases: Vec<(String, ColorFamily)>,
}

impl ResolvedColors {
    /// Deduplicate the requested names (first-seen order) and drop any that
    /// are not known families. Aliases whose target is not a known family
    /// are dropped too.
    pub fn from_options(options: &PresetOptions) -> Self {
        let mut seen = HashSet::new();
        let mut families = Vec::new();

        for name in &options.colors {
            if !seen.insert(name.as_str()) {
                continue;
            }
            match ColorFamily::from_name(name) {
                Some(family) => families.push(family),
                None => debug!(name = %name, "ignoring unknown color name"),
            }
        }

        let aliases = options
            .aliases
            .iter()
            .filter_map(|(alias, target)| match ColorFamily::from_name(target) {
                Some(family) => Some((alias.clone(), family)),
                None => {
                    warn!(alias = %alias, target = %target, "dropping alias to unknown color");
                    None
                }
            })
            .collect();

        Self { families, aliases }
    }

    /// Validated primary families, in first-requested order.
    pub fn families(&self) -> &[ColorFamily] {
        &self.families
    }

    pub fn aliases(&self) -> &[(String, ColorFamily)] {
        &self.aliases
    }

    pub fn contains(&self, family: ColorFamily) -> bool {
        self.families.contains(&family)
    }

    /// Token names paired with the family they reference: primaries first,
    /// then aliases.
    pub fn token_entries(&self) -> impl Iterator<Item = (&str, ColorFamily)> {
        self.families
            .iter()
            .map(|family| (family.name(), *family))
            .chain(self.aliases.iter().map(|(name, family)| (name.as_str(), *family)))
    }
}
