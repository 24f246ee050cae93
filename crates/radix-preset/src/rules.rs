//! Dynamically matched style rules.
//!
//! A rule owns a selector pattern and turns a matching utility name into a
//! set of CSS properties. The only rule the preset registers is the
//! typography rule, `<selector>-radix-<color>`, which points the
//! `--un-prose-*` variables at a Radix scale.

use radix_palette::ColorFamily;
use regex::Regex;
use std::fmt;

use crate::tokens::var_ref;

/// Ordered CSS declarations produced by a rule match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssProperties(Vec<(String, String)>);

impl CssProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.push((property.into(), value.into()));
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a class rule: `.<class> { prop: value; ... }`.
    pub fn to_css(&self, class: &str) -> String {
        let body: String = self
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect();
        format!(".{class} {{ {body} }}")
    }
}

/// A style rule matched against utility names at generation time.
pub trait StyleRule: fmt::Debug + Send + Sync {
    /// The pattern utility names are matched against.
    fn pattern(&self) -> &Regex;

    /// Properties for `selector`, or `None` if it does not match or names
    /// something the rule does not know.
    fn matches(&self, selector: &str) -> Option<CssProperties>;
}

/// `--un-prose-*` role and the scale step it reads from.
const PROSE_ROLES: [(&str, u8); 9] = [
    ("--un-prose-body", 12),
    ("--un-prose-headings", 12),
    ("--un-prose-links", 11),
    ("--un-prose-lists", 11),
    ("--un-prose-hr", 8),
    ("--un-prose-captions", 11),
    ("--un-prose-code", 12),
    ("--un-prose-borders", 6),
    ("--un-prose-bg-soft", 3),
];

/// Maps `<selector>-radix-<color>` to prose variables for `<color>`.
///
/// Only families in the preset's validated color list match; aliases and
/// unknown names produce nothing.
#[derive(Debug, Clone)]
pub struct TypographyRule {
    pattern: Regex,
    prefix: String,
    families: Vec<ColorFamily>,
}

impl TypographyRule {
    pub fn new(
        typography_selector: &str,
        prefix: &str,
        families: &[ColorFamily],
    ) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"^{}-radix-([-A-Za-z0-9_]+)$",
            regex::escape(typography_selector)
        ))?;
        Ok(Self {
            pattern,
            prefix: prefix.to_string(),
            families: families.to_vec(),
        })
    }

    fn properties(&self, family: ColorFamily) -> CssProperties {
        let mut props = CssProperties::new();
        for (role, step) in PROSE_ROLES {
            let name = format!("{}{step}", family.name());
            props.push(role, var_ref(&self.prefix, &name));
        }
        // TODO: invert the prose palette for dark mode (`--un-prose-invert-*`).
        props
    }
}

impl StyleRule for TypographyRule {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn matches(&self, selector: &str) -> Option<CssProperties> {
        let caps = self.pattern.captures(selector)?;
        let family = ColorFamily::from_name(&caps[1])?;
        if !self.families.contains(&family) {
            return None;
        }
        Some(self.properties(family))
    }
}
