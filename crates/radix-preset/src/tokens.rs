//! Theme token mapping: color names to CSS variable references.

use radix_common::{steps, ScaleKind};
use radix_palette::ColorFamily;
use serde_json::{Map, Value};

use crate::resolve::ResolvedColors;

/// Name segment used for foreground variables (`--radix-fg-white`).
pub const FG_PREFIX: &str = "fg-";

/// Foreground overlay paired with a family for readable text on step 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    pub fn name(self) -> &'static str {
        match self {
            Foreground::Black => "black",
            Foreground::White => "white",
        }
    }
}

/// Bright families take black text; everything else takes white.
pub fn foreground_for(family: ColorFamily) -> Foreground {
    match family {
        ColorFamily::Sky
        | ColorFamily::Mint
        | ColorFamily::Lime
        | ColorFamily::Yellow
        | ColorFamily::Amber => Foreground::Black,
        _ => Foreground::White,
    }
}

/// `var(--<prefix><name>)`.
pub fn var_ref(prefix: &str, name: &str) -> String {
    format!("var(--{prefix}{name})")
}

/// Steps 1-12 of one scale: `"3"` -> `var(--radix-blue3)` for solid,
/// `"3a"` -> `var(--radix-blueA3)` for alpha.
pub fn scale_tokens(prefix: &str, name: &str, kind: ScaleKind) -> Map<String, Value> {
    let stem = format!("{name}{}", kind.stem_suffix());
    steps()
        .map(|step| {
            (
                format!("{step}{}", kind.token_suffix()),
                Value::String(var_ref(prefix, &format!("{stem}{step}"))),
            )
        })
        .collect()
}

/// Full token set for one family: solid steps, `fg`, then alpha steps.
pub fn family_tokens(prefix: &str, family: ColorFamily, alpha: bool) -> Map<String, Value> {
    let mut tokens = scale_tokens(prefix, family.name(), ScaleKind::Solid);
    let fg = format!("{FG_PREFIX}{}", foreground_for(family).name());
    tokens.insert("fg".into(), Value::String(var_ref(prefix, &fg)));
    if alpha {
        tokens.extend(scale_tokens(prefix, family.name(), ScaleKind::Alpha));
    }
    tokens
}

/// Built-in `black`/`white` entry: a literal `DEFAULT` plus the overlay
/// alpha scale.
pub fn overlay_tokens(prefix: &str, name: &str, default: &str) -> Map<String, Value> {
    let mut tokens = Map::new();
    tokens.insert("DEFAULT".into(), Value::String(default.into()));
    tokens.extend(scale_tokens(prefix, name, ScaleKind::Alpha));
    tokens
}

/// Token name -> scale mapping for every resolved color and alias.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenMapping {
    entries: Map<String, Value>,
}

impl TokenMapping {
    pub fn build(resolved: &ResolvedColors, prefix: &str, alpha: bool) -> Self {
        let entries = resolved
            .token_entries()
            .map(|(name, family)| {
                (
                    name.to_string(),
                    Value::Object(family_tokens(prefix, family, alpha)),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Map<String, Value>> {
        self.entries.get(name).and_then(Value::as_object)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}
