//! Merging generated tokens into a host theme.
//!
//! Themes are JSON objects. Object key order is significant and follows
//! insertion: a key that is overwritten keeps the position it was first
//! inserted at.

use serde_json::{Map, Value};

use crate::tokens::{overlay_tokens, TokenMapping};

/// Entries every merged `colors` table starts with, in order.
pub const FIXED_COLORS: [(&str, &str); 3] = [
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
];

/// Return `theme` with its `colors` table replaced by the merged table.
///
/// - `inherit`, `current`, `transparent` are always present with fixed values.
/// - With `extend`, the incoming `colors` entries are kept and generated
///   tokens override same-named ones; without it they are discarded.
/// - `black` and `white` are always written last.
///
/// A non-object `theme` is treated as an empty object; a non-object
/// `colors` table contributes nothing.
pub fn extend_theme(theme: Value, tokens: &TokenMapping, prefix: &str, extend: bool) -> Value {
    let mut theme = match theme {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let mut colors = Map::new();
    insert_fixed(&mut colors);

    if extend {
        if let Some(Value::Object(existing)) = theme.get("colors") {
            for (name, value) in existing {
                colors.insert(name.clone(), value.clone());
            }
            insert_fixed(&mut colors);
        }
    }

    for (name, value) in tokens.iter() {
        colors.insert(name.clone(), value.clone());
    }

    colors.insert(
        "black".into(),
        Value::Object(overlay_tokens(prefix, "black", "#000")),
    );
    colors.insert(
        "white".into(),
        Value::Object(overlay_tokens(prefix, "white", "#fff")),
    );

    theme.insert("colors".into(), Value::Object(colors));
    Value::Object(theme)
}

fn insert_fixed(colors: &mut Map<String, Value>) {
    for (name, value) in FIXED_COLORS {
        colors.insert(name.into(), Value::String(value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PresetOptions;
    use crate::resolve::ResolvedColors;
    use serde_json::json;

    fn mapping(colors: &[&str]) -> TokenMapping {
        let options = PresetOptions::new(colors.iter().copied());
        TokenMapping::build(&ResolvedColors::from_options(&options), "radix-", true)
    }

    fn color_keys(theme: &Value) -> Vec<String> {
        theme["colors"].as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn replaces_colors_without_extend() {
        let theme = json!({ "colors": { "brand": "#123456" }, "spacing": { "1": "4px" } });
        let merged = extend_theme(theme, &mapping(&["blue"]), "radix-", false);

        assert_eq!(
            color_keys(&merged),
            vec!["inherit", "current", "transparent", "blue", "black", "white"]
        );
        assert_eq!(merged["spacing"]["1"], "4px");
    }

    #[test]
    fn keeps_existing_colors_with_extend() {
        let theme = json!({ "colors": { "brand": "#123456", "blue": "#00f" } });
        let merged = extend_theme(theme, &mapping(&["blue"]), "radix-", true);

        assert_eq!(
            color_keys(&merged),
            vec!["inherit", "current", "transparent", "brand", "blue", "black", "white"]
        );
        assert_eq!(merged["colors"]["brand"], "#123456");
        assert_eq!(merged["colors"]["blue"]["9"], "var(--radix-blue9)");
    }

    #[test]
    fn alias_named_like_primary_keeps_its_slot() {
        let mut options = PresetOptions::new(["blue", "red"]);
        options.aliases.insert("blue".into(), "amber".into());
        let tokens = TokenMapping::build(&ResolvedColors::from_options(&options), "radix-", true);
        let merged = extend_theme(json!({}), &tokens, "radix-", false);

        assert_eq!(
            color_keys(&merged),
            vec!["inherit", "current", "transparent", "blue", "red", "black", "white"]
        );
        assert_eq!(merged["colors"]["blue"]["9"], "var(--radix-amber9)");
        assert_eq!(merged["colors"]["blue"]["fg"], "var(--radix-fg-black)");
    }

    #[test]
    fn fixed_entries_override_existing_values() {
        let theme = json!({ "colors": { "current": "red", "inherit": "nope" } });
        let merged = extend_theme(theme, &mapping(&[]), "radix-", true);
        assert_eq!(merged["colors"]["current"], "currentColor");
        assert_eq!(merged["colors"]["inherit"], "inherit");
        assert_eq!(merged["colors"]["transparent"], "transparent");
    }

    #[test]
    fn black_and_white_cannot_be_overridden() {
        let theme = json!({ "colors": { "black": "#0a0a0a", "white": "#fafafa" } });
        let merged = extend_theme(theme, &mapping(&[]), "radix-", true);
        assert_eq!(merged["colors"]["black"]["DEFAULT"], "#000");
        assert_eq!(merged["colors"]["white"]["DEFAULT"], "#fff");
        assert_eq!(merged["colors"]["white"]["5a"], "var(--radix-whiteA5)");
    }

    #[test]
    fn non_object_theme_becomes_object() {
        let merged = extend_theme(Value::Null, &mapping(&["red"]), "radix-", true);
        assert!(merged.is_object());
        assert_eq!(
            color_keys(&merged),
            vec!["inherit", "current", "transparent", "red", "black", "white"]
        );
    }

    #[test]
    fn colors_key_keeps_its_position() {
        let theme = json!({ "a": 1, "colors": {}, "z": 2 });
        let merged = extend_theme(theme, &mapping(&[]), "radix-", false);
        let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "colors", "z"]);
    }
}
