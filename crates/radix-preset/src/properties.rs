//! Property tests over arbitrary color lists and option combinations.

use proptest::prelude::*;
use radix_palette::ColorFamily;
use serde_json::json;
use std::collections::HashSet;

use crate::options::PresetOptions;
use crate::preset::preset_radix_colors;
use crate::tokens::{foreground_for, Foreground};

fn color_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(ColorFamily::ALL.to_vec()).prop_map(|f| f.name().to_string()),
        1 => "[a-z]{1,10}",
    ]
}

fn color_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(color_name(), 0..12)
}

proptest! {
    #[test]
    fn one_entry_per_unique_valid_name(colors in color_list(), alpha in any::<bool>()) {
        let mut options = PresetOptions::new(colors.clone());
        options.alpha = alpha;
        options.aliases.insert("accent".into(), "blue".into());
        let preset = preset_radix_colors(options).unwrap();

        let expected: Vec<&str> = {
            let mut seen = HashSet::new();
            colors
                .iter()
                .filter(|name| ColorFamily::from_name(name).is_some())
                .filter(|name| seen.insert(name.as_str()))
                .map(String::as_str)
                .collect()
        };

        let theme = preset.extend_theme(json!({}));
        let keys: Vec<&str> = theme["colors"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        let mut want = vec!["inherit", "current", "transparent"];
        want.extend(expected.iter().copied());
        want.extend(["accent", "black", "white"]);
        prop_assert_eq!(keys, want);
    }

    #[test]
    fn scales_have_exactly_twelve_steps(colors in color_list(), alpha in any::<bool>()) {
        let mut options = PresetOptions::new(colors);
        options.alpha = alpha;
        let preset = preset_radix_colors(options).unwrap();

        for (_, tokens) in preset.token_mapping().iter() {
            let tokens = tokens.as_object().unwrap();
            for step in 1..=12 {
                prop_assert!(tokens.contains_key(&step.to_string()));
                prop_assert_eq!(tokens.contains_key(&format!("{step}a")), alpha);
            }
            prop_assert!(!tokens.contains_key("0"));
            prop_assert!(!tokens.contains_key("13"));
            prop_assert!(!tokens.contains_key("0a"));
            prop_assert!(!tokens.contains_key("13a"));
            prop_assert_eq!(tokens.len(), if alpha { 25 } else { 13 });
        }
    }

    #[test]
    fn foreground_independent_of_options(
        family in prop::sample::select(ColorFamily::ALL.to_vec()),
        prefix in "[a-z]{0,6}-?",
        alpha in any::<bool>(),
        dark in any::<bool>(),
    ) {
        let mut options = PresetOptions::new([family.name()]);
        options.prefix = prefix.clone();
        options.alpha = alpha;
        options.dark = dark;
        let preset = preset_radix_colors(options).unwrap();

        let expected = match family.name() {
            "sky" | "mint" | "lime" | "yellow" | "amber" => Foreground::Black,
            _ => Foreground::White,
        };
        prop_assert_eq!(foreground_for(family), expected);

        let fg = preset.token_mapping().get(family.name()).unwrap()["fg"].clone();
        prop_assert_eq!(fg, json!(format!("var(--{prefix}fg-{})", expected.name())));
    }

    #[test]
    fn without_extend_prior_colors_are_dropped(
        colors in color_list(),
        prior in prop::collection::btree_map("[a-z]{1,8}", "#[0-9a-f]{6}", 0..6),
    ) {
        let preset = preset_radix_colors(PresetOptions::new(colors)).unwrap();
        let theme = preset.extend_theme(json!({ "colors": prior.clone() }));
        let merged = theme["colors"].as_object().unwrap();

        let generated: HashSet<&str> = preset.token_mapping().names().collect();
        for (name, value) in &prior {
            let allowed = ["inherit", "current", "transparent", "black", "white"]
                .contains(&name.as_str())
                || generated.contains(name.as_str());
            if !allowed {
                prop_assert!(!merged.contains_key(name));
            } else {
                prop_assert_ne!(&merged[name], &json!(value));
            }
        }
    }

    #[test]
    fn dark_disabled_emits_no_dark_rules(colors in color_list(), p3 in any::<bool>(), prefers in any::<bool>()) {
        let mut options = PresetOptions::new(colors);
        options.dark = false;
        options.p3 = p3;
        options.prefers_color_scheme = prefers;
        let css = preset_radix_colors(options).unwrap().css();

        prop_assert!(!css.contains(".dark"));
        prop_assert!(!css.contains("prefers-color-scheme"));
    }

    #[test]
    fn p3_disabled_emits_no_supports_block(colors in color_list(), dark in any::<bool>()) {
        let mut options = PresetOptions::new(colors);
        options.p3 = false;
        options.dark = dark;
        let css = preset_radix_colors(options).unwrap().css();

        prop_assert!(!css.contains("@supports (color: color(display-p3"));
        prop_assert!(!css.contains("display-p3"));
    }
}
