//! CSS text generation for the palette custom properties.
//!
//! Blocks are concatenated in cascade order: foreground `:root`, overlay
//! `:root`, light, `prefers-color-scheme` dark, explicit dark, then the P3
//! wrapper repeating all of it with wide-gamut literals.

use radix_common::{Appearance, Gamut};
use radix_palette::{palette, FamilyPalette, Palette};

use crate::options::{Foregrounds, PresetOptions};
use crate::resolve::ResolvedColors;
use crate::tokens::FG_PREFIX;

/// A custom property ready to be written into a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    /// Property name without the leading `--` or prefix (e.g. `blue9`).
    pub name: String,
    pub value: String,
}

impl CssVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `--<prefix><name>: <value>;`
    pub fn declaration(&self, prefix: &str) -> String {
        format!("--{prefix}{}: {};", self.name, self.value)
    }
}

/// Join declarations for `variables` with no separator.
pub fn declarations<I>(prefix: &str, variables: I) -> String
where
    I: IntoIterator<Item = CssVariable>,
{
    variables
        .into_iter()
        .map(|variable| variable.declaration(prefix))
        .collect()
}

/// `:root { --<prefix>fg-white: #fff;--<prefix>fg-black: #000; }`
pub fn foreground_css(prefix: &str, foregrounds: &Foregrounds) -> String {
    let vars = declarations(
        prefix,
        foregrounds
            .entries()
            .map(|(name, value)| CssVariable::new(format!("{FG_PREFIX}{name}"), value)),
    );
    format!(":root {{ {vars} }}")
}

/// Settings shared by every palette block.
#[derive(Debug, Clone, Copy)]
pub struct PaletteCss<'a> {
    pub prefix: &'a str,
    pub light_selector: &'a str,
    pub dark_selector: &'a str,
    pub alpha: bool,
    pub dark: bool,
    pub prefers_color_scheme: bool,
}

impl<'a> PaletteCss<'a> {
    pub fn from_options(options: &'a PresetOptions) -> Self {
        Self {
            prefix: &options.prefix,
            light_selector: &options.light_selector,
            dark_selector: &options.dark_selector,
            alpha: options.alpha,
            dark: options.dark,
            prefers_color_scheme: options.prefers_color_scheme,
        }
    }

    /// Overlay, light and (optionally) dark blocks for one palette.
    ///
    /// Families are emitted in palette order, restricted to `resolved`.
    pub fn styles(&self, palette: &Palette, resolved: &ResolvedColors) -> String {
        let colors: Vec<&FamilyPalette> = palette
            .colors
            .iter()
            .filter(|entry| resolved.contains(entry.family))
            .collect();

        let overlay_vars = declarations(
            self.prefix,
            palette
                .overlays
                .iter()
                .flat_map(|scale| scale.entries())
                .map(|(name, value)| CssVariable::new(name, value)),
        );
        let light_vars = self.mode_vars(&colors, Appearance::Light);

        let mut styles = vec![
            format!(":root {{ {overlay_vars} }}"),
            format!("{} {{ {light_vars} }}", self.light_scope()),
        ];

        if self.dark {
            let dark_vars = self.mode_vars(&colors, Appearance::Dark);
            if self.prefers_color_scheme {
                styles.push(format!(
                    "@media only screen and (prefers-color-scheme: dark) {{ :root:not({}) {{ {dark_vars} }} }}",
                    self.light_selector
                ));
            }
            styles.push(format!("{} {{ {dark_vars} }}", self.dark_selector));
        }

        styles.concat()
    }

    /// Light variables apply to the light selector and to the root unless
    /// it carries the dark selector. Without dark mode they apply to the
    /// root unconditionally.
    fn light_scope(&self) -> String {
        if self.dark {
            format!("{}, :root:not({})", self.light_selector, self.dark_selector)
        } else {
            format!("{}, :root", self.light_selector)
        }
    }

    fn mode_vars(&self, colors: &[&FamilyPalette], appearance: Appearance) -> String {
        declarations(
            self.prefix,
            colors.iter().copied().flat_map(|entry| {
                let scales = entry.mode(appearance);
                let alpha = self.alpha.then(|| scales.alpha.entries()).into_iter().flatten();
                scales
                    .solid
                    .entries()
                    .chain(alpha)
                    .map(|(name, value)| CssVariable::new(name, value))
            }),
        )
    }
}

/// Wrap `inner` so it only applies on wide-gamut displays.
pub fn p3_wrapper(inner: &str) -> String {
    format!("@supports (color: color(display-p3 1 1 1)) {{ @media (color-gamut: p3) {{ {inner} }} }}")
}

/// Complete preflight CSS for the options.
pub fn generate_css(options: &PresetOptions, resolved: &ResolvedColors) -> String {
    let settings = PaletteCss::from_options(options);

    let mut styles = vec![
        foreground_css(&options.prefix, &options.foregrounds),
        settings.styles(palette(Gamut::Standard), resolved),
    ];

    if options.p3 {
        styles.push(p3_wrapper(&settings.styles(palette(Gamut::P3), resolved)));
    }

    let css = styles.concat();
    tracing::debug!(
        families = resolved.families().len(),
        bytes = css.len(),
        "generated palette CSS"
    );
    css
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn css_for(options: &PresetOptions) -> String {
        generate_css(options, &ResolvedColors::from_options(options))
    }

    #[test]
    fn declaration_format() {
        let var = CssVariable::new("blue9", "#0090ff");
        assert_eq!(var.declaration("radix-"), "--radix-blue9: #0090ff;");
        assert_eq!(var.declaration(""), "--blue9: #0090ff;");
    }

    #[test]
    fn declarations_join_without_separator() {
        let vars = vec![CssVariable::new("a", "1"), CssVariable::new("b", "2")];
        assert_eq!(declarations("x-", vars), "--x-a: 1;--x-b: 2;");
    }

    #[test]
    fn foreground_block_comes_first() {
        let css = css_for(&PresetOptions::new(["blue"]));
        assert!(css.starts_with(":root { --radix-fg-white: #fff;--radix-fg-black: #000; }"));
    }

    #[test]
    fn foreground_overrides_and_extras() {
        let mut options = PresetOptions::new(Vec::<String>::new());
        options.foregrounds.black = "#111".into();
        options.foregrounds.extra.insert("muted".into(), "#888".into());
        let css = foreground_css(&options.prefix, &options.foregrounds);
        assert_eq!(
            css,
            ":root { --radix-fg-white: #fff;--radix-fg-black: #111;--radix-fg-muted: #888; }"
        );
    }

    #[test]
    fn emits_overlays_in_root() {
        let css = css_for(&PresetOptions::new(["blue"]));
        assert!(css.contains(":root { --radix-blackA1: rgba(0, 0, 0, 0.05);"));
        assert!(css.contains("--radix-whiteA12: rgba(255, 255, 255, 0.95);"));
    }

    #[test]
    fn light_block_scoped_to_selector_or_non_dark_root() {
        let css = css_for(&PresetOptions::new(["blue"]));
        assert!(css.contains(
            ".light, .light-theme, :root:not(.dark, .dark-theme) { --radix-blue1: #fbfdff;"
        ));
    }

    #[test]
    fn dark_media_query_precedes_dark_selector() {
        let css = css_for(&PresetOptions::new(["blue"]));
        let media = css
            .find("@media only screen and (prefers-color-scheme: dark) { :root:not(.light, .light-theme) {")
            .unwrap();
        let explicit = css.find(".dark, .dark-theme { --radix-blue1: #0d1520;").unwrap();
        assert!(media < explicit);
    }

    #[test]
    fn no_media_query_without_prefers_color_scheme() {
        let mut options = PresetOptions::new(["blue"]);
        options.prefers_color_scheme = false;
        let css = css_for(&options);
        assert!(!css.contains("prefers-color-scheme"));
        assert!(css.contains(".dark, .dark-theme { "));
    }

    #[test]
    fn no_dark_text_when_dark_disabled() {
        let mut options = PresetOptions::new(["blue"]);
        options.dark = false;
        let css = css_for(&options);
        assert!(!css.contains(".dark"));
        assert!(!css.contains("prefers-color-scheme"));
        assert!(css.contains(".light, .light-theme, :root { "));
    }

    #[test]
    fn alpha_disabled_omits_alpha_scales() {
        let mut options = PresetOptions::new(["blue"]);
        options.alpha = false;
        let css = css_for(&options);
        assert!(css.contains("--radix-blue12:"));
        assert!(!css.contains("--radix-blueA1:"));
        // overlays are alpha-only and always emitted
        assert!(css.contains("--radix-blackA1:"));
    }

    #[test]
    fn p3_block_is_last() {
        let css = css_for(&PresetOptions::new(["blue"]));
        let supports = css
            .find("@supports (color: color(display-p3 1 1 1)) { @media (color-gamut: p3) { ")
            .unwrap();
        assert!(css[supports..].contains("--radix-blue9: color(display-p3 "));
        assert!(css.ends_with(" } }"));
        assert!(!css[..supports].contains("display-p3 0"));
    }

    #[test]
    fn no_supports_block_without_p3() {
        let mut options = PresetOptions::new(["blue"]);
        options.p3 = false;
        assert!(!css_for(&options).contains("@supports"));
    }

    #[test]
    fn families_emitted_in_palette_order() {
        let css = css_for(&PresetOptions::new(["sky", "gray"]));
        let gray = css.find("--radix-gray1:").unwrap();
        let sky = css.find("--radix-sky1:").unwrap();
        assert!(gray < sky);
    }

    #[test]
    fn only_requested_families_emitted() {
        let mut options = PresetOptions::new(["blue"]);
        options.aliases.insert("danger".into(), "red".into());
        let css = css_for(&options);
        assert!(css.contains("--radix-blue1:"));
        assert!(!css.contains("--radix-red1:"));
        assert!(!css.contains("--radix-danger"));
    }

    #[test]
    fn custom_prefix_and_selectors() {
        let mut options = PresetOptions::new(["red"]);
        options.prefix = "c-".into();
        options.light_selector = "[data-theme=light]".into();
        options.dark_selector = "[data-theme=dark]".into();
        let css = css_for(&options);
        assert!(css.contains("[data-theme=light], :root:not([data-theme=dark]) { --c-red1: "));
        assert!(css.contains("[data-theme=dark] { --c-red1: "));
        assert!(css.contains("--c-fg-white: #fff;"));
    }

    #[test]
    fn empty_color_list_still_emits_structure() {
        let css = css_for(&PresetOptions::new(Vec::<String>::new()));
        assert!(css.contains("--radix-blackA1:"));
        assert!(css.contains(".light, .light-theme, :root:not(.dark, .dark-theme) {  }"));
    }
}
