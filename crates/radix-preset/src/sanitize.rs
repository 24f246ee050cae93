//! CSS value checks used by strict validation.
//!
//! Only allows value shapes the preset can emit safely:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()`/`rgba()` with numeric arguments
//! - `color(display-p3 r g b)` and `color(display-p3 r g b / a)`
//! - `var(--name)` references
//! - Identifiers (`[A-Za-z0-9_-]`) for prefixes and alias names
//! - Selector lists without block or statement delimiters
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `@import`, `;`, `}`, `{`, `<`, `>`

use regex::Regex;
use std::sync::LazyLock;

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

static P3_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^color\(display-p3(\s+[0-9]*\.?[0-9]+){3}(\s*/\s*[0-9]*\.?[0-9]+)?\s*\)$")
        .unwrap()
});

static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^var\(--[A-Za-z0-9_-]+\)$").unwrap());

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a CSS color literal.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    if trimmed.starts_with("color(") {
        if P3_RE.is_match(trimmed) {
            return Ok(());
        }
        return Err(format!("malformed display-p3 color: '{trimmed}'"));
    }

    if VAR_RE.is_match(trimmed) {
        return Ok(());
    }

    Err(format!(
        "invalid CSS color: expected hex, rgb()/rgba(), color(display-p3 ...) or var(), got '{trimmed}'"
    ))
}

/// Validate a selector list such as `.dark, .dark-theme`.
pub fn validate_css_selector(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("empty selector".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.contains('@') {
        return Err(format!("at-rule in selector: '{trimmed}'"));
    }
    if trimmed.split(',').any(|part| part.trim().is_empty()) {
        return Err(format!("empty entry in selector list: '{trimmed}'"));
    }

    Ok(())
}

/// Validate a custom-property name fragment. Empty is allowed.
pub fn validate_css_ident(value: &str) -> Result<(), String> {
    if IDENT_RE.is_match(value) {
        Ok(())
    } else {
        Err(format!(
            "'{value}' may only contain letters, digits, '-' and '_'"
        ))
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "@import",
        "@charset",
        "behavior:",
        "-moz-binding",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    for ch in [';', '{', '}', '<', '>'] {
        if value.contains(ch) {
            return Err(format!("CSS injection blocked: contains '{ch}'"));
        }
    }

    Ok(())
}

fn validate_hex_color(value: &str) -> Result<(), String> {
    let hex = &value[1..];

    if !matches!(hex.len(), 3 | 4 | 6 | 8) {
        return Err(format!(
            "invalid hex color length: expected 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: non-hex character in '{value}'"));
    }

    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), String> {
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("malformed rgb/rgba: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();

    let expected_count = if value.starts_with("rgba(") { 4 } else { 3 };
    if parts.len() != expected_count {
        return Err(format!(
            "expected {expected_count} arguments in '{value}', got {}",
            parts.len()
        ));
    }

    for (i, part) in parts.iter().enumerate() {
        if part.parse::<f64>().is_err() {
            return Err(format!(
                "non-numeric argument at position {i} in '{value}': '{part}'"
            ));
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
