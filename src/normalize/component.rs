//! Component-name normalization.
//!
//! A three-stage deterministic pipeline: text cleanup (Unicode folding,
//! null-token detection, whitespace collapse, lowercasing), electronics
//! unit standardization, and common-name consolidation. The empty string is
//! the canonical "no information" output, distinct from an absent field.

use std::sync::LazyLock;

use regex::Regex;

/// Case-folded values that mean "no component name".
const NULL_VALUES: &[&str] = &["", "null", "none", "n/a", "na", "-", "--"];

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Ordered unit-notation substitutions. kohm/mohm collapse before the plain
/// ohm rule so the multiplier survives; bare digit-suffix expansion
/// (`100n` -> `100nf`) is word-boundary guarded on both sides so it never
/// fires inside part numbers.
static UNIT_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Resistance: kohm/mohm -> k/m multiplier
        (r"(\d+(?:\.\d+)?)\s*kohm", "${1}k"),
        (r"(\d+(?:\.\d+)?)\s*mohm", "${1}m"),
        // Resistance: plain ohm (collapse spacing)
        (r"(\d+(?:\.\d+)?)\s*ohm", "${1}ohm"),
        // Resistance: R notation (220r -> 220ohm)
        (r"\b(\d+(?:\.\d+)?)r\b", "${1}ohm"),
        // Capacitance: normalize spacing for explicit units
        (r"(\d+(?:\.\d+)?)\s*uf\b", "${1}uf"),
        (r"(\d+(?:\.\d+)?)\s*nf\b", "${1}nf"),
        (r"(\d+(?:\.\d+)?)\s*pf\b", "${1}pf"),
        // Capacitance: bare suffix -> full unit
        (r"\b(\d+(?:\.\d+)?)u\b", "${1}uf"),
        (r"\b(\d+(?:\.\d+)?)n\b", "${1}nf"),
        (r"\b(\d+(?:\.\d+)?)p\b", "${1}pf"),
        // Inductance: normalize spacing
        (r"(\d+(?:\.\d+)?)\s*uh\b", "${1}uh"),
        (r"(\d+(?:\.\d+)?)\s*mh\b", "${1}mh"),
        (r"(\d+(?:\.\d+)?)\s*nh\b", "${1}nh"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("static regex"), replacement))
    .collect()
});

static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:a|an|the)\s+").expect("static regex"));

/// Whole-word abbreviation expansions; never substring matches, so
/// "capacitive" and "pressure sensor" pass through untouched.
static ABBREV_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bres\b", "resistor"),
        (r"\bcap\b", "capacitor"),
        (r"\bind\b", "inductor"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("static regex"), replacement))
    .collect()
});

/// Translate the Unicode characters that show up in component values to
/// ASCII equivalents.
fn fold_unicode(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{00B5}' | '\u{03BC}' => folded.push('u'), // micro sign, Greek mu
            '\u{2126}' | '\u{03A9}' | '\u{03C9}' => folded.push_str("ohm"), // ohm sign, omegas
            '\u{2013}' | '\u{2014}' => folded.push('-'), // en/em dash
            '\u{2018}' | '\u{2019}' | '\u{2032}' => folded.push('\''), // curly quotes, prime
            '\u{201C}' | '\u{201D}' => folded.push('"'), // curly double quotes
            '\u{00B1}' => folded.push_str("+-"),
            '\u{00D7}' => folded.push('x'),
            '\u{00B0}' => folded.push_str("deg"),
            _ => folded.push(ch),
        }
    }
    folded
}

/// Stage 1: fold, trim, null-token check, whitespace collapse, lowercase.
fn clean_text(raw: &str) -> String {
    let folded = fold_unicode(raw);
    let trimmed = folded.trim();
    if NULL_VALUES.contains(&trimmed.to_lowercase().as_str()) {
        return String::new();
    }
    let collapsed = MULTI_SPACE.replace_all(trimmed, " ");
    collapsed.to_lowercase().trim().to_string()
}

/// Stage 2: ordered unit-notation substitutions.
fn normalize_units(text: &str) -> String {
    let mut text = text.to_string();
    for (pattern, replacement) in UNIT_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text
}

/// Stage 3: strip a leading article and expand whole-word abbreviations.
fn consolidate(text: &str) -> String {
    let mut text = LEADING_ARTICLE.replace(text, "").into_owned();
    for (pattern, replacement) in ABBREV_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text.trim().to_string()
}

/// Normalize a raw component name to its canonical form.
///
/// Returns the empty string for empty or null-like input.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = clean_text(raw);
    if text.is_empty() {
        return text;
    }
    consolidate(&normalize_units(&text))
}
