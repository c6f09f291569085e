//! Naming and formatting conventions of the Hyperion standard.
//!
//! Small predicates and converters shared by several rules.

use std::sync::LazyLock;

use regex::Regex;

// --- Compiled regexes (one-time via LazyLock) ---

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_SNAKE_CASE, r"^[a-z][a-z0-9]*(?:_[a-z0-9]+)*$");
lazy_regex!(RE_LOWER_CAMEL_CASE, r"^[a-z][a-z0-9]*(?:[A-Z][a-z0-9]*)*$");
lazy_regex!(RE_HEADER_CASE, r"^[A-Z][A-Za-z0-9]*(?:-[A-Z][A-Za-z0-9]*)*$");
lazy_regex!(RE_TEMPLATE, r"\{[^}]*\}");
lazy_regex!(RE_VERSION_SEGMENT, r"(?:^|/)v(\d+)(?:/|$)");
lazy_regex!(RE_SEMVER, r"^(\d+)\.(\d+)\.(\d+)(?:[-+][0-9A-Za-z.+-]+)?$");
lazy_regex!(RE_WORD_BOUNDARY, r"([a-z0-9])([A-Z])");

/// Remove `{param}` templates from a path so only literal segments remain.
pub fn strip_templates(path: &str) -> String {
    RE_TEMPLATE.replace_all(path, "").into_owned()
}

/// Whether `text` uses `_` as a word separator.
pub fn uses_underscore(text: &str) -> bool {
    text.contains('_')
}

/// Whether `text` has no uppercase characters.
pub fn is_lowercase(text: &str) -> bool {
    !text.chars().any(char::is_uppercase)
}

pub fn is_snake_case(name: &str) -> bool {
    RE_SNAKE_CASE.is_match(name)
}

pub fn is_lower_camel_case(name: &str) -> bool {
    RE_LOWER_CAMEL_CASE.is_match(name)
}

/// `Hyphenated-Title-Case`, as used for HTTP header names.
pub fn is_header_case(name: &str) -> bool {
    RE_HEADER_CASE.is_match(name)
}

/// Convert an identifier in camelCase, kebab-case or spaced form to snake_case.
pub fn to_snake_case(name: &str) -> String {
    RE_WORD_BOUNDARY
        .replace_all(name, "${1}_${2}")
        .to_lowercase()
        .replace(['-', ' ', '.'], "_")
}

/// Convert an identifier in snake_case, kebab-case or spaced form to lowerCamelCase.
pub fn to_lower_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if matches!(ch, '_' | '-' | ' ' | '.') {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// The major version carried by a `/v<N>/` segment, if any.
pub fn version_segment(path: &str) -> Option<u64> {
    RE_VERSION_SEGMENT
        .captures(path)
        .and_then(|caps| caps[1].parse().ok())
}

/// The major component of a `MAJOR.MINOR.PATCH` version string.
pub fn semver_major(version: &str) -> Option<u64> {
    RE_SEMVER
        .captures(version)
        .and_then(|caps| caps[1].parse().ok())
}

/// Whether a property or parameter name denotes a date or time value.
pub fn is_date_like(name: &str) -> bool {
    let name = to_snake_case(name);
    matches!(name.as_str(), "date" | "time" | "timestamp" | "datetime")
        || ["_at", "_date", "_time", "_timestamp", "_datetime"]
            .iter()
            .any(|suffix| name.ends_with(suffix))
}
