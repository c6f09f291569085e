//! Defensive lookups over a parsed document tree.
//!
//! None of these functions fail: a missing key, an out-of-range index and a
//! value of the wrong shape all resolve to `None`, `false` or the supplied
//! default.

use serde_yaml::{Mapping, Value};

use super::location::{Location, Segment};

/// Find the value at `path`, if every step along it exists.
pub fn lookup<'a>(value: &'a Value, path: &Location) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(value, |current, segment| match segment {
            Segment::Key(key) => mapping_get(current.as_mapping()?, key),
            Segment::Index(index) => current.as_sequence()?.get(*index),
        })
}

/// Whether every step along `path` exists.
pub fn has_path(value: &Value, path: &Location) -> bool {
    lookup(value, path).is_some()
}

/// The value at `path`, or `default` when absent.
pub fn get<'a>(value: &'a Value, path: &Location, default: &'a Value) -> &'a Value {
    lookup(value, path).unwrap_or(default)
}

/// The string at `path`, if present and a string.
pub fn get_str<'a>(value: &'a Value, path: &Location) -> Option<&'a str> {
    lookup(value, path)?.as_str()
}

/// The mapping at `path`, if present and a mapping.
pub fn get_mapping<'a>(value: &'a Value, path: &Location) -> Option<&'a Mapping> {
    lookup(value, path)?.as_mapping()
}

/// The sequence at `path`, if present and a sequence.
pub fn get_sequence<'a>(value: &'a Value, path: &Location) -> Option<&'a Vec<Value>> {
    lookup(value, path)?.as_sequence()
}

/// Render a scalar mapping key as a string.
///
/// YAML happily parses `200:` as an integer key, so numbers and booleans
/// are rendered to their textual form.
pub fn key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Iterate a mapping's scalar-keyed entries in document order.
pub fn entries<'a>(mapping: &'a Mapping) -> impl Iterator<Item = (String, &'a Value)> + 'a {
    mapping
        .iter()
        .filter_map(|(key, value)| key_string(key).map(|k| (k, value)))
}

/// Look up a key by its textual form.
fn mapping_get<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.get(key).or_else(|| {
        mapping
            .iter()
            .find(|(k, _)| key_string(k).as_deref() == Some(key))
            .map(|(_, v)| v)
    })
}
