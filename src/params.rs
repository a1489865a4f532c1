//! Shim parameters: an ordered key→value mapping with recursive merge.
//!
//! Every shim is constructed from a [`Params`] map built by merging the
//! caller's values over the shim's own defaults. Values are JSON values
//! because both invocation surfaces speak JSON-ish data: tag/CLI attributes
//! arrive as strings, programmatic callers may pass nested objects.
//!
//! ## Merge semantics
//!
//! Caller values win on key collision. When both sides hold an object the
//! merge recurses key-by-key instead of replacing the whole subtree:
//!
//! ```
//! use shimkit::params::Params;
//! use serde_json::json;
//!
//! let defaults = Params::from_value(json!({"image": {"quality": 80, "thumb": false}})).unwrap();
//! let caller = Params::from_value(json!({"image": {"quality": 95}})).unwrap();
//! let merged = caller.merge_over(defaults);
//!
//! assert_eq!(merged.u32_at("image:quality"), Some(95));
//! assert_eq!(merged.bool_at("image:thumb"), Some(false));
//! ```
//!
//! ## Path lookup
//!
//! [`Params::get`] descends nested objects through a colon-delimited path
//! (`"a:b"` reads `params["a"]["b"]`). The first missing segment at any
//! depth short-circuits to `None`; lookup never panics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Merged shim parameters. Immutable once a shim handle is constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build params from a JSON value. Returns `None` unless the value is
    /// an object — callers treat that as "fall back to defaults alone".
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The params as a JSON object value (used by the JSON echo shim).
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge `self` (caller values) over `defaults`. Caller wins on scalar
    /// collision; nested objects merge recursively.
    pub fn merge_over(self, defaults: Params) -> Params {
        Params(merge_objects(defaults.0, self.0))
    }

    /// Look up a value by colon-delimited path (`"a:b"` → `self["a"]["b"]`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split(':');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// String view of a value. Non-string scalars render as their JSON text
    /// so `quality=80` and `quality="80"` read the same from a shim.
    pub fn string_at(&self, path: &str) -> Option<String> {
        match self.get(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Numeric view. Tag attributes are strings, so `"50"` parses to `50.0`.
    pub fn f64_at(&self, path: &str) -> Option<f64> {
        match self.get(path)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn u32_at(&self, path: &str) -> Option<u32> {
        match self.get(path)? {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean view with tag-surface coercion: `"yes"`, `"true"`, `"y"` and
    /// `"1"` are true; `"no"`, `"false"`, `"n"`, `"0"` and `""` are false.
    pub fn bool_at(&self, path: &str) -> Option<bool> {
        match self.get(path)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(n.as_f64().is_some_and(|n| n != 0.0)),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "yes" | "true" | "y" | "1" => Some(true),
                "no" | "false" | "n" | "0" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Parse a `key=value` CLI argument into a params entry. The value stays
    /// a string, exactly like a template-tag attribute.
    pub fn parse_pair(pair: &str) -> Option<(String, Value)> {
        let (key, value) = pair.split_once('=')?;
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), Value::String(value.to_string())))
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Recursively merge `overlay` onto `base`. Overlay wins on collision
/// unless both sides are objects, in which case the merge recurses.
fn merge_objects(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, overlay_val) in overlay {
        let merged = match base.remove(&key) {
            Some(base_val) => merge_values(base_val, overlay_val),
            None => overlay_val,
        };
        base.insert(key, merged);
    }
    base
}

fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge_objects(base_map, overlay_map))
        }
        (_, overlay) => overlay,
    }
}
