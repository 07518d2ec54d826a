//! Immutable structured values.
//!
//! Schemas are written as trees of text scalars and text-keyed maps. Two
//! values are equal when they have the same content: map entries are
//! compared by key regardless of the order they were inserted in, so a
//! value can be used as a set member or map key without caring how it was
//! built.

use crate::error::ParseError;
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// Insertion-ordered map with text keys.
///
/// Iteration follows insertion order. Equality and hashing do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(IndexMap<String, V>);

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts an entry, keeping the original position if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.0.insert(key.into(), value)
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Hash> Hash for OrderedMap<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        state.write_usize(entries.len());
        for (key, value) in entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Map of values.
pub type ValueMap = OrderedMap<Value>;

/// A schema value: either a text scalar or a map of values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Text scalar.
    Text(String),
    /// Text-keyed map.
    Map(ValueMap),
}

impl Value {
    /// Creates a text value.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Creates a map value from entries.
    #[must_use]
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Returns the text if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Map(_) => None,
        }
    }

    /// Returns the map if this is a map value.
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Text(_) => None,
            Self::Map(m) => Some(m),
        }
    }

    /// Converts a JSON document into a value.
    ///
    /// Strings become text and objects become maps, keeping the document's
    /// key order.
    ///
    /// # Errors
    /// Returns `ParseError::UnsupportedJson` for any other JSON kind.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, ParseError> {
        from_json_at(json, "")
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ValueMap> for Value {
    fn from(m: ValueMap) -> Self {
        Self::Map(m)
    }
}

/// Parses JSON text into a value.
///
/// # Errors
/// Returns `ParseError` if the text is not JSON or uses unsupported kinds.
pub fn parse_json(json: &str) -> Result<Value, ParseError> {
    let doc: serde_json::Value = serde_json::from_str(json)?;
    Value::from_json(&doc)
}

fn from_json_at(json: &serde_json::Value, pointer: &str) -> Result<Value, ParseError> {
    use serde_json::Value as Json;

    let unsupported = |kind| ParseError::UnsupportedJson {
        kind,
        path: if pointer.is_empty() { "/".to_string() } else { pointer.to_string() },
    };

    match json {
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Object(obj) => {
            let mut map = ValueMap::new();
            for (key, child) in obj {
                let child_pointer = format!("{}/{}", pointer, escape_pointer(key));
                map.insert(key.clone(), from_json_at(child, &child_pointer)?);
            }
            Ok(Value::Map(map))
        }
        Json::Null => Err(unsupported("null")),
        Json::Bool(_) => Err(unsupported("boolean")),
        Json::Number(_) => Err(unsupported("number")),
        Json::Array(_) => Err(unsupported("array")),
    }
}

fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_map_equality_ignores_key_order() {
        let a = Value::map([("x", Value::text("int32")), ("y", Value::text("bool"))]);
        let b = Value::map([("y", Value::text("bool")), ("x", Value::text("int32"))]);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_map_iteration_keeps_insertion_order() {
        let m: ValueMap = [("email", Value::text("string")), ("age", Value::text("uint8"))]
            .into_iter()
            .collect();
        let keys: Vec<_> = m.keys().collect();
        assert_eq!(keys, vec!["email", "age"]);
    }

    #[test]
    fn test_nested_inequality() {
        let a = Value::map([("elem", Value::text("int32"))]);
        let b = Value::map([("elem", Value::text("int64"))]);
        assert_ne!(a, b);
        assert_ne!(Value::text("map"), Value::map(Vec::<(String, Value)>::new()));
    }

    #[test]
    fn test_accessors() {
        let v = Value::map([("$type", Value::text("ListDef"))]);
        assert!(v.as_text().is_none());
        let m = v.as_map().expect("map");
        assert_eq!(m.get("$type").and_then(Value::as_text), Some("ListDef"));
        assert!(m.get("elem").is_none());
        assert_eq!(Value::from("bool").as_text(), Some("bool"));
    }

    #[test]
    fn test_parse_json_preserves_order() {
        let v = parse_json(r#"{"$type": "StructDef", "$name": "User", "email": "string", "age": "uint8"}"#)
            .expect("Failed to parse");
        let keys: Vec<_> = v.as_map().unwrap().keys().collect();
        assert_eq!(keys, vec!["$type", "$name", "email", "age"]);
    }

    #[test]
    fn test_parse_json_rejects_numbers() {
        let err = parse_json(r#"{"a": {"b": 1}}"#).unwrap_err();
        match err {
            ParseError::UnsupportedJson { kind, path } => {
                assert_eq!(kind, "number");
                assert_eq!(path, "/a/b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(matches!(parse_json("{"), Err(ParseError::Json(_))));
    }
}
