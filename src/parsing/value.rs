//! The structural JSON value tree.
//!
//! `JsonValue` is the tagged union produced by the parser and walked by the
//! decoding containers. Numbers keep their raw textual lexeme so that
//! integer/float conversion can apply target-type range and precision rules
//! lazily instead of committing to one binary representation at parse time.

use indexmap::IndexMap;

/// Ordered object representation.
///
/// Keys iterate in insertion order of the parsed document, which is what
/// `all_keys` on a keyed container reports.
pub type JsonObject = IndexMap<String, JsonValue>;

/// A parsed JSON value.
///
/// The tree is acyclic and exclusively owned: every child value has exactly
/// one parent container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JsonValue {
    /// JSON null literal.
    #[default]
    Null,
    /// JSON boolean (true/false).
    Bool(bool),
    /// JSON number as the exact raw lexeme from the document.
    Number(String),
    /// JSON string, fully unescaped and UTF-8 validated.
    String(String),
    /// JSON array of values.
    Array(Vec<JsonValue>),
    /// JSON object with insertion-ordered keys.
    Object(JsonObject),
}

impl JsonValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the raw number lexeme if this is a Number, None otherwise.
    pub fn as_number(&self) -> Option<&str> {
        match self {
            JsonValue::Number(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// The observed-kind wording used in decode diagnostics.
    ///
    /// These strings are part of the error-message contract and must not be
    /// reworded: "Expected to decode UInt8 but found a number instead."
    pub fn type_description(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "a number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "an array",
            JsonValue::Object(_) => "a dictionary",
        }
    }
}
