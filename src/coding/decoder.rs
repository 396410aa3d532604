//! Decoding contexts and the top-level decoder.
//!
//! [`JsonDecoder`] is the external entry point: it parses the input bytes
//! into a value tree and hands the root to the caller's [`Decodable`]
//! implementation. [`ValueDecoder`] is the per-node decoding context the
//! containers are views over: one borrowed value, the coding path that led
//! to it, and the caller's user-info map. Contexts are immutable; walking
//! into a child value creates a new context with one key appended.

use std::collections::BTreeMap;

use super::decodable::Decodable;
use super::key::CodingKey;
use super::keyed::KeyedDecodingContainer;
use super::num::{integer_from_lexeme, JsonFloat, JsonInteger};
use super::single::SingleValueDecodingContainer;
use super::unkeyed::UnkeyedDecodingContainer;
use crate::error::DecodingError;
use crate::parsing::{parse_with_limits, JsonValue, Limits};

/// Caller-supplied metadata reachable from every decoding context.
pub type UserInfo = BTreeMap<String, JsonValue>;

/// Top-level decoder: bytes in, typed value out.
///
/// ```
/// use codable_json::JsonDecoder;
///
/// let decoder = JsonDecoder::new();
/// let value: u8 = decoder.decode(b"25")?;
/// assert_eq!(value, 25);
/// # Ok::<(), codable_json::DecodingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// Metadata exposed to every decoding context.
    pub user_info: UserInfo,
    /// Parse limits applied to the input document.
    pub limits: Limits,
}

impl JsonDecoder {
    /// A decoder with empty user info and default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `bytes` and decode the resulting document as a `T`.
    ///
    /// An input that is not valid JSON surfaces as
    /// [`DecodingError::DataCorrupted`] with the parser error attached as
    /// its source.
    pub fn decode<T: Decodable>(&self, bytes: &[u8]) -> Result<T, DecodingError> {
        let value =
            parse_with_limits(bytes, self.limits).map_err(DecodingError::invalid_document)?;
        let decoder = ValueDecoder::new(&value, &self.user_info);
        T::decode(&decoder)
    }
}

/// Immutable decoding context over one node of the value tree.
#[derive(Debug, Clone)]
pub struct ValueDecoder<'a> {
    value: &'a JsonValue,
    path: Vec<CodingKey>,
    user_info: &'a UserInfo,
}

impl<'a> ValueDecoder<'a> {
    /// A root context with an empty coding path.
    pub fn new(value: &'a JsonValue, user_info: &'a UserInfo) -> Self {
        Self {
            value,
            path: Vec::new(),
            user_info,
        }
    }

    /// A context at an explicit coding path.
    pub(crate) fn with_path(
        value: &'a JsonValue,
        path: Vec<CodingKey>,
        user_info: &'a UserInfo,
    ) -> Self {
        Self {
            value,
            path,
            user_info,
        }
    }

    /// The value this context decodes from.
    pub fn value(&self) -> &'a JsonValue {
        self.value
    }

    /// The coding path from the document root to this context.
    pub fn coding_path(&self) -> &[CodingKey] {
        &self.path
    }

    /// The caller-supplied metadata map.
    pub fn user_info(&self) -> &UserInfo {
        self.user_info
    }

    /// A keyed container over the current value.
    ///
    /// Fails with a type mismatch unless the value is an object.
    pub fn keyed_container(&self) -> Result<KeyedDecodingContainer<'a>, DecodingError> {
        match self.value {
            JsonValue::Object(object) => Ok(KeyedDecodingContainer::new(
                object,
                self.path.clone(),
                self.user_info,
            )),
            other => Err(DecodingError::type_mismatch(
                "a keyed container",
                other,
                self.path.clone(),
            )),
        }
    }

    /// An unkeyed container over the current value.
    ///
    /// Fails with a type mismatch unless the value is an array.
    pub fn unkeyed_container(&self) -> Result<UnkeyedDecodingContainer<'a>, DecodingError> {
        match self.value {
            JsonValue::Array(array) => Ok(UnkeyedDecodingContainer::new(
                array,
                self.path.clone(),
                self.user_info,
            )),
            other => Err(DecodingError::type_mismatch(
                "an unkeyed container",
                other,
                self.path.clone(),
            )),
        }
    }

    /// A single-value container over the current value.
    pub fn single_value_container(&self) -> SingleValueDecodingContainer<'a> {
        SingleValueDecodingContainer::new(self.value, self.path.clone(), self.user_info)
    }

    /// Decode the current value as a `T`.
    pub fn decode<T: Decodable>(&self) -> Result<T, DecodingError> {
        T::decode(self)
    }

    /// A child context for `value` reached through `key`.
    pub(crate) fn child(&self, key: CodingKey, value: &'a JsonValue) -> ValueDecoder<'a> {
        let mut path = self.path.clone();
        path.push(key);
        ValueDecoder {
            value,
            path,
            user_info: self.user_info,
        }
    }
}

/// Decode a value that must be exactly a JSON bool.
pub(crate) fn decode_bool_value(
    value: &JsonValue,
    path: Vec<CodingKey>,
) -> Result<bool, DecodingError> {
    match value {
        JsonValue::Bool(flag) => Ok(*flag),
        other => Err(DecodingError::type_mismatch("Bool", other, path)),
    }
}

/// Decode a value that must be exactly a JSON string.
pub(crate) fn decode_string_value(
    value: &JsonValue,
    path: Vec<CodingKey>,
) -> Result<String, DecodingError> {
    match value {
        JsonValue::String(string) => Ok(string.clone()),
        other => Err(DecodingError::type_mismatch("String", other, path)),
    }
}

/// Decode a number lexeme as an exact integer of the target width.
pub(crate) fn decode_integer_value<T: JsonInteger>(
    value: &JsonValue,
    path: Vec<CodingKey>,
) -> Result<T, DecodingError> {
    match value {
        JsonValue::Number(raw) => integer_from_lexeme::<T>(raw)
            .ok_or_else(|| DecodingError::number_does_not_fit(raw, T::TYPE_NAME, path)),
        other => Err(DecodingError::type_mismatch(T::TYPE_NAME, other, path)),
    }
}

/// Decode a number lexeme as the nearest value of the target precision.
pub(crate) fn decode_float_value<T: JsonFloat>(
    value: &JsonValue,
    path: Vec<CodingKey>,
) -> Result<T, DecodingError> {
    match value {
        JsonValue::Number(raw) => T::from_lexeme(raw)
            .ok_or_else(|| DecodingError::number_does_not_fit(raw, T::TYPE_NAME, path)),
        other => Err(DecodingError::type_mismatch(T::TYPE_NAME, other, path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_primitives_from_bytes() {
        let decoder = JsonDecoder::new();
        assert_eq!(decoder.decode::<u8>(b"25"), Ok(25));
        assert_eq!(decoder.decode::<i64>(b"-25"), Ok(-25));
        assert_eq!(decoder.decode::<bool>(b"true"), Ok(true));
        assert_eq!(decoder.decode::<String>(br#""hi""#), Ok("hi".to_string()));
        assert_eq!(decoder.decode::<Option<u8>>(b"null"), Ok(None));
        assert_eq!(decoder.decode::<Vec<u8>>(b"[1, 2]"), Ok(vec![1, 2]));
    }

    #[test]
    fn test_decode_invalid_document() {
        let decoder = JsonDecoder::new();
        let error = decoder.decode::<bool>(b"tru").expect_err("invalid document");
        assert_eq!(error.to_string(), "The given data was not valid JSON.");
        assert!(matches!(
            error,
            DecodingError::DataCorrupted {
                underlying: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_container_requests_check_the_value_kind() {
        let user_info = UserInfo::new();
        let value = JsonValue::Number("12".to_string());
        let decoder = ValueDecoder::new(&value, &user_info);

        let keyed = decoder.keyed_container().expect_err("not an object");
        assert_eq!(
            keyed.to_string(),
            "Expected to decode a keyed container but found a number instead."
        );
        let unkeyed = decoder.unkeyed_container().expect_err("not an array");
        assert_eq!(
            unkeyed.to_string(),
            "Expected to decode an unkeyed container but found a number instead."
        );
    }

    #[test]
    fn test_child_context_extends_the_path() {
        let user_info = UserInfo::new();
        let value = JsonValue::Array(vec![JsonValue::Null]);
        let decoder = ValueDecoder::new(&value, &user_info);
        let child = decoder.child(CodingKey::from(0usize), &JsonValue::Null);
        assert_eq!(child.coding_path(), &[CodingKey::from(0usize)]);
        assert!(child.value().is_null());
        assert!(decoder.coding_path().is_empty());
    }
}
