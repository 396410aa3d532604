//! Keyed decoding container over a JSON object.

use super::decodable::Decodable;
use super::decoder::{UserInfo, ValueDecoder};
use super::key::CodingKey;
use super::unkeyed::UnkeyedDecodingContainer;
use crate::error::DecodingError;
use crate::parsing::{JsonObject, JsonValue};

/// Decode-time view over an object value.
///
/// The container is a read-only view: decoding a key never consumes it, so
/// repeated and partial access are safe, and a failed decode of one key
/// leaves the container usable for every other key.
#[derive(Debug, Clone)]
pub struct KeyedDecodingContainer<'a> {
    object: &'a JsonObject,
    path: Vec<CodingKey>,
    user_info: &'a UserInfo,
}

impl<'a> KeyedDecodingContainer<'a> {
    pub(crate) fn new(
        object: &'a JsonObject,
        path: Vec<CodingKey>,
        user_info: &'a UserInfo,
    ) -> Self {
        Self {
            object,
            path,
            user_info,
        }
    }

    /// Coding path of this container.
    pub fn coding_path(&self) -> &[CodingKey] {
        &self.path
    }

    /// Number of entries in the underlying object.
    pub fn len(&self) -> usize {
        self.object.len()
    }

    /// True if the underlying object has no entries.
    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    /// Every present key the caller's key table recognizes.
    ///
    /// `recognize` maps an object key name to the caller's key value, or
    /// `None` for names the caller does not model; unrecognized keys are
    /// filtered out. Order is the insertion order of the parsed object.
    pub fn all_keys<F>(&self, mut recognize: F) -> Vec<CodingKey>
    where
        F: FnMut(&str) -> Option<CodingKey>,
    {
        self.object
            .keys()
            .filter_map(|name| recognize(name))
            .collect()
    }

    /// True iff the underlying object has an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    /// True iff `key` is present and holds JSON `null`.
    ///
    /// An absent key is a `KeyNotFound` error; any present non-null value
    /// returns `false`. The value is not consumed.
    pub fn decode_nil(&self, key: &str) -> Result<bool, DecodingError> {
        Ok(self.require(key)?.is_null())
    }

    /// Decode the value for `key` as a `T`.
    pub fn decode<T: Decodable>(&self, key: &str) -> Result<T, DecodingError> {
        let value = self.require(key)?;
        T::decode(&self.child(key, value))
    }

    /// Decode the value for `key` as a `T`, treating an absent key or a
    /// JSON `null` as `None`.
    pub fn decode_if_present<T: Decodable>(&self, key: &str) -> Result<Option<T>, DecodingError> {
        match self.object.get(key) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(value) => T::decode(&self.child(key, value)).map(Some),
        }
    }

    /// A keyed container over the object stored at `key`.
    pub fn nested_keyed_container(
        &self,
        key: &str,
    ) -> Result<KeyedDecodingContainer<'a>, DecodingError> {
        match self.require(key)? {
            JsonValue::Object(object) => Ok(KeyedDecodingContainer::new(
                object,
                self.child_path(key),
                self.user_info,
            )),
            other => Err(DecodingError::type_mismatch(
                "a keyed container",
                other,
                self.child_path(key),
            )),
        }
    }

    /// An unkeyed container over the array stored at `key`.
    pub fn nested_unkeyed_container(
        &self,
        key: &str,
    ) -> Result<UnkeyedDecodingContainer<'a>, DecodingError> {
        match self.require(key)? {
            JsonValue::Array(array) => Ok(UnkeyedDecodingContainer::new(
                array,
                self.child_path(key),
                self.user_info,
            )),
            other => Err(DecodingError::type_mismatch(
                "an unkeyed container",
                other,
                self.child_path(key),
            )),
        }
    }

    fn require(&self, key: &str) -> Result<&'a JsonValue, DecodingError> {
        self.object
            .get(key)
            .ok_or_else(|| DecodingError::key_not_found(CodingKey::from(key), self.path.clone()))
    }

    fn child_path(&self, key: &str) -> Vec<CodingKey> {
        let mut path = self.path.clone();
        path.push(CodingKey::from(key));
        path
    }

    fn child(&self, key: &str, value: &'a JsonValue) -> ValueDecoder<'a> {
        ValueDecoder::with_path(value, self.child_path(key), self.user_info)
    }
}
