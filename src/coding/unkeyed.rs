//! Unkeyed decoding container over a JSON array.

use super::decodable::Decodable;
use super::decoder::{UserInfo, ValueDecoder};
use super::key::CodingKey;
use super::keyed::KeyedDecodingContainer;
use crate::error::DecodingError;
use crate::parsing::JsonValue;

/// Decode-time view over an array value.
///
/// Progress through the array is an explicit position counter owned by this
/// container instance. Decode operations advance the counter only on
/// success, so a failed element can be retried or skipped deliberately by
/// the caller without corrupting the position.
#[derive(Debug, Clone)]
pub struct UnkeyedDecodingContainer<'a> {
    array: &'a [JsonValue],
    path: Vec<CodingKey>,
    user_info: &'a UserInfo,
    index: usize,
}

impl<'a> UnkeyedDecodingContainer<'a> {
    pub(crate) fn new(
        array: &'a [JsonValue],
        path: Vec<CodingKey>,
        user_info: &'a UserInfo,
    ) -> Self {
        Self {
            array,
            path,
            user_info,
            index: 0,
        }
    }

    /// Coding path of this container.
    pub fn coding_path(&self) -> &[CodingKey] {
        &self.path
    }

    /// Number of elements in the underlying array.
    pub fn count(&self) -> usize {
        self.array.len()
    }

    /// Position of the next element to decode.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// True once every element has been decoded.
    pub fn is_at_end(&self) -> bool {
        self.index >= self.array.len()
    }

    /// True iff the current element is JSON `null`, advancing past it.
    ///
    /// A non-null element returns `false` without advancing, so the caller
    /// can decode it as its real type next.
    pub fn decode_nil(&mut self) -> Result<bool, DecodingError> {
        if self.require()?.is_null() {
            self.index += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Decode the current element as a `T` and advance.
    pub fn decode<T: Decodable>(&mut self) -> Result<T, DecodingError> {
        let value = self.require()?;
        let decoded = T::decode(&self.child(value))?;
        self.index += 1;
        Ok(decoded)
    }

    /// Decode the current element as a `T`, mapping JSON `null` to `None`,
    /// and advance.
    pub fn decode_if_present<T: Decodable>(&mut self) -> Result<Option<T>, DecodingError> {
        let value = self.require()?;
        if value.is_null() {
            self.index += 1;
            return Ok(None);
        }
        let decoded = T::decode(&self.child(value))?;
        self.index += 1;
        Ok(Some(decoded))
    }

    /// A keyed container over the object at the current position, advancing
    /// past it.
    pub fn nested_keyed_container(
        &mut self,
    ) -> Result<KeyedDecodingContainer<'a>, DecodingError> {
        match self.require()? {
            JsonValue::Object(object) => {
                let container =
                    KeyedDecodingContainer::new(object, self.child_path(), self.user_info);
                self.index += 1;
                Ok(container)
            }
            other => Err(DecodingError::type_mismatch(
                "a keyed container",
                other,
                self.child_path(),
            )),
        }
    }

    /// An unkeyed container over the array at the current position,
    /// advancing past it.
    pub fn nested_unkeyed_container(
        &mut self,
    ) -> Result<UnkeyedDecodingContainer<'a>, DecodingError> {
        match self.require()? {
            JsonValue::Array(array) => {
                let container =
                    UnkeyedDecodingContainer::new(array, self.child_path(), self.user_info);
                self.index += 1;
                Ok(container)
            }
            other => Err(DecodingError::type_mismatch(
                "an unkeyed container",
                other,
                self.child_path(),
            )),
        }
    }

    fn require(&self) -> Result<&'a JsonValue, DecodingError> {
        self.array
            .get(self.index)
            .ok_or_else(|| DecodingError::unkeyed_container_at_end(self.child_path()))
    }

    fn child_path(&self) -> Vec<CodingKey> {
        let mut path = self.path.clone();
        path.push(CodingKey::Index(self.index));
        path
    }

    fn child(&self, value: &'a JsonValue) -> ValueDecoder<'a> {
        ValueDecoder::with_path(value, self.child_path(), self.user_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_decode() {
        let user_info = UserInfo::new();
        let value = JsonValue::Array(vec![
            JsonValue::Number("1".to_string()),
            JsonValue::Number("2".to_string()),
        ]);
        let decoder = ValueDecoder::new(&value, &user_info);
        let mut container = decoder.unkeyed_container().expect("array");

        assert_eq!(container.count(), 2);
        assert!(!container.is_at_end());
        assert_eq!(container.decode::<u8>(), Ok(1));
        assert_eq!(container.decode::<u8>(), Ok(2));
        assert!(container.is_at_end());

        let error = container.decode::<u8>().expect_err("at end");
        assert_eq!(error.to_string(), "Unkeyed container is at end.");
        assert_eq!(error.coding_path(), &[CodingKey::Index(2)]);
    }

    #[test]
    fn test_decode_nil_advances_only_past_null() {
        let user_info = UserInfo::new();
        let value = JsonValue::Array(vec![JsonValue::Null, JsonValue::Bool(true)]);
        let decoder = ValueDecoder::new(&value, &user_info);
        let mut container = decoder.unkeyed_container().expect("array");

        assert_eq!(container.decode_nil(), Ok(true));
        assert_eq!(container.current_index(), 1);
        assert_eq!(container.decode_nil(), Ok(false));
        assert_eq!(container.current_index(), 1);
        assert_eq!(container.decode::<bool>(), Ok(true));
        assert!(container.is_at_end());
    }

    #[test]
    fn test_failed_decode_does_not_advance() {
        let user_info = UserInfo::new();
        let value = JsonValue::Array(vec![JsonValue::Number("312".to_string())]);
        let decoder = ValueDecoder::new(&value, &user_info);
        let mut container = decoder.unkeyed_container().expect("array");

        assert!(container.decode::<u8>().is_err());
        assert_eq!(container.current_index(), 0);
        assert_eq!(container.decode::<u16>(), Ok(312));
    }

    #[test]
    fn test_element_errors_carry_the_index() {
        let user_info = UserInfo::new();
        let value = JsonValue::Array(vec![
            JsonValue::Number("1".to_string()),
            JsonValue::Bool(false),
        ]);
        let decoder = ValueDecoder::new(&value, &user_info);
        let mut container = decoder.unkeyed_container().expect("array");

        assert_eq!(container.decode::<u8>(), Ok(1));
        let error = container.decode::<u8>().expect_err("bool is not a number");
        assert_eq!(
            error.to_string(),
            "Expected to decode UInt8 but found bool instead."
        );
        assert_eq!(error.coding_path(), &[CodingKey::Index(1)]);
    }
}
