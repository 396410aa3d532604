//! Single-value decoding container over a bare scalar.

use super::decodable::Decodable;
use super::decoder::{UserInfo, ValueDecoder};
use super::key::CodingKey;
use crate::error::DecodingError;
use crate::parsing::JsonValue;

/// Decode-time view over the value at the current path.
#[derive(Debug, Clone)]
pub struct SingleValueDecodingContainer<'a> {
    value: &'a JsonValue,
    path: Vec<CodingKey>,
    user_info: &'a UserInfo,
}

impl<'a> SingleValueDecodingContainer<'a> {
    pub(crate) fn new(
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

    /// Coding path of this container.
    pub fn coding_path(&self) -> &[CodingKey] {
        &self.path
    }

    /// True iff the value is JSON `null`.
    pub fn decode_nil(&self) -> bool {
        self.value.is_null()
    }

    /// Decode the value as a `T`.
    pub fn decode<T: Decodable>(&self) -> Result<T, DecodingError> {
        T::decode(&ValueDecoder::with_path(
            self.value,
            self.path.clone(),
            self.user_info,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_scalar() {
        let user_info = UserInfo::new();
        let value = JsonValue::Number("-25".to_string());
        let decoder = ValueDecoder::new(&value, &user_info);
        let container = decoder.single_value_container();

        assert!(!container.decode_nil());
        assert_eq!(container.decode::<i8>(), Ok(-25));
        // Repeated access is idempotent.
        assert_eq!(container.decode::<i16>(), Ok(-25));
    }

    #[test]
    fn test_decode_nil() {
        let user_info = UserInfo::new();
        let value = JsonValue::Null;
        let decoder = ValueDecoder::new(&value, &user_info);
        assert!(decoder.single_value_container().decode_nil());
    }

    #[test]
    fn test_mismatch_keeps_the_current_path() {
        let user_info = UserInfo::new();
        let value = JsonValue::String("12".to_string());
        let decoder = ValueDecoder::new(&value, &user_info);
        let error = decoder
            .single_value_container()
            .decode::<u8>()
            .expect_err("string is not a number");
        assert_eq!(
            error.to_string(),
            "Expected to decode UInt8 but found string instead."
        );
        assert!(error.coding_path().is_empty());
    }
}
