//! The decode capability and the built-in conformances.
//!
//! Application types implement [`Decodable`] by hand, composing container
//! operations; the engine never derives type-specific logic. The impls here
//! cover the primitive leaves plus the standard compositions (`Option`,
//! `Vec`, string-keyed maps, raw [`JsonValue`] subtrees) that everything
//! else is built from.

use std::collections::BTreeMap;

use super::decoder::{
    decode_bool_value, decode_float_value, decode_integer_value, decode_string_value, ValueDecoder,
};
use super::key::CodingKey;
use crate::error::DecodingError;
use crate::parsing::JsonValue;

/// A type that can decode itself from a decoding context.
pub trait Decodable: Sized {
    /// Decode a value of this type from the given context.
    fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError>;
}

impl Decodable for bool {
    fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
        decode_bool_value(decoder.value(), decoder.coding_path().to_vec())
    }
}

impl Decodable for String {
    fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
        decode_string_value(decoder.value(), decoder.coding_path().to_vec())
    }
}

macro_rules! impl_decodable_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decodable for $ty {
                fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
                    decode_integer_value::<$ty>(decoder.value(), decoder.coding_path().to_vec())
                }
            }
        )*
    };
}

impl_decodable_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_decodable_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decodable for $ty {
                fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
                    decode_float_value::<$ty>(decoder.value(), decoder.coding_path().to_vec())
                }
            }
        )*
    };
}

impl_decodable_float!(f32, f64);

impl<T: Decodable> Decodable for Option<T> {
    /// JSON `null` decodes to `None`; anything else must decode as `T`.
    fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
        if decoder.value().is_null() {
            Ok(None)
        } else {
            T::decode(decoder).map(Some)
        }
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
        let mut container = decoder.unkeyed_container()?;
        let mut items = Vec::with_capacity(container.count());
        while !container.is_at_end() {
            items.push(container.decode()?);
        }
        Ok(items)
    }
}

impl<T: Decodable> Decodable for BTreeMap<String, T> {
    fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
        let container = decoder.keyed_container()?;
        let mut map = BTreeMap::new();
        for key in container.all_keys(|name| Some(CodingKey::from(name))) {
            let Some(name) = key.name() else { continue };
            map.insert(name.to_string(), container.decode(name)?);
        }
        Ok(map)
    }
}

impl Decodable for JsonValue {
    /// Decodes to a clone of the underlying subtree, never failing.
    fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
        Ok(decoder.value().clone())
    }
}
