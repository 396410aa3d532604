//! Typed decoding over a parsed value tree.
//!
//! A [`ValueDecoder`] wraps one node of the tree together with the coding
//! path that led to it; containers are lightweight views over that context
//! exposing typed decode operations. Application types opt in by
//! implementing [`Decodable`] with explicit container calls.
//!
//! # Architecture
//!
//! - [`key`] - Coding keys and path rendering
//! - [`decoder`] - Entry point and per-node decoding contexts
//! - [`decodable`] - The decode capability and built-in conformances
//! - [`keyed`] / [`unkeyed`] / [`single`] - The three container shapes
//! - `num` - Lexeme-to-number conversion rules
//!
//! # Example
//!
//! ```
//! use codable_json::{Decodable, DecodingError, JsonDecoder, ValueDecoder};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Decodable for Point {
//!     fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
//!         let container = decoder.keyed_container()?;
//!         Ok(Point {
//!             x: container.decode("x")?,
//!             y: container.decode("y")?,
//!         })
//!     }
//! }
//!
//! let point: Point = JsonDecoder::new().decode(br#"{"x": 3, "y": -4}"#)?;
//! assert_eq!((point.x, point.y), (3, -4));
//! # Ok::<(), codable_json::DecodingError>(())
//! ```

pub mod decodable;
pub mod decoder;
pub mod key;
pub mod keyed;
mod num;
pub mod single;
pub mod unkeyed;

// Re-export commonly used items
pub use decodable::Decodable;
pub use decoder::{JsonDecoder, UserInfo, ValueDecoder};
pub use key::{path_description, CodingKey};
pub use keyed::KeyedDecodingContainer;
pub use single::SingleValueDecodingContainer;
pub use unkeyed::UnkeyedDecodingContainer;
