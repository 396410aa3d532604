//! codable-json - self-contained JSON parsing and typed decoding.
//!
//! This crate turns a raw byte buffer into a structural [`JsonValue`] tree
//! and then walks that tree, under the direction of the consumer's requested
//! types, producing strongly typed values or precise, location-tagged
//! errors. It depends on no platform JSON implementation and no
//! serialization framework: the recursive-descent parser and the decoding
//! containers are the whole engine.
//!
//! # Architecture
//!
//! The implementation is organized into two subsystems:
//!
//! - [`parsing`] - Byte cursor, recursive-descent grammar, value tree,
//!   defensive limits
//! - [`coding`] - Decoding contexts, keyed/unkeyed/single-value containers,
//!   the [`Decodable`] capability
//! - [`error`] - The two-tier error taxonomy shared by both
//!
//! # Diagnostics contract
//!
//! Decode errors carry a coding path (renderable as `a[0].b`) and a debug
//! description built from a fixed set of literal templates, using the Swift
//! `Codable` type vocabulary (`UInt8`, `Float`, `Double`, ...) so that
//! diagnostics stay string-identical with `JSONDecoder`-style tooling. Tests
//! assert exact equality against these templates; rewording them is a
//! breaking change.
//!
//! # Example
//!
//! ```
//! use codable_json::{Decodable, DecodingError, JsonDecoder, ValueDecoder};
//!
//! struct Server {
//!     host: String,
//!     port: u16,
//!     tags: Vec<String>,
//! }
//!
//! impl Decodable for Server {
//!     fn decode(decoder: &ValueDecoder<'_>) -> Result<Self, DecodingError> {
//!         let container = decoder.keyed_container()?;
//!         Ok(Server {
//!             host: container.decode("host")?,
//!             port: container.decode("port")?,
//!             tags: container.decode("tags")?,
//!         })
//!     }
//! }
//!
//! let bytes = br#"{"host": "local", "port": 8080, "tags": ["a", "b"]}"#;
//! let server: Server = JsonDecoder::new().decode(bytes)?;
//! assert_eq!(server.host, "local");
//! assert_eq!(server.port, 8080);
//! assert_eq!(server.tags, vec!["a".to_string(), "b".to_string()]);
//! # Ok::<(), codable_json::DecodingError>(())
//! ```

// Library code must avoid unwrap/expect/panic; every failure is a typed
// error. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod coding;
pub mod error;
pub mod parsing;

// Re-export commonly used types
pub use coding::{
    path_description, CodingKey, Decodable, JsonDecoder, KeyedDecodingContainer,
    SingleValueDecodingContainer, UnkeyedDecodingContainer, UserInfo, ValueDecoder,
};
pub use error::{DecodingError, JsonError, ParseResult};
pub use parsing::{parse, parse_with_limits, JsonObject, JsonParser, JsonValue, Limits};
