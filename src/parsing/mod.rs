//! Byte-level JSON parsing.
//!
//! Turns a UTF-8 byte buffer into a [`JsonValue`] tree in a single pass.
//!
//! # Architecture
//!
//! The parsing subsystem is organized into focused modules:
//!
//! - [`value`] - The structural JSON value tree
//! - [`limits`] - Defensive parse limits
//! - `reader` - Single-pass byte cursor
//! - [`parser`] - Recursive descent grammar with offset-tagged errors
//!
//! # Example
//!
//! ```
//! use codable_json::parsing::parse;
//!
//! let value = parse(br#"{"id": 7, "name": "ada"}"#)?;
//! assert_eq!(value.get("id").and_then(|v| v.as_number()), Some("7"));
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("ada"));
//! # Ok::<(), codable_json::JsonError>(())
//! ```

pub mod limits;
pub mod parser;
mod reader;
pub mod value;

// Re-export commonly used items
pub use limits::Limits;
pub use parser::{parse, parse_with_limits, JsonParser};
pub use value::{JsonObject, JsonValue};
