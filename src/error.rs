//! Error taxonomy for parsing and decoding.
//!
//! Two tiers, matching the two halves of the engine:
//!
//! - [`JsonError`] — lexical/grammar violations raised by the value parser,
//!   each tagged with the byte offset at which it was detected. Always fatal
//!   to the parse; no partial value is produced.
//! - [`DecodingError`] — raised by the decoding containers when the parsed
//!   tree does not satisfy the requested types. Carries the coding path to
//!   the offending value.
//!
//! Every decode-side message is produced from the literal templates in this
//! module and nowhere else. The wording follows the Swift `Codable` type
//! vocabulary (`UInt8`, `Float`, `Double`, ...) so diagnostics stay
//! string-identical with `JSONDecoder`-style tooling; tests assert exact
//! equality against these templates.

use thiserror::Error;

use crate::coding::key::{path_description, CodingKey};
use crate::parsing::value::JsonValue;

/// Result alias for parser-tier operations.
pub type ParseResult<T> = Result<T, JsonError>;

/// A lexical or grammar violation in the input document.
///
/// Offsets are byte positions into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// A byte that no grammar rule allows at this position.
    #[error("unexpected character (ascii: {ascii}) at index {index}")]
    UnexpectedCharacter {
        /// The offending byte.
        ascii: u8,
        /// Byte offset of the offending byte.
        index: usize,
    },

    /// Input ended where the grammar required more bytes.
    #[error("unexpected end of file")]
    UnexpectedEndOfFile,

    /// A number whose integer part starts with `0` followed by more digits.
    #[error("number with leading zero at index {index}")]
    NumberWithLeadingZero {
        /// Byte offset of the digit following the leading zero.
        index: usize,
    },

    /// A non-hex byte inside a `\u` escape.
    #[error("invalid hex digit (ascii: {ascii}) at index {index}")]
    InvalidHexDigit {
        /// The offending byte.
        ascii: u8,
        /// Byte offset of the offending byte.
        index: usize,
    },

    /// A raw control character (byte < 0x20) inside a string body.
    #[error("unescaped control character (ascii: {ascii}) in string at index {index}")]
    UnescapedControlCharacterInString {
        /// The offending byte.
        ascii: u8,
        /// Byte offset of the offending byte.
        index: usize,
    },

    /// A malformed UTF-8 sequence or an unpaired surrogate.
    #[error("invalid UTF-8 sequence at index {index}")]
    InvalidUtf8 {
        /// Byte offset where the sequence became invalid.
        index: usize,
    },

    /// A backslash followed by a byte that is not a recognized escape.
    #[error("unexpected escaped character (ascii: {ascii}) at index {index}")]
    UnexpectedEscapedCharacter {
        /// The offending byte.
        ascii: u8,
        /// Byte offset of the offending byte.
        index: usize,
    },

    /// A `\u` high surrogate not followed by an escaped low surrogate.
    #[error("expected low surrogate after high surrogate at index {index}")]
    ExpectedLowSurrogateAfterHighSurrogate {
        /// Byte offset where the low surrogate was expected.
        index: usize,
    },

    /// Array/object nesting deeper than the configured limit.
    #[error("too many nested arrays or dictionaries at index {index}")]
    TooManyNestedArraysOrDictionaries {
        /// Byte offset of the opening bracket/brace that exceeded the limit.
        index: usize,
    },
}

/// A failure to convert the parsed tree into the requested types.
///
/// The `Display` form of each variant is the exact debug description the
/// engine guarantees; the coding path is carried separately and rendered on
/// demand via [`DecodingError::path_description`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// A required object key was absent.
    #[error("No value associated with key {key}.")]
    KeyNotFound {
        /// The key that was requested.
        key: CodingKey,
        /// Coding path of the container the key was requested from.
        path: Vec<CodingKey>,
    },

    /// No value exists at the requested position.
    #[error("{description}")]
    ValueNotFound {
        /// Coding path of the missing position.
        path: Vec<CodingKey>,
        /// Literal debug description.
        description: String,
    },

    /// The value's JSON kind does not match the requested type.
    #[error("{description}")]
    TypeMismatch {
        /// Diagnostic name of the requested type or container shape.
        expected: &'static str,
        /// Coding path of the mismatched value.
        path: Vec<CodingKey>,
        /// Literal debug description.
        description: String,
    },

    /// The value's kind matched but its content could not be converted.
    #[error("{description}")]
    DataCorrupted {
        /// Coding path of the unconvertible value.
        path: Vec<CodingKey>,
        /// Literal debug description.
        description: String,
        /// The parser error, when the corruption is an invalid document.
        #[source]
        underlying: Option<JsonError>,
    },
}

impl DecodingError {
    /// Required key absent: "No value associated with key \<key\>."
    pub(crate) fn key_not_found(key: CodingKey, path: Vec<CodingKey>) -> Self {
        DecodingError::KeyNotFound { key, path }
    }

    /// Kind mismatch: "Expected to decode \<T\> but found \<kind\> instead."
    pub(crate) fn type_mismatch(
        expected: &'static str,
        found: &JsonValue,
        path: Vec<CodingKey>,
    ) -> Self {
        DecodingError::TypeMismatch {
            expected,
            path,
            description: format!(
                "Expected to decode {expected} but found {} instead.",
                found.type_description()
            ),
        }
    }

    /// Numeric conversion failure:
    /// "Parsed JSON number \<raw\> does not fit in \<T\>."
    pub(crate) fn number_does_not_fit(
        raw: &str,
        expected: &'static str,
        path: Vec<CodingKey>,
    ) -> Self {
        DecodingError::DataCorrupted {
            path,
            description: format!("Parsed JSON number <{raw}> does not fit in {expected}."),
            underlying: None,
        }
    }

    /// Unkeyed container exhausted: "Unkeyed container is at end."
    pub(crate) fn unkeyed_container_at_end(path: Vec<CodingKey>) -> Self {
        DecodingError::ValueNotFound {
            path,
            description: "Unkeyed container is at end.".to_string(),
        }
    }

    /// The input bytes failed to parse: "The given data was not valid JSON."
    pub(crate) fn invalid_document(underlying: JsonError) -> Self {
        DecodingError::DataCorrupted {
            path: Vec::new(),
            description: "The given data was not valid JSON.".to_string(),
            underlying: Some(underlying),
        }
    }

    /// The coding path from the document root to the offending value.
    pub fn coding_path(&self) -> &[CodingKey] {
        match self {
            DecodingError::KeyNotFound { path, .. }
            | DecodingError::ValueNotFound { path, .. }
            | DecodingError::TypeMismatch { path, .. }
            | DecodingError::DataCorrupted { path, .. } => path,
        }
    }

    /// The coding path rendered in the compact `a[0].b` form.
    pub fn path_description(&self) -> String {
        path_description(self.coding_path())
    }
}
