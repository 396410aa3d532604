//! Recursive-descent JSON parser.
//!
//! Turns a byte buffer into a [`JsonValue`] tree in a single left-to-right
//! pass over a [`DocumentReader`]. The parser owns all grammar and lexical
//! validation: literals are matched byte-exact, numbers keep their raw
//! lexeme, strings are unescaped with surrogate-pair combination, and
//! multi-byte UTF-8 sequences are validated structurally. Every violation is
//! reported with the byte offset at which it was detected.

use super::limits::Limits;
use super::reader::DocumentReader;
use super::value::{JsonObject, JsonValue};
use crate::error::{JsonError, ParseResult};

/// Recursive-descent parser over a single document.
#[derive(Debug)]
pub struct JsonParser<'a> {
    pub(crate) reader: DocumentReader<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> JsonParser<'a> {
    /// Create a parser with default limits.
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_limits(input, Limits::default())
    }

    /// Create a parser with custom limits.
    pub fn with_limits(input: &'a [u8], limits: Limits) -> Self {
        Self {
            reader: DocumentReader::new(input),
            limits,
            depth: 0,
        }
    }

    /// Parse the input as one complete JSON document.
    ///
    /// Trailing bytes other than whitespace are rejected.
    pub fn parse(&mut self) -> ParseResult<JsonValue> {
        let value = self.parse_value()?;
        if let Some(ascii) = self.consume_whitespace() {
            return Err(JsonError::UnexpectedCharacter {
                ascii,
                index: self.reader.index(),
            });
        }
        Ok(value)
    }

    /// Parse a single value at the current position.
    fn parse_value(&mut self) -> ParseResult<JsonValue> {
        match self.consume_whitespace() {
            None => Err(JsonError::UnexpectedEndOfFile),
            Some(b'{') => {
                let (_, index) = self.read_some()?;
                self.parse_object(index)
            }
            Some(b'[') => {
                let (_, index) = self.read_some()?;
                self.parse_array(index)
            }
            Some(b'"') => {
                let _ = self.read_some()?;
                Ok(JsonValue::String(self.parse_string_body()?))
            }
            Some(b't' | b'f') => {
                let (first, _) = self.read_some()?;
                Ok(JsonValue::Bool(self.parse_bool(first)?))
            }
            Some(b'n') => {
                let _ = self.read_some()?;
                self.parse_null()?;
                Ok(JsonValue::Null)
            }
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => {
                let (ascii, index) = self.read_some()?;
                Err(JsonError::UnexpectedCharacter { ascii, index })
            }
        }
    }

    /// Parse a `true`/`false` literal whose first byte has been consumed.
    ///
    /// Stops exactly at the literal's last byte; following bytes stay
    /// unconsumed for the caller.
    pub(crate) fn parse_bool(&mut self, first: u8) -> ParseResult<bool> {
        match first {
            b't' => {
                self.expect_literal(b"rue")?;
                Ok(true)
            }
            b'f' => {
                self.expect_literal(b"alse")?;
                Ok(false)
            }
            _ => Err(JsonError::UnexpectedCharacter {
                ascii: first,
                index: self.reader.index().saturating_sub(1),
            }),
        }
    }

    /// Parse a `null` literal whose `n` has been consumed.
    pub(crate) fn parse_null(&mut self) -> ParseResult<()> {
        self.expect_literal(b"ull")
    }

    /// Match the remaining bytes of a literal exactly.
    ///
    /// The error is raised at the first mismatching byte, independent of how
    /// many leading bytes matched.
    fn expect_literal(&mut self, rest: &[u8]) -> ParseResult<()> {
        for &expected in rest {
            match self.reader.read() {
                Some((byte, _)) if byte == expected => {}
                Some((ascii, index)) => {
                    return Err(JsonError::UnexpectedCharacter { ascii, index })
                }
                None => return Err(JsonError::UnexpectedEndOfFile),
            }
        }
        Ok(())
    }

    /// Parse a number, keeping the matched substring verbatim.
    ///
    /// Grammar: `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`, terminated
    /// by whitespace, `,`, `]`, `}` or end of input.
    fn parse_number(&mut self) -> ParseResult<JsonValue> {
        let mut lexeme = String::new();

        if self.reader.peek() == Some(b'-') {
            let _ = self.reader.read();
            lexeme.push('-');
        }

        match self.reader.read() {
            None => return Err(JsonError::UnexpectedEndOfFile),
            Some((b'0', _)) => {
                lexeme.push('0');
                if let Some(b'0'..=b'9') = self.reader.peek() {
                    return Err(JsonError::NumberWithLeadingZero {
                        index: self.reader.index(),
                    });
                }
            }
            Some((byte @ b'1'..=b'9', _)) => {
                lexeme.push(byte as char);
                self.push_digits(&mut lexeme);
            }
            Some((ascii, index)) => return Err(JsonError::UnexpectedCharacter { ascii, index }),
        }

        if self.reader.peek() == Some(b'.') {
            let _ = self.reader.read();
            lexeme.push('.');
            self.push_required_digits(&mut lexeme)?;
        }

        if let Some(b'e' | b'E') = self.reader.peek() {
            let (marker, _) = self.read_some()?;
            lexeme.push(marker as char);
            if let Some(sign @ (b'+' | b'-')) = self.reader.peek() {
                let _ = self.reader.read();
                lexeme.push(sign as char);
            }
            self.push_required_digits(&mut lexeme)?;
        }

        match self.reader.peek() {
            None | Some(b' ' | b'\t' | b'\n' | b'\r' | b',' | b']' | b'}') => {
                Ok(JsonValue::Number(lexeme))
            }
            Some(ascii) => Err(JsonError::UnexpectedCharacter {
                ascii,
                index: self.reader.index(),
            }),
        }
    }

    /// Append zero or more digits to the lexeme.
    fn push_digits(&mut self, lexeme: &mut String) {
        while let Some(byte @ b'0'..=b'9') = self.reader.peek() {
            let _ = self.reader.read();
            lexeme.push(byte as char);
        }
    }

    /// Append one or more digits to the lexeme.
    fn push_required_digits(&mut self, lexeme: &mut String) -> ParseResult<()> {
        match self.reader.read() {
            Some((byte @ b'0'..=b'9', _)) => lexeme.push(byte as char),
            Some((ascii, index)) => return Err(JsonError::UnexpectedCharacter { ascii, index }),
            None => return Err(JsonError::UnexpectedEndOfFile),
        }
        self.push_digits(lexeme);
        Ok(())
    }

    /// Parse a string body whose opening quote has been consumed.
    pub(crate) fn parse_string_body(&mut self) -> ParseResult<String> {
        let mut result = String::new();
        loop {
            match self.reader.read() {
                None => return Err(JsonError::UnexpectedEndOfFile),
                Some((b'"', _)) => return Ok(result),
                Some((b'\\', _)) => self.parse_escape(&mut result)?,
                Some((ascii, index)) if ascii < 0x20 => {
                    return Err(JsonError::UnescapedControlCharacterInString { ascii, index })
                }
                Some((byte, _)) if byte < 0x80 => result.push(byte as char),
                Some((byte, index)) => result.push(self.parse_utf8_scalar(byte, index)?),
            }
        }
    }

    /// Resolve one escape sequence after a backslash.
    fn parse_escape(&mut self, result: &mut String) -> ParseResult<()> {
        match self.reader.read() {
            None => Err(JsonError::UnexpectedEndOfFile),
            Some((b'"', _)) => {
                result.push('"');
                Ok(())
            }
            Some((b'\\', _)) => {
                result.push('\\');
                Ok(())
            }
            Some((b'/', _)) => {
                result.push('/');
                Ok(())
            }
            Some((b'b', _)) => {
                result.push('\u{0008}');
                Ok(())
            }
            Some((b'f', _)) => {
                result.push('\u{000C}');
                Ok(())
            }
            Some((b'n', _)) => {
                result.push('\n');
                Ok(())
            }
            Some((b'r', _)) => {
                result.push('\r');
                Ok(())
            }
            Some((b't', _)) => {
                result.push('\t');
                Ok(())
            }
            Some((b'u', _)) => {
                result.push(self.parse_unicode_escape()?);
                Ok(())
            }
            Some((ascii, index)) => Err(JsonError::UnexpectedEscapedCharacter { ascii, index }),
        }
    }

    /// Resolve a `\uXXXX` escape, combining surrogate pairs.
    fn parse_unicode_escape(&mut self) -> ParseResult<char> {
        let first = self.read_hex4()?;

        if (0xD800..=0xDBFF).contains(&first) {
            // A high surrogate must be followed by an escaped low surrogate.
            let expected_at = self.reader.index();
            if !(self.next_is(b'\\') && self.next_is(b'u')) {
                return Err(JsonError::ExpectedLowSurrogateAfterHighSurrogate {
                    index: expected_at,
                });
            }
            let low = self.read_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(JsonError::ExpectedLowSurrogateAfterHighSurrogate {
                    index: expected_at,
                });
            }
            let combined =
                0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            return char::from_u32(combined).ok_or(JsonError::InvalidUtf8 { index: expected_at });
        }

        if (0xDC00..=0xDFFF).contains(&first) {
            return Err(JsonError::InvalidUtf8 {
                index: self.reader.index().saturating_sub(4),
            });
        }

        char::from_u32(u32::from(first)).ok_or(JsonError::InvalidUtf8 {
            index: self.reader.index(),
        })
    }

    /// Consume the next byte iff it equals `expected`.
    fn next_is(&mut self, expected: u8) -> bool {
        if self.reader.peek() == Some(expected) {
            let _ = self.reader.read();
            true
        } else {
            false
        }
    }

    /// Read 4 hex digits and return the value.
    fn read_hex4(&mut self) -> ParseResult<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let (byte, index) = self.reader.read().ok_or(JsonError::UnexpectedEndOfFile)?;
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(JsonError::InvalidHexDigit { ascii: byte, index }),
            };
            value = (value << 4) | u16::from(digit);
        }
        Ok(value)
    }

    /// Validate and decode a multi-byte UTF-8 sequence whose first byte has
    /// been consumed.
    ///
    /// Rejects stray continuation bytes, overlong forms, surrogate
    /// codepoints and anything above U+10FFFF.
    fn parse_utf8_scalar(&mut self, first: u8, index: usize) -> ParseResult<char> {
        let invalid = JsonError::InvalidUtf8 { index };
        let (length, mut codepoint) = match first {
            0xC2..=0xDF => (2, u32::from(first & 0x1F)),
            0xE0..=0xEF => (3, u32::from(first & 0x0F)),
            0xF0..=0xF4 => (4, u32::from(first & 0x07)),
            _ => return Err(invalid),
        };
        for position in 1..length {
            let byte = match self.reader.read() {
                Some((byte, _)) => byte,
                None => return Err(JsonError::UnexpectedEndOfFile),
            };
            let valid = match (position, first) {
                (1, 0xE0) => (0xA0..=0xBF).contains(&byte),
                (1, 0xED) => (0x80..=0x9F).contains(&byte),
                (1, 0xF0) => (0x90..=0xBF).contains(&byte),
                (1, 0xF4) => (0x80..=0x8F).contains(&byte),
                _ => (0x80..=0xBF).contains(&byte),
            };
            if !valid {
                return Err(invalid);
            }
            codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
        }
        char::from_u32(codepoint).ok_or(invalid)
    }

    /// Parse an object body whose `{` has been consumed.
    fn parse_object(&mut self, open_index: usize) -> ParseResult<JsonValue> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::TooManyNestedArraysOrDictionaries { index: open_index });
        }

        let mut object = JsonObject::new();

        if self.consume_whitespace() == Some(b'}') {
            let _ = self.reader.read();
            self.depth -= 1;
            return Ok(JsonValue::Object(object));
        }

        loop {
            let (byte, index) = self.consume_whitespace_then_read()?;
            if byte != b'"' {
                return Err(JsonError::UnexpectedCharacter { ascii: byte, index });
            }
            let key = self.parse_string_body()?;

            let (byte, index) = self.consume_whitespace_then_read()?;
            if byte != b':' {
                return Err(JsonError::UnexpectedCharacter { ascii: byte, index });
            }

            let value = self.parse_value()?;
            // Duplicate keys: the last value wins, the first occurrence
            // fixes the key's position in iteration order.
            object.insert(key, value);

            let (byte, index) = self.consume_whitespace_then_read()?;
            match byte {
                b',' => {}
                b'}' => break,
                _ => return Err(JsonError::UnexpectedCharacter { ascii: byte, index }),
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Object(object))
    }

    /// Parse an array body whose `[` has been consumed.
    fn parse_array(&mut self, open_index: usize) -> ParseResult<JsonValue> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::TooManyNestedArraysOrDictionaries { index: open_index });
        }

        let mut array = Vec::new();

        if self.consume_whitespace() == Some(b']') {
            let _ = self.reader.read();
            self.depth -= 1;
            return Ok(JsonValue::Array(array));
        }

        loop {
            array.push(self.parse_value()?);

            let (byte, index) = self.consume_whitespace_then_read()?;
            match byte {
                b',' => {}
                b']' => break,
                _ => return Err(JsonError::UnexpectedCharacter { ascii: byte, index }),
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Array(array))
    }

    /// Skip JSON-insignificant whitespace, returning the next byte without
    /// consuming it.
    fn consume_whitespace(&mut self) -> Option<u8> {
        while let Some(byte) = self.reader.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    let _ = self.reader.read();
                }
                _ => return Some(byte),
            }
        }
        None
    }

    /// Skip whitespace and consume the next byte, failing at end of input.
    fn consume_whitespace_then_read(&mut self) -> ParseResult<(u8, usize)> {
        let _ = self.consume_whitespace();
        self.reader.read().ok_or(JsonError::UnexpectedEndOfFile)
    }

    /// Consume the next byte that `parse_value` dispatch has already peeked.
    fn read_some(&mut self) -> ParseResult<(u8, usize)> {
        self.reader.read().ok_or(JsonError::UnexpectedEndOfFile)
    }
}

/// Parse a JSON document with default limits.
pub fn parse(input: &[u8]) -> ParseResult<JsonValue> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON document with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> ParseResult<JsonValue> {
    JsonParser::with_limits(input, limits).parse()
}
