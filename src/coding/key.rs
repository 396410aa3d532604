//! Coding keys and coding paths.
//!
//! A coding key names one position inside a nested structure: an object
//! field by name or an array element by index. A coding path is the chain of
//! keys from the document root down to the value currently being decoded.
//! Paths exist purely for diagnostics; value lookup never goes through them.

use std::fmt;

/// One position inside a nested structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingKey {
    /// An object field, addressed by name.
    Name(String),
    /// An array element, addressed by position.
    Index(usize),
}

impl CodingKey {
    /// The field name, if this key addresses an object field.
    pub fn name(&self) -> Option<&str> {
        match self {
            CodingKey::Name(name) => Some(name),
            CodingKey::Index(_) => None,
        }
    }

    /// The element position, if this key addresses an array element.
    pub fn index(&self) -> Option<usize> {
        match self {
            CodingKey::Name(_) => None,
            CodingKey::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for CodingKey {
    /// Renders the `<key-description>` form used in error messages:
    /// quoted name or bare index.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodingKey::Name(name) => write!(f, "\"{name}\""),
            CodingKey::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for CodingKey {
    fn from(name: &str) -> Self {
        CodingKey::Name(name.to_string())
    }
}

impl From<String> for CodingKey {
    fn from(name: String) -> Self {
        CodingKey::Name(name)
    }
}

impl From<usize> for CodingKey {
    fn from(index: usize) -> Self {
        CodingKey::Index(index)
    }
}

/// Render a coding path in the compact `a[0].b` form.
///
/// The root path renders as the empty string.
pub fn path_description(path: &[CodingKey]) -> String {
    let mut out = String::new();
    for key in path {
        match key {
            CodingKey::Name(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            CodingKey::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}
