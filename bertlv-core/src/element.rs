//! Decoded TLV tree types
//!
//! A decode produces a [`ParseResult`] holding the ordered top-level
//! elements together with the diagnostics recorded at that nesting level.
//! Constructed elements carry the parse of their value region, so every
//! nesting level owns its own elements, errors, and warnings.

use serde::{Deserialize, Serialize};

/// Payload of a decoded element
///
/// A primitive element carries its raw value bytes as a hex string. A
/// constructed element carries the decoded contents of its value region,
/// including that level's own diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Raw value bytes, hex encoded
    Bytes(String),
    /// Nested elements decoded from the value region
    Group(ParseResult),
}

/// One node of the decoded TLV tree
///
/// The tag is an uppercase hex string of 2 or 4 characters (1 or 2 encoded
/// bytes). The sentinel element appended when a level stops on an
/// unparseable item has no tag and holds the untouched buffer remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: Option<String>,
    constructed: bool,
    value: Value,
}

impl Element {
    /// Create a primitive element from its tag and raw hex value
    pub fn primitive(tag: String, value_hex: String) -> Self {
        Self {
            tag: Some(tag),
            constructed: false,
            value: Value::Bytes(value_hex),
        }
    }

    /// Create a constructed element from the parse of its value region
    pub fn group(tag: String, nested: ParseResult) -> Self {
        Self {
            tag: Some(tag),
            constructed: true,
            value: Value::Group(nested),
        }
    }

    /// Create the sentinel element holding an unparseable buffer remainder
    pub fn unparsed(rest: String) -> Self {
        Self {
            tag: None,
            constructed: false,
            value: Value::Bytes(rest),
        }
    }

    /// Tag as uppercase hex, `None` for the sentinel element
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether bit 0x20 of the first tag byte was set
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Payload of this element
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Raw hex payload for primitive and sentinel elements
    pub fn as_bytes(&self) -> Option<&str> {
        match &self.value {
            Value::Bytes(hex) => Some(hex),
            Value::Group(_) => None,
        }
    }

    /// Nested parse result for constructed elements
    pub fn as_group(&self) -> Option<&ParseResult> {
        match &self.value {
            Value::Bytes(_) => None,
            Value::Group(nested) => Some(nested),
        }
    }
}

/// Outcome of decoding one nesting level
///
/// Element order is stream order. Errors record per-item failures that
/// stopped the level; warnings record recoverable anomalies (values shorter
/// than their declared length). Diagnostics of nested levels live inside
/// the nested [`Value::Group`] and are never merged upward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub elements: Vec<Element>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ParseResult {
    /// Check whether this level holds no elements and no diagnostics
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Check whether no errors or warnings were recorded at any nesting level
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
            && self.warnings.is_empty()
            && self.elements.iter().all(|element| match element.value() {
                Value::Bytes(_) => true,
                Value::Group(nested) => nested.is_clean(),
            })
    }
}
