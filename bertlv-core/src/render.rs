//! Indented diagnostic rendering of a decoded TLV tree

use crate::element::{ParseResult, Value};
use std::fmt;

/// Render one nesting level as indented text
///
/// Errors recorded at this level come first, one per line, followed by the
/// elements in stream order. A constructed element renders as a group
/// header line, with its nested level rendered at `indent + increment`. A
/// primitive element renders as one line carrying the tag, the raw hex
/// value, and a text column with the value interpreted as ASCII. The
/// sentinel element renders like a primitive with `??` in the tag column.
pub fn render(result: &ParseResult, indent: &str, increment: &str) -> String {
    let mut out = String::new();

    for error in &result.errors {
        out.push_str(indent);
        out.push_str(error);
        out.push('\n');
    }

    for element in &result.elements {
        let tag = element.tag().unwrap_or("??");
        match element.value() {
            Value::Group(nested) => {
                out.push_str(&format!("{indent}{tag}:\n"));
                let deeper = format!("{indent}{increment}");
                out.push_str(&render(nested, &deeper, increment));
            }
            Value::Bytes(hex) => {
                out.push_str(&format!("{indent}{tag}: {hex} - {}\n", to_ascii(hex)));
            }
        }
    }

    out
}

/// Text column for a hex payload, two columns per byte
///
/// Printable bytes render as the character followed by a space so the text
/// stays aligned with the hex pairs; everything else, including hex that
/// does not decode, renders as `..`.
fn to_ascii(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len());
    for pair in hex.as_bytes().chunks(2) {
        let byte = match pair {
            [_, _] => std::str::from_utf8(pair)
                .ok()
                .and_then(|digits| u8::from_str_radix(digits, 16).ok()),
            _ => None,
        };
        match byte {
            Some(b) if (0x20..=0x7E).contains(&b) => {
                out.push(b as char);
                out.push(' ');
            }
            _ => out.push_str(".."),
        }
    }
    out
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self, "", "    "))
    }
}
