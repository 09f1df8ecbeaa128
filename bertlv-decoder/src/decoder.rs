//! Tree-building decoder for hex-encoded BER-TLV records

use crate::header::TlvHeader;
use bertlv_core::{Element, ParseResult, TlvError, TlvResult};

/// Remove the trailing status word (2 bytes) from a response hex string
///
/// Smart-card responses append a 2-byte status word after the TLV payload.
/// Inputs shorter than the status word strip to an empty string.
pub fn strip_status_word(hex: &str) -> &str {
    hex.get(..hex.len().saturating_sub(4)).unwrap_or("")
}

/// Decode a hex string into a tree of TLV elements
///
/// The decode is total: malformed input is recorded in the result's
/// diagnostics and never aborts the call. Every input character ends up
/// either in a parsed element or, verbatim, in the sentinel element
/// appended when a level stops on an unparseable item.
///
/// With `strip` set the trailing 2-byte status word is removed from the
/// input before parsing. The flag applies to the top level only; nested
/// value regions are never stripped.
pub fn parse(hex: &str, strip: bool) -> ParseResult {
    let input = if strip { strip_status_word(hex) } else { hex };
    parse_level(input)
}

/// Decode one nesting level
///
/// An empty buffer is the base case of the recursion and yields an empty
/// result with no diagnostics.
fn parse_level(input: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut decoder = TlvDecoder::new(input);

    while decoder.has_remaining() {
        let orig = decoder.remaining();
        match decoder.decode_item() {
            Ok((element, warning)) => {
                // A parsed header spans at least one tag byte and one
                // length byte, so every iteration strictly advances.
                debug_assert!(decoder.remaining().len() + 4 <= orig.len());
                result.warnings.extend(warning);
                result.elements.push(element);
            }
            Err(e) => {
                log::warn!("stopping level after unparseable item: {e}");
                result
                    .errors
                    .push(format!("Failed to parse item <{orig}> ({e})"));
                result.elements.push(Element::unparsed(orig.to_string()));
                break;
            }
        }
    }

    result
}

/// Position-tracked decoder over a hex-character buffer
///
/// Offsets are counted in hex characters (2 characters = 1 byte). The
/// decoder advances over one tag-length-value item per step; [`parse`]
/// drives it and turns per-item failures into recorded diagnostics.
pub struct TlvDecoder<'a> {
    buffer: &'a str,
    position: usize,
}

impl<'a> TlvDecoder<'a> {
    /// Create a new decoder over a hex buffer
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current position in hex characters
    pub fn position(&self) -> usize {
        self.position
    }

    /// Unconsumed tail of the buffer
    pub fn remaining(&self) -> &'a str {
        &self.buffer[self.position..]
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Decode one tag-length-value item from the current position
    ///
    /// Returns the decoded element and, when the value region was shorter
    /// than its declared length, the warning describing the shortfall. A
    /// short value is kept as-is, never padded or truncated to match the
    /// declaration.
    ///
    /// Constructed elements are parsed recursively; diagnostics of the
    /// nested level stay inside the nested result.
    pub fn decode_item(&mut self) -> TlvResult<(Element, Option<String>)> {
        let remaining = self.remaining();
        let header = TlvHeader::read(remaining)?;
        log::debug!(
            "tag {} declares {} content bytes",
            header.tag.as_str(),
            header.length.value()
        );

        // Declared lengths come from untrusted input, so the arithmetic
        // saturates instead of overflowing.
        let declared_chars = header.length.value().saturating_mul(2);
        let end = header
            .header_len
            .saturating_add(declared_chars)
            .min(remaining.len());
        let value = remaining.get(header.header_len..end).ok_or_else(|| {
            TlvError::ValueSlice(format!(
                "value region [{}, {end}) does not fall on character boundaries",
                header.header_len
            ))
        })?;

        let mut warning = None;
        if value.len() < declared_chars {
            log::warn!(
                "short value for tag {}: expected {} bytes, got {}",
                header.tag.as_str(),
                header.length.value(),
                value.len() / 2
            );
            warning = Some(format!(
                "Short value for tag {}: expected {} bytes, got {}",
                header.tag.as_str(),
                header.length.value(),
                value.len() / 2
            ));
        }

        let element = if header.tag.is_constructed() {
            Element::group(header.tag.into_string(), parse_level(value))
        } else {
            Element::primitive(header.tag.into_string(), value.to_string())
        };

        self.position += end;
        Ok((element, warning))
    }
}
