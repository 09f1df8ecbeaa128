//! Tag and length field types for BER-TLV headers
//!
//! All offsets are counted in hex characters: the decoder works directly on
//! the hexadecimal input string, so 2 characters correspond to 1 encoded
//! byte.

use bertlv_core::{TlvError, TlvResult};

/// A decoded BER-TLV tag
///
/// # Encoding Format
///
/// The first tag byte carries the constructed/primitive flag and the start
/// of the tag number:
///
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T
/// ```
///
/// When the low five bits are all set (`0x1F`), the tag continues into a
/// second byte. Tags wider than 2 bytes are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    text: String,
    first_byte: u8,
}

impl Tag {
    /// Decode a tag from the front of a hex buffer
    ///
    /// # Returns
    /// Returns `Ok((tag, hex_chars_consumed))` if successful.
    ///
    /// # Error Handling
    /// Returns `MalformedHeader` when the buffer is too short for the tag
    /// and `InvalidTag` when the tag characters are not hex digits.
    pub fn read(hex: &str) -> TlvResult<(Self, usize)> {
        let first = hex.get(0..2).ok_or_else(|| {
            TlvError::MalformedHeader(format!(
                "need 2 hex characters for a tag, have {}",
                hex.len()
            ))
        })?;
        let first_byte = u8::from_str_radix(first, 16)
            .map_err(|_| TlvError::InvalidTag(format!("not hex digits: {first}")))?;

        // Low five bits all set means the tag continues into a second byte
        let width = if first_byte & 0x1F == 0x1F { 4 } else { 2 };
        let text = hex.get(0..width).ok_or_else(|| {
            TlvError::MalformedHeader(format!(
                "need {width} hex characters for a two-byte tag, have {}",
                hex.len()
            ))
        })?;

        Ok((
            Self {
                text: text.to_ascii_uppercase(),
                first_byte,
            },
            width,
        ))
    }

    /// Tag as uppercase hex (2 or 4 characters)
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the tag, yielding its uppercase hex text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Check whether bit 0x20 of the first tag byte is set
    pub fn is_constructed(&self) -> bool {
        self.first_byte & 0x20 == 0x20
    }
}

/// A decoded BER length field
///
/// # Encoding Format
///
/// Short form, for content lengths 0-127:
///
/// ```text
/// Byte: 0 L L L L L L L
/// ```
///
/// Long form, first byte gives the count of length bytes that follow,
/// which encode the content length big-endian:
///
/// ```text
/// First byte:      1 N N N N N N N
/// Following bytes: L L L L L L L L ...
/// ```
///
/// The indefinite form (first byte `0x80`) is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: big-endian length from the follow-up bytes
    Long(usize),
}

impl Length {
    /// Decode a length field from the front of a hex buffer
    ///
    /// # Returns
    /// Returns `Ok((length, hex_chars_consumed))` if successful.
    ///
    /// # Error Handling
    /// Returns `MalformedHeader` when the buffer is too short for the
    /// field and `InvalidLength` for the indefinite form, non-hex digits,
    /// or a value that overflows `usize`.
    pub fn read(hex: &str) -> TlvResult<(Self, usize)> {
        let first = hex.get(0..2).ok_or_else(|| {
            TlvError::MalformedHeader(format!(
                "need 2 hex characters for a length field, have {}",
                hex.len()
            ))
        })?;
        let first_byte = u8::from_str_radix(first, 16)
            .map_err(|_| TlvError::InvalidLength(format!("not hex digits: {first}")))?;

        if first_byte < 0x80 {
            return Ok((Length::Short(first_byte), 2));
        }

        let more = (first_byte - 0x80) as usize;
        if more == 0 {
            return Err(TlvError::InvalidLength(
                "indefinite length encoding not supported".to_string(),
            ));
        }

        let digits = hex.get(2..2 + more * 2).ok_or_else(|| {
            TlvError::MalformedHeader(format!(
                "long form length declares {more} bytes, buffer has {} hex characters left",
                hex.len().saturating_sub(2)
            ))
        })?;
        let value = usize::from_str_radix(digits, 16)
            .map_err(|_| TlvError::InvalidLength(format!("bad length digits: {digits}")))?;

        Ok((Length::Long(value), 2 + more * 2))
    }

    /// Declared content length in bytes
    pub fn value(&self) -> usize {
        match self {
            Length::Short(length) => *length as usize,
            Length::Long(length) => *length,
        }
    }
}

/// A complete tag-plus-length header
///
/// `header_len` is the offset, in hex characters, at which the value
/// region starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvHeader {
    pub tag: Tag,
    pub length: Length,
    pub header_len: usize,
}

impl TlvHeader {
    /// Decode the tag and length field at the front of a hex buffer
    ///
    /// Purely computed from the input slice, no side effects.
    pub fn read(hex: &str) -> TlvResult<Self> {
        let (tag, tag_len) = Tag::read(hex)?;
        // The tag characters parsed as hex, so tag_len is a char boundary
        let (length, length_len) = Length::read(&hex[tag_len..])?;

        Ok(Self {
            tag,
            length,
            header_len: tag_len + length_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_one_byte() {
        let (tag, consumed) = Tag::read("0201FF").unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(tag.as_str(), "02");
        assert!(!tag.is_constructed());
    }

    #[test]
    fn test_tag_constructed_bit() {
        let (tag, _) = Tag::read("E000").unwrap();
        assert!(tag.is_constructed());
        assert_eq!(tag.as_str(), "E0");
    }

    #[test]
    fn test_tag_two_bytes() {
        let (tag, consumed) = Tag::read("5F2A0201FF").unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(tag.as_str(), "5F2A");
        assert!(!tag.is_constructed());
    }

    #[test]
    fn test_tag_uppercased() {
        let (tag, _) = Tag::read("9f27").unwrap();
        assert_eq!(tag.as_str(), "9F27");
    }

    #[test]
    fn test_tag_truncated() {
        assert!(matches!(
            Tag::read("5F"),
            Err(TlvError::MalformedHeader(_))
        ));
        assert!(matches!(Tag::read("0"), Err(TlvError::MalformedHeader(_))));
        assert!(matches!(Tag::read(""), Err(TlvError::MalformedHeader(_))));
    }

    #[test]
    fn test_tag_not_hex() {
        assert!(matches!(Tag::read("ZZ01"), Err(TlvError::InvalidTag(_))));
    }

    #[test]
    fn test_length_short_form() {
        let (length, consumed) = Length::read("7F").unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(length, Length::Short(0x7F));
        assert_eq!(length.value(), 127);
    }

    #[test]
    fn test_length_long_form_one_byte() {
        let (length, consumed) = Length::read("8105").unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(length, Length::Long(5));
    }

    #[test]
    fn test_length_long_form_two_bytes() {
        let (length, consumed) = Length::read("820105").unwrap();
        assert_eq!(consumed, 6);
        assert_eq!(length.value(), 261);
    }

    #[test]
    fn test_length_indefinite_rejected() {
        assert!(matches!(
            Length::read("80"),
            Err(TlvError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_length_truncated_long_form() {
        assert!(matches!(
            Length::read("8201"),
            Err(TlvError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_length_not_hex() {
        assert!(matches!(
            Length::read("81ZZ"),
            Err(TlvError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_length_overflow() {
        // 16 length bytes cannot fit in usize
        let field = format!("90{}", "FF".repeat(16));
        assert!(matches!(
            Length::read(&field),
            Err(TlvError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_header_read() {
        let header = TlvHeader::read("5F2A0201FF").unwrap();
        assert_eq!(header.tag.as_str(), "5F2A");
        assert_eq!(header.length.value(), 2);
        assert_eq!(header.header_len, 6);

        let header = TlvHeader::read("0201FF").unwrap();
        assert_eq!(header.header_len, 4);
        assert_eq!(header.length.value(), 1);
    }

    #[test]
    fn test_header_long_form_offset() {
        let header = TlvHeader::read("E38200AA").unwrap();
        assert_eq!(header.tag.as_str(), "E3");
        assert_eq!(header.length.value(), 0xAA);
        assert_eq!(header.header_len, 8);
    }
}
