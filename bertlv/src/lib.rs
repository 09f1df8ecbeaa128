//! bertlv - BER-TLV decoder for hex-encoded smart-card records
//!
//! This library decodes BER-TLV encoded binary records, as found in ASN.1
//! BER structures and EMV smart-card responses, from a hexadecimal string
//! into a tree of tagged elements. Malformed input is tolerated and
//! recorded as diagnostics instead of aborting the decode.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `bertlv-core`: Core types, error handling, and the tree renderer
//! - `bertlv-decoder`: Tag/length reading and the tree-building decoder
//!
//! # Usage
//!
//! ```
//! let result = bertlv::parse("0201FF", false);
//! assert!(result.is_clean());
//! assert_eq!(result.elements[0].tag(), Some("02"));
//!
//! // Card responses carry a trailing status word; strip it first
//! let response = bertlv::parse("6F0B8407A0000000031010A5009000", true);
//! assert!(response.is_clean());
//! println!("{response}");
//! ```

// Re-export core types
pub use bertlv_core::{Element, ParseResult, TlvError, TlvResult, Value};
pub use bertlv_core::render::render;

// Re-export the decoder API
pub use bertlv_decoder::{Length, Tag, TlvDecoder, TlvHeader, parse, strip_status_word};
