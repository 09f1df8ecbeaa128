//! BER-TLV wire decoding for hex-encoded records
//!
//! This crate decodes BER-TLV (Tag-Length-Value) records, the encoding used
//! by ASN.1 BER and by EMV smart-card data, from a hexadecimal string into
//! a tree of elements.
//!
//! # BER-TLV Encoding Overview
//!
//! Each item is a TLV triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! ## Tag Encoding
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//!
//! Where P is the constructed flag (`0x20`): a constructed item's value is
//! itself a sequence of TLV items, a primitive item's value is opaque
//! bytes. When the five T bits are all set the tag continues into a second
//! byte; wider tags are out of scope here.
//!
//! ## Length Encoding
//!
//! Length can be encoded in two forms:
//! - **Short form** (1 byte): for lengths 0-127, bit 8 clear
//! - **Long form**: first byte has bit 8 set and counts the follow-up
//!   bytes, which encode the content length big-endian
//!
//! # Malformed Input
//!
//! The decoder records problems instead of aborting: values shorter than
//! their declared length become warnings, and an unparseable item stops
//! only its own nesting level, recording an error and keeping the
//! untouched buffer remainder as a sentinel element. See [`parse`].
//!
//! # TODO
//!
//! - [x] 标签解析（单字节、双字节）
//! - [x] 长度解析（短格式、长格式）
//! - [x] 构造类型递归解析
//! - [x] 截断与错误恢复
//! - [ ] 不定长编码支持
//! - [ ] 超过 2 字节的扩展标签

pub mod decoder;
pub mod header;

pub use decoder::{TlvDecoder, parse, strip_status_word};
pub use header::{Length, Tag, TlvHeader};
