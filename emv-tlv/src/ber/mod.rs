//! BER-TLV decoder and encoder for EMV data objects
//!
//! EMV card data (FCI templates, record contents, GENERATE AC responses) is
//! encoded with a subset of ASN.1 BER. Each data object is a TLV
//! (Tag-Length-Value) triplet:
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
//! Where:
//! - CC = Class (00=Universal, 01=Application, 10=Context, 11=Private)
//! - P = Primitive (0) or Constructed (1)
//! - TTTTT = Tag number (0-30), or 11111 when continuation bytes follow
//!
//! Continuation bytes carry 7 bits each; bit 8 is set on every byte except
//! the last. EMV tags are at most 4 bytes wide, so a tag is identified by
//! the big-endian value of all its bytes (`0x5F2D`, `0x9F02`, `0xBF0C`).
//!
//! ## Length Encoding
//!
//! - **Short form** (1 byte): lengths 0-127, bit 8 = 0
//! - **Long form**: first byte `0x80 | n`, followed by `n` big-endian bytes
//! - `0x80` (indefinite length) is rejected, `0xFF` is reserved
//!
//! ## Value Encoding
//!
//! - **Primitive** objects carry opaque bytes
//! - **Constructed** objects carry a sequence of nested TLVs, decoded
//!   recursively up to a configurable depth

pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod types;

pub use cursor::ByteCursor;
pub use decoder::{DecoderConfig, TlvDecoder, DEFAULT_MAX_DEPTH};
pub use encoder::TlvEncoder;
pub use types::{Length, Tag, TagClass};
