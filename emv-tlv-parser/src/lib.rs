//! EMV TLV Parser
//!
//! Decodes hex-encoded BER-TLV messages (EMV card and terminal data) into a
//! tree of tags and renders it as readable text.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `emv-core`: error taxonomy and hex input conversion
//! - `emv-tlv`: TLV decoder, tag dictionary and tree renderer
//! - `emv-tlv-parser`: this facade plus the `emv_tlv_parser` command line tool
//!
//! # Usage
//!
//! ```
//! use emv_tlv_parser::parse_tlv;
//!
//! let forest = parse_tlv("6F1A840E315041592E5359532E4444463031A5088801025F2D02656E").unwrap();
//! assert_eq!(forest.len(), 1);
//! assert_eq!(forest.find(0x5F2D).unwrap().value(), b"en");
//! print!("{}", forest);
//! ```

pub mod report;

pub use emv_core::{decode_hex, ErrorKind, TlvError, TlvResult};
pub use emv_tlv::{
    dictionary, DecoderConfig, Forest, Node, RenderConfig, Tag, TagClass, TagInfo, TlvDecoder,
    TlvEncoder, TreeRenderer, ValueFormat, DEFAULT_MAX_DEPTH,
};

/// Parse a hex-encoded TLV message with the default decoder configuration
pub fn parse_tlv(message: &str) -> TlvResult<Forest> {
    parse_tlv_with_config(message, &DecoderConfig::default())
}

/// Parse a hex-encoded TLV message
///
/// # Errors
/// `InvalidHexInput` if the message is not a hex string; any decoding error
/// otherwise.
pub fn parse_tlv_with_config(message: &str, config: &DecoderConfig) -> TlvResult<Forest> {
    let data = decode_hex(message)?;
    parse_tlv_bytes_with_config(&data, config)
}

/// Parse raw TLV bytes with the default decoder configuration
pub fn parse_tlv_bytes(data: &[u8]) -> TlvResult<Forest> {
    parse_tlv_bytes_with_config(data, &DecoderConfig::default())
}

/// Parse raw TLV bytes
pub fn parse_tlv_bytes_with_config(data: &[u8], config: &DecoderConfig) -> TlvResult<Forest> {
    TlvDecoder::with_config(config.clone()).decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tlv_data_raw() {
        let forest = parse_tlv("6F1A840E315041592E5359532E4444463031A5088801025F2D02656E").unwrap();
        let tags: Vec<u32> = forest.walk().map(|visit| visit.node.tag().id()).collect();
        assert_eq!(tags, vec![0x6F, 0x84, 0xA5, 0x88, 0x5F2D]);
    }

    #[test]
    fn test_parse_lowercase() {
        let forest = parse_tlv("5f2d02656e").unwrap();
        assert_eq!(forest.nodes()[0].value(), b"en");
    }

    #[test]
    fn test_parse_odd_hex() {
        let err = parse_tlv("6F1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHexInput);
    }

    #[test]
    fn test_parse_indefinite_length() {
        let err = parse_tlv("6F80").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedIndefiniteLength);
        assert_eq!(err.offset(), Some(1));
    }

    #[test]
    fn test_parse_trailing_data() {
        let err = parse_tlv("88010200").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingData);

        let config = DecoderConfig::default().with_skip_padding(true);
        let forest = parse_tlv_with_config("88010200", &config).unwrap();
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn test_parse_bytes() {
        let forest = parse_tlv_bytes(&[0x9C, 0x01, 0x00]).unwrap();
        assert_eq!(forest.nodes()[0].name(), Some("Transaction Type"));
    }
}
