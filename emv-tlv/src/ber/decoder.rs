//! BER-TLV decoder producing a [`Forest`] of [`Node`]s
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use emv_tlv::ber::{DecoderConfig, TlvDecoder};
//!
//! let decoder = TlvDecoder::with_config(DecoderConfig::default().with_max_depth(8));
//! let forest = decoder.decode(&data)?;
//! ```

use crate::ber::cursor::ByteCursor;
use crate::ber::types::{Length, Tag};
use crate::dictionary;
use crate::node::{Forest, Node};
use emv_core::{TlvError, TlvResult};

/// Default limit on constructed nesting
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Decoder configuration
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Deepest nesting level a node may sit at (top-level nodes are level 0)
    pub max_depth: usize,
    /// Skip `0x00`/`0xFF` padding bytes between data objects
    pub skip_padding: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            skip_padding: false,
        }
    }
}

impl DecoderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_skip_padding(mut self, skip_padding: bool) -> Self {
        self.skip_padding = skip_padding;
        self
    }
}

/// BER-TLV decoder
///
/// Decodes a byte buffer into its ordered top-level data objects, recursing
/// into constructed values. The whole input must be consumed.
///
/// # Error Handling
///
/// Decoding stops at the first error; no partial tree is returned. Every
/// error carries the absolute byte offset it was detected at.
///
/// # Trailing Data
///
/// Once a region (the input, or a constructed value) has produced at least
/// one complete data object, leftover bytes too short to hold another tag and
/// length (including long-form length bytes) are reported as `TrailingData`. Leftovers that do hold a header
/// but whose value is cut short are `UnexpectedEof`.
#[derive(Debug, Clone, Default)]
pub struct TlvDecoder {
    config: DecoderConfig,
}

impl TlvDecoder {
    /// Create a decoder with default configuration
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// Create a decoder with custom configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode every data object in `data`
    pub fn decode(&self, data: &[u8]) -> TlvResult<Forest> {
        let mut cursor = ByteCursor::new(data);
        match self.decode_region(&mut cursor, 0) {
            Ok(nodes) => {
                log::debug!("Decoded {} top-level objects from {} bytes", nodes.len(), data.len());
                Ok(Forest::new(nodes, data.len()))
            }
            Err(e) => {
                log::warn!("TLV decoding failed: {}", e);
                Err(e)
            }
        }
    }

    /// Decode data objects until the region is exhausted
    fn decode_region(&self, cursor: &mut ByteCursor<'_>, depth: usize) -> TlvResult<Vec<Node>> {
        let mut nodes = Vec::new();

        loop {
            if self.config.skip_padding {
                Self::skip_padding(cursor);
            }
            if cursor.is_empty() {
                break;
            }
            if depth > self.config.max_depth {
                return Err(TlvError::MaxDepthExceeded {
                    offset: cursor.position(),
                    limit: self.config.max_depth,
                });
            }
            if !nodes.is_empty() && !Self::header_fits(cursor) {
                return Err(TlvError::TrailingData {
                    offset: cursor.position(),
                    remaining: cursor.remaining(),
                });
            }
            nodes.push(self.decode_element(cursor, depth)?);
        }

        Ok(nodes)
    }

    /// Decode one data object, recursing into constructed values
    fn decode_element(&self, cursor: &mut ByteCursor<'_>, depth: usize) -> TlvResult<Node> {
        let offset = cursor.position();
        let tag = Tag::decode(cursor)?;
        let length = Length::decode(cursor)?;
        let metadata = dictionary::lookup(tag.id());

        let node = if tag.is_constructed() {
            let mut region = cursor.sub_cursor(length.value())?;
            let children = self.decode_region(&mut region, depth + 1)?;
            Node::constructed(tag, length, offset, depth, children, metadata)
        } else {
            let value = cursor.read_n(length.value())?.to_vec();
            Node::primitive(tag, length, offset, depth, value, metadata)
        };

        log::trace!(
            "Tag {} at offset {}: length {}, depth {}",
            tag,
            offset,
            length.value(),
            depth
        );
        Ok(node)
    }

    /// Check whether a complete tag and length can still be read
    ///
    /// Only a shortfall counts: malformed tags and length bytes still fit, so
    /// the element decode reports them.
    fn header_fits(cursor: &ByteCursor<'_>) -> bool {
        let mut probe = *cursor;
        match Tag::decode(&mut probe) {
            Ok(_) => {}
            Err(TlvError::UnexpectedEof { .. }) => return false,
            Err(_) => return true,
        }
        match probe.read_byte() {
            Ok(first) if first & 0x80 != 0 => {
                let octets = (first & 0x7F) as usize;
                octets == 0 || octets == 0x7F || probe.remaining() >= octets
            }
            Ok(_) => true,
            Err(_) => false,
        }
    }

    fn skip_padding(cursor: &mut ByteCursor<'_>) {
        while let Ok(0x00 | 0xFF) = cursor.peek() {
            cursor.read_byte().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ber::types::TagClass;
    use emv_core::ErrorKind;

    const FCI: &str = "6F1A840E315041592E5359532E4444463031A5088801025F2D02656E";

    fn decode(hex_str: &str) -> TlvResult<Forest> {
        TlvDecoder::new().decode(&hex::decode(hex_str).unwrap())
    }

    /// `levels` nested A5 templates around a single `88 01 02`
    fn nested(levels: usize) -> Vec<u8> {
        let mut data = vec![0x88, 0x01, 0x02];
        for _ in 0..levels {
            let mut wrapped = vec![0xA5];
            wrapped.extend_from_slice(&Length::new(data.len()).encode());
            wrapped.extend_from_slice(&data);
            data = wrapped;
        }
        data
    }

    #[test]
    fn test_decode_fci() {
        let forest = decode(FCI).unwrap();
        assert_eq!(forest.len(), 1);

        let fci = &forest.nodes()[0];
        assert_eq!(fci.tag().id(), 0x6F);
        assert!(fci.is_constructed());
        assert_eq!(fci.length(), 0x1A);
        assert_eq!(fci.children().len(), 2);

        let df_name = &fci.children()[0];
        assert_eq!(df_name.tag().id(), 0x84);
        assert!(!df_name.is_constructed());
        assert_eq!(df_name.length(), 0x0E);
        assert_eq!(df_name.value(), &hex::decode("315041592E5359532E4444463031").unwrap()[..]);
        assert_eq!(df_name.class(), TagClass::ContextSpecific);

        let proprietary = &fci.children()[1];
        assert_eq!(proprietary.tag().id(), 0xA5);
        assert!(proprietary.is_constructed());
        assert_eq!(proprietary.length(), 0x08);
        assert_eq!(proprietary.children().len(), 2);

        let sfi = &proprietary.children()[0];
        assert_eq!(sfi.tag().id(), 0x88);
        assert_eq!(sfi.length(), 1);
        assert_eq!(sfi.value(), &[0x02]);

        let language = &proprietary.children()[1];
        assert_eq!(language.tag().id(), 0x5F2D);
        assert_eq!(language.length(), 2);
        assert_eq!(language.value(), b"en");
        assert_eq!(language.name(), Some("Language Preference"));
    }

    #[test]
    fn test_decode_flat_terminal_data() {
        let data = "5F2A02036482020800950580000000009A032311259C01009F02060000000000019F10200FA500A08309C000F456B82860064C950F0000000000000000000000000000009F1A0203649F2608D547079427A420B79F2701809F360200FC9F3704\
                    20475A309F6E04103000009F08020001";
        let forest = decode(data).unwrap();
        let tags: Vec<u32> = forest.iter().map(|node| node.tag().id()).collect();
        assert_eq!(
            tags,
            vec![
                0x5F2A, 0x82, 0x95, 0x9A, 0x9C, 0x9F02, 0x9F10, 0x9F1A, 0x9F26, 0x9F27, 0x9F36,
                0x9F37, 0x9F6E, 0x9F08
            ]
        );
        assert!(forest.iter().all(|node| node.children().is_empty()));
    }

    #[test]
    fn test_decode_empty_input() {
        let forest = decode("").unwrap();
        assert!(forest.is_empty());
    }

    #[test]
    fn test_empty_constructed() {
        let forest = decode("A500").unwrap();
        let node = &forest.nodes()[0];
        assert!(node.is_constructed());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_primitive_value_not_interpreted() {
        // Looks like TLV, but tag 84 is primitive
        let forest = decode("84035F2D00").unwrap();
        assert!(forest.nodes()[0].children().is_empty());
        assert_eq!(forest.nodes()[0].value(), &[0x5F, 0x2D, 0x00]);
    }

    #[test]
    fn test_unknown_tag_has_no_metadata() {
        let forest = decode("DF7F0101").unwrap();
        assert!(forest.nodes()[0].metadata().is_none());
    }

    #[test]
    fn test_long_form_length() {
        let mut data = vec![0x9F, 0x46, 0x81, 0x90];
        data.extend(std::iter::repeat_n(0xAB, 0x90));
        let forest = TlvDecoder::new().decode(&data).unwrap();
        assert_eq!(forest.nodes()[0].length(), 0x90);
        assert_eq!(forest.nodes()[0].header_len(), 4);
    }

    #[test]
    fn test_indefinite_length() {
        let err = decode("6F80").unwrap_err();
        assert_eq!(err, TlvError::UnsupportedIndefiniteLength { offset: 1 });
    }

    #[test]
    fn test_truncated_value() {
        let err = decode("840E3150415900").unwrap_err();
        assert_eq!(
            err,
            TlvError::UnexpectedEof {
                offset: 2,
                needed: 14,
                available: 5
            }
        );
    }

    #[test]
    fn test_truncated_nested_value_offset() {
        // 5F2D claims 3 bytes inside A5 but only 2 are in the template
        let err = decode("6F07A5055F2D03656E").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(err.offset(), Some(7));
    }

    #[test]
    fn test_lone_byte() {
        let err = decode("80").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(err.offset(), Some(1));
    }

    #[test]
    fn test_trailing_data() {
        let err = decode("5F2D02656E00").unwrap_err();
        assert_eq!(
            err,
            TlvError::TrailingData {
                offset: 5,
                remaining: 1
            }
        );

        let err = decode(&format!("{}9F", FCI)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingData);
        assert_eq!(err.offset(), Some(28));
    }

    #[test]
    fn test_trailing_data_inside_template() {
        let err = decode("A5048801029F").unwrap_err();
        assert_eq!(
            err,
            TlvError::TrailingData {
                offset: 5,
                remaining: 1
            }
        );
    }

    #[test]
    fn test_trailing_partial_long_length() {
        let err = decode("9C01008481").unwrap_err();
        assert_eq!(
            err,
            TlvError::TrailingData {
                offset: 3,
                remaining: 2
            }
        );

        let err = decode("9C01009F81").unwrap_err();
        assert_eq!(
            err,
            TlvError::TrailingData {
                offset: 3,
                remaining: 2
            }
        );

        // Malformed length bytes after a complete element are still reported as such
        let err = decode("9C010084FF").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        let err = decode("9C01008480").unwrap_err();
        assert_eq!(err, TlvError::UnsupportedIndefiniteLength { offset: 4 });
    }

    #[test]
    fn test_second_element_truncated_is_eof() {
        let err = decode("88010284050102").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_invalid_tag() {
        let err = decode("9F8182838401").unwrap_err();
        assert_eq!(err, TlvError::InvalidTag { offset: 0 });
    }

    #[test]
    fn test_invalid_length() {
        let err = decode("84FF").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        assert_eq!(err.offset(), Some(1));

        let err = decode("848401").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }

    #[test]
    fn test_max_depth() {
        let decoder = TlvDecoder::new();
        let forest = decoder.decode(&nested(DEFAULT_MAX_DEPTH)).unwrap();
        let deepest = forest.walk().map(|visit| visit.node.depth()).max().unwrap();
        assert_eq!(deepest, DEFAULT_MAX_DEPTH);

        let err = decoder.decode(&nested(DEFAULT_MAX_DEPTH + 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MaxDepthExceeded);
    }

    #[test]
    fn test_custom_max_depth() {
        let decoder = TlvDecoder::with_config(DecoderConfig::default().with_max_depth(1));
        assert!(decoder.decode(&nested(1)).is_ok());

        let err = decoder.decode(&nested(2)).unwrap_err();
        assert_eq!(
            err,
            TlvError::MaxDepthExceeded {
                offset: 4,
                limit: 1
            }
        );
    }

    #[test]
    fn test_skip_padding() {
        let data = hex::decode("00FF5F2D02656E0000A5038801020000FF").unwrap();
        assert!(TlvDecoder::new().decode(&data).is_err());

        let decoder = TlvDecoder::with_config(DecoderConfig::default().with_skip_padding(true));
        let forest = decoder.decode(&data).unwrap();
        let tags: Vec<u32> = forest.iter().map(|node| node.tag().id()).collect();
        assert_eq!(tags, vec![0x5F2D, 0xA5]);
        assert_eq!(forest.nodes()[1].children().len(), 1);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(decode(FCI).unwrap(), decode(FCI).unwrap());
    }
}
