//! BER-TLV encoder for decoded trees
//!
//! Re-encodes [`Node`]s exactly as they were read: tags and lengths keep
//! their original widths, constructed values are rebuilt from their
//! children. Decoding then encoding any accepted input yields the input.
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use emv_tlv::ber::{TlvDecoder, TlvEncoder};
//!
//! let forest = TlvDecoder::new().decode(&data)?;
//! let mut encoder = TlvEncoder::new();
//! encoder.encode_nodes(forest.nodes());
//! assert_eq!(encoder.into_bytes(), data);
//! ```

use crate::ber::types::{Length, Tag};
use crate::node::Node;
use bytes::{BufMut, Bytes, BytesMut};

/// BER-TLV encoder
///
/// Accumulates encoded data in a `BytesMut` buffer; `with_capacity()`
/// avoids reallocations when the output size is known (it always is for a
/// decoded tree).
#[derive(Debug, Default)]
pub struct TlvEncoder {
    buffer: BytesMut,
}

impl TlvEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new encoder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Encode a tag and length header
    fn encode_header(&mut self, tag: &Tag, length: &Length) {
        self.buffer.put_slice(&tag.encode());
        self.buffer.put_slice(&length.encode());
    }

    /// Encode one node and, for constructed nodes, all of its descendants
    pub fn encode_node(&mut self, node: &Node) {
        self.encode_header(&node.tag(), &node.encoded_length());
        if node.is_constructed() {
            self.encode_nodes(node.children());
        } else {
            self.buffer.put_slice(node.value());
        }
    }

    /// Encode a sequence of sibling nodes in order
    pub fn encode_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.encode_node(node);
        }
    }

    /// Number of bytes encoded so far
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Finish encoding and take the bytes
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }
}
