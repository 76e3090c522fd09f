//! Decoded TLV tree
//!
//! A [`Forest`] owns the top-level [`Node`]s of one decode call; each node
//! owns its children. Nodes are immutable: the decoder builds them bottom-up
//! and nothing hands out mutable access afterwards.
//!
//! Navigation towards the parent goes through [`Forest::walk`] (or
//! [`Node::walk`]), which yields every node together with a borrowed reference
//! to its parent, so no node stores a back-pointer.

use crate::ber::encoder::TlvEncoder;
use crate::ber::types::{Length, Tag, TagClass};
use crate::dictionary::{TagInfo, ValueFormat};
use crate::render::TreeRenderer;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// One decoded TLV element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: Tag,
    length: Length,
    /// Absolute offset of the first tag byte
    offset: usize,
    depth: usize,
    /// Raw value, primitive nodes only
    value: Vec<u8>,
    children: Vec<Node>,
    metadata: Option<&'static TagInfo>,
}

impl Node {
    pub(crate) fn primitive(
        tag: Tag,
        length: Length,
        offset: usize,
        depth: usize,
        value: Vec<u8>,
        metadata: Option<&'static TagInfo>,
    ) -> Self {
        Self {
            tag,
            length,
            offset,
            depth,
            value,
            children: Vec::new(),
            metadata,
        }
    }

    pub(crate) fn constructed(
        tag: Tag,
        length: Length,
        offset: usize,
        depth: usize,
        children: Vec<Node>,
        metadata: Option<&'static TagInfo>,
    ) -> Self {
        Self {
            tag,
            length,
            offset,
            depth,
            value: Vec::new(),
            children,
            metadata,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn class(&self) -> TagClass {
        self.tag.class()
    }

    pub fn is_constructed(&self) -> bool {
        self.tag.is_constructed()
    }

    /// Number of value bytes
    pub fn length(&self) -> usize {
        self.length.value()
    }

    /// Length as it was encoded (short or long form)
    pub fn encoded_length(&self) -> Length {
        self.length
    }

    /// Absolute offset of the node's first tag byte in the decoded input
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Nesting level, 0 for top-level nodes
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Size of the tag and length fields
    pub fn header_len(&self) -> usize {
        self.tag.width() + self.length.encoded_len()
    }

    /// Size of the whole element: header plus value
    pub fn total_len(&self) -> usize {
        self.header_len() + self.length()
    }

    /// Raw value bytes
    ///
    /// Empty for constructed nodes; their content is [`Node::children`].
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Tag dictionary entry, if the tag is known
    pub fn metadata(&self) -> Option<&'static TagInfo> {
        self.metadata
    }

    pub fn name(&self) -> Option<&'static str> {
        self.metadata.map(|info| info.name)
    }

    /// Expected value format, `Unknown` for tags missing from the dictionary
    pub fn format(&self) -> ValueFormat {
        self.metadata
            .map(|info| info.format)
            .unwrap_or(ValueFormat::Unknown)
    }

    /// Find the first node with `tag` in this subtree (depth-first, self included)
    pub fn find(&self, tag: u32) -> Option<&Node> {
        if self.tag.id() == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Walk this subtree depth-first, self first
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Visit {
                node: self,
                parent: None,
            }],
        }
    }

    /// Re-encode this node, children included
    pub fn encode(&self) -> Vec<u8> {
        let mut encoder = TlvEncoder::with_capacity(self.total_len());
        encoder.encode_node(self);
        encoder.into_bytes().to_vec()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreeRenderer::new().write_line(f, self, 0)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 9)?;
        state.serialize_field("tag", &self.tag)?;
        state.serialize_field("class", &self.class())?;
        state.serialize_field("constructed", &self.is_constructed())?;
        state.serialize_field("offset", &self.offset)?;
        state.serialize_field("length", &self.length())?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("format", &self.format())?;
        if self.is_constructed() {
            state.skip_field("value")?;
            state.serialize_field("children", &self.children)?;
        } else {
            state.serialize_field("value", &hex::encode_upper(&self.value))?;
            state.skip_field("children")?;
        }
        state.end()
    }
}

/// A node reached by [`Walk`], with its parent
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: &'a Node,
    /// `None` for the node the walk started from (or for forest roots)
    pub parent: Option<&'a Node>,
}

/// Depth-first, pre-order iterator over a tree
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        self.stack
            .extend(visit.node.children.iter().rev().map(|child| Visit {
                node: child,
                parent: Some(visit.node),
            }));
        Some(visit)
    }
}

/// Result of decoding one input: the ordered top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: Vec<Node>,
    input_len: usize,
}

impl Forest {
    pub(crate) fn new(nodes: Vec<Node>, input_len: usize) -> Self {
        Self { nodes, input_len }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of bytes the forest was decoded from
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Walk every node depth-first, in decode order
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self
                .nodes
                .iter()
                .rev()
                .map(|node| Visit { node, parent: None })
                .collect(),
        }
    }

    /// Find the first node with `tag`, depth-first
    pub fn find(&self, tag: u32) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find(tag))
    }

    /// Find every node with `tag`, depth-first
    pub fn find_all(&self, tag: u32) -> Vec<&Node> {
        self.walk()
            .filter(|visit| visit.node.tag().id() == tag)
            .map(|visit| visit.node)
            .collect()
    }

    /// Find the parent of the first node with `tag`
    pub fn parent_of(&self, tag: u32) -> Option<&Node> {
        self.walk()
            .find(|visit| visit.node.tag().id() == tag)
            .and_then(|visit| visit.parent)
    }

    /// Re-encode every node; reproduces the decoded input
    pub fn encode(&self) -> Vec<u8> {
        let mut encoder = TlvEncoder::with_capacity(self.input_len);
        encoder.encode_nodes(&self.nodes);
        encoder.into_bytes().to_vec()
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreeRenderer::new().write_nodes(f, &self.nodes, 0)
    }
}

impl Serialize for Forest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Forest", 2)?;
        state.serialize_field("input_len", &self.input_len)?;
        state.serialize_field("nodes", &self.nodes)?;
        state.end()
    }
}
