//! BER-TLV processing for EMV payment card data
//!
//! This crate decodes BER-TLV messages into a tree of [`Node`]s, resolves tags
//! against the EMV tag dictionary and renders the result as indented text.
//!
//! - [`ber`]: byte cursor, tag/length grammar, decoder and re-encoder
//! - [`node`]: the decoded tree and its navigation helpers
//! - [`dictionary`]: names and value formats of known EMV tags
//! - [`render`]: text output

pub mod ber;
pub mod dictionary;
pub mod node;
pub mod render;

pub use ber::{
    ByteCursor, DecoderConfig, Length, Tag, TagClass, TlvDecoder, TlvEncoder, DEFAULT_MAX_DEPTH,
};
pub use dictionary::{lookup, TagInfo, ValueFormat};
pub use emv_core::{ErrorKind, TlvError, TlvResult};
pub use node::{Forest, Node, Visit, Walk};
pub use render::{RenderConfig, TreeRenderer};
