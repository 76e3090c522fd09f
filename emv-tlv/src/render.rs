//! Tree renderer: decoded nodes as indented, human-readable text
//!
//! One line per node, children one indentation level deeper:
//!
//! ```text
//! tag: 6F | length: 26 | File Control Information (FCI) Template
//! 	tag: 84 | length: 14 | Dedicated File (DF) Name | value: 31 50 41 59 2E 53 59 53 2E 44 44 46 30 31
//! 	tag: A5 | length: 8 | File Control Information (FCI) Proprietary Template
//! 		tag: 88 | length: 1 | Short File Identifier (SFI) | value: 02
//! 		tag: 5F2D | length: 2 | Language Preference | value: 65 6E ("en")
//! ```

use crate::dictionary::ValueFormat;
use crate::node::Node;
use std::fmt::{self, Write};

/// Name printed for tags missing from the dictionary
pub const UNKNOWN_TAG_NAME: &str = "Unknown tag";

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Indentation added per nesting level
    pub indent: String,
    /// Separator between hex bytes of a value
    pub byte_separator: String,
    /// Print dictionary names
    pub show_names: bool,
    /// Print printable alphanumeric values as text next to the hex
    pub show_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            byte_separator: " ".to_string(),
            show_names: true,
            show_text: true,
        }
    }
}

impl RenderConfig {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_byte_separator(mut self, separator: impl Into<String>) -> Self {
        self.byte_separator = separator.into();
        self
    }

    pub fn with_names(mut self, show_names: bool) -> Self {
        self.show_names = show_names;
        self
    }

    pub fn with_text(mut self, show_text: bool) -> Self {
        self.show_text = show_text;
        self
    }
}

/// Renders node trees as text
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    /// Create a renderer with default configuration
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render sibling nodes and their subtrees, one line per node
    pub fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        self.write_nodes(&mut out, nodes, 0).ok();
        out
    }

    /// Write sibling nodes and their subtrees, starting at `level`
    pub fn write_nodes<W: Write + ?Sized>(&self, out: &mut W, nodes: &[Node], level: usize) -> fmt::Result {
        for node in nodes {
            self.write_line(out, node, level)?;
            out.write_char('\n')?;
            self.write_nodes(out, node.children(), level + 1)?;
        }
        Ok(())
    }

    /// Write the line for a single node, without a line break
    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W, node: &Node, level: usize) -> fmt::Result {
        for _ in 0..level {
            out.write_str(&self.config.indent)?;
        }
        write!(out, "tag: {} | length: {}", node.tag(), node.length())?;

        if self.config.show_names {
            write!(out, " | {}", node.name().unwrap_or(UNKNOWN_TAG_NAME))?;
        }

        if node.is_constructed() || node.value().is_empty() {
            return Ok(());
        }

        write!(out, " | value: {}", self.hex(node.value()))?;
        if self.config.show_text && node.format() == ValueFormat::Alphanumeric {
            if let Some(text) = printable_text(node.value()) {
                write!(out, " (\"{}\")", text)?;
            }
        }
        Ok(())
    }

    fn hex(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|byte| format!("{:02X}", byte))
            .collect::<Vec<_>>()
            .join(&self.config.byte_separator)
    }
}

/// The value as text, if every byte is printable ASCII
fn printable_text(bytes: &[u8]) -> Option<&str> {
    if bytes.iter().all(|byte| (0x20..=0x7E).contains(byte)) {
        std::str::from_utf8(bytes).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ber::decoder::TlvDecoder;
    use crate::node::Forest;

    const FCI: &str = "6F1A840E315041592E5359532E4444463031A5088801025F2D02656E";

    fn decode(hex_str: &str) -> Forest {
        TlvDecoder::new().decode(&hex::decode(hex_str).unwrap()).unwrap()
    }

    #[test]
    fn test_render_fci() {
        let forest = decode(FCI);
        let text = TreeRenderer::new().render(forest.nodes());
        let expected = "\
tag: 6F | length: 26 | File Control Information (FCI) Template
\ttag: 84 | length: 14 | Dedicated File (DF) Name | value: 31 50 41 59 2E 53 59 53 2E 44 44 46 30 31
\ttag: A5 | length: 8 | File Control Information (FCI) Proprietary Template
\t\ttag: 88 | length: 1 | Short File Identifier (SFI) | value: 02
\t\ttag: 5F2D | length: 2 | Language Preference | value: 65 6E (\"en\")
";
        assert_eq!(text, expected);
        assert_eq!(forest.to_string(), expected);
    }

    #[test]
    fn test_unknown_tag_placeholder() {
        let forest = decode("DF7F02ABCD");
        assert_eq!(
            forest.to_string(),
            "tag: DF7F | length: 2 | Unknown tag | value: AB CD\n"
        );
    }

    #[test]
    fn test_text_only_for_printable_alphanumeric() {
        // Application Label with a control byte
        let forest = decode("500356490A");
        assert_eq!(
            forest.nodes()[0].to_string(),
            "tag: 50 | length: 3 | Application Label | value: 56 49 0A"
        );

        // Printable, but binary format
        let forest = decode("9F1003414243");
        assert_eq!(
            forest.to_string(),
            "tag: 9F10 | length: 3 | Issuer Application Data | value: 41 42 43\n"
        );

        let forest = decode("5004564953418A023030");
        assert_eq!(
            forest.to_string(),
            "tag: 50 | length: 4 | Application Label | value: 56 49 53 41 (\"VISA\")\n\
             tag: 8A | length: 2 | Authorisation Response Code | value: 30 30 (\"00\")\n"
        );
    }

    #[test]
    fn test_empty_values() {
        let forest = decode("A50050000000");
        assert_eq!(
            forest.to_string(),
            "tag: A5 | length: 0 | File Control Information (FCI) Proprietary Template\n\
             tag: 50 | length: 0 | Application Label\n\
             tag: 00 | length: 0 | Unknown tag\n"
        );
    }

    #[test]
    fn test_custom_config() {
        let forest = decode("A5045F2D0165");
        let renderer = TreeRenderer::with_config(
            RenderConfig::default()
                .with_indent("  ")
                .with_byte_separator("")
                .with_names(false)
                .with_text(false),
        );
        assert_eq!(
            renderer.render(forest.nodes()),
            "tag: A5 | length: 4\n  tag: 5F2D | length: 1 | value: 65\n"
        );
    }

    #[test]
    fn test_sibling_order_preserved() {
        let forest = decode("9C01009A032311255F2A020978");
        let tags: Vec<String> = forest
            .to_string()
            .lines()
            .map(|line| line.split(" | ").next().unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["tag: 9C", "tag: 9A", "tag: 5F2A"]);
    }

    #[test]
    fn test_printable_text() {
        assert_eq!(printable_text(b"en"), Some("en"));
        assert_eq!(printable_text(b""), Some(""));
        assert_eq!(printable_text(&[0x65, 0x7F]), None);
    }
}
