//! Machine and human readable reports for the command line tool

use emv_core::{ErrorKind, TlvError};
use emv_tlv::dictionary::{self, TagInfo};
use emv_tlv::Tag;
use serde::Serialize;

/// A decode failure, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    /// Byte offset (or character position for hex input errors)
    pub offset: Option<usize>,
    pub message: String,
}

impl From<&TlvError> for ErrorReport {
    fn from(error: &TlvError) -> Self {
        let offset = match error {
            TlvError::InvalidHexInput { position, .. } => *position,
            other => other.offset(),
        };
        Self {
            kind: error.kind(),
            offset,
            message: error.to_string(),
        }
    }
}

/// A dictionary entry with its tag spelled in hex
#[derive(Debug, Clone, Serialize)]
pub struct TagEntry {
    pub tag: String,
    #[serde(flatten)]
    pub info: &'static TagInfo,
}

/// Every dictionary entry, sorted by tag
pub fn tag_entries() -> Vec<TagEntry> {
    dictionary::entries()
        .iter()
        .map(|info| TagEntry {
            tag: Tag::new(info.tag).to_string(),
            info,
        })
        .collect()
}

/// The dictionary as an aligned text table
pub fn tag_listing() -> String {
    tag_entries()
        .iter()
        .map(|entry| {
            let kind = if entry.info.constructed { "constructed" } else { "primitive" };
            format!(
                "{:<6} {:<3} {:<11} {}\n",
                entry.tag, entry.info.format, kind, entry.info.name
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report() {
        let error = TlvError::TrailingData {
            offset: 5,
            remaining: 1,
        };
        let report = ErrorReport::from(&error);
        assert_eq!(report.kind, ErrorKind::TrailingData);
        assert_eq!(report.offset, Some(5));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "TrailingData");
        assert_eq!(json["offset"], 5);
    }

    #[test]
    fn test_hex_error_report_keeps_position() {
        let error = emv_core::decode_hex("6FZZ").unwrap_err();
        let report = ErrorReport::from(&error);
        assert_eq!(report.kind, ErrorKind::InvalidHexInput);
        assert_eq!(report.offset, Some(2));
    }

    #[test]
    fn test_tag_listing() {
        let listing = tag_listing();
        assert_eq!(listing.lines().count(), dictionary::entries().len());
        assert!(listing.contains("5F2D   ans primitive   Language Preference"));
        assert!(listing.contains("BF0C   b   constructed File Control Information (FCI) Issuer Discretionary Data"));
    }

    #[test]
    fn test_tag_entries_json() {
        let json = serde_json::to_value(tag_entries()).unwrap();
        let first = &json[0];
        assert_eq!(first["tag"], "42");
        assert_eq!(first["format"], "numeric");
        assert_eq!(first["constructed"], false);
    }
}
