//! EMV tag dictionary
//!
//! Static, read-only metadata for known EMV data elements: display name,
//! value format and whether the tag is expected to be constructed. The table
//! lives in [`emv_tags`]; lookups go through a hash index built on first use.
//!
//! Missing entries are not errors. Proprietary and scheme specific tags are
//! common in real card data and simply render with a placeholder name.

mod emv_tags;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Value format hint, after the EMV data element format codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueFormat {
    /// `n`: BCD digits, right justified, leading zeros
    Numeric,
    /// `a`, `an`, `ans`: character data
    Alphanumeric,
    /// `b`: opaque binary
    Binary,
    /// `cn`: BCD digits, left justified, padded with `F`
    CompressedNumeric,
    Unknown,
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ValueFormat::Numeric => "n",
            ValueFormat::Alphanumeric => "ans",
            ValueFormat::Binary => "b",
            ValueFormat::CompressedNumeric => "cn",
            ValueFormat::Unknown => "?",
        };
        f.pad(code)
    }
}

/// Dictionary entry for one tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TagInfo {
    #[serde(skip)]
    pub tag: u32,
    pub name: &'static str,
    pub format: ValueFormat,
    pub constructed: bool,
}

impl TagInfo {
    const fn new(tag: u32, name: &'static str, format: ValueFormat, constructed: bool) -> Self {
        Self {
            tag,
            name,
            format,
            constructed,
        }
    }
}

static INDEX: Lazy<HashMap<u32, &'static TagInfo>> = Lazy::new(|| {
    emv_tags::TAGS.iter().map(|info| (info.tag, info)).collect()
});

/// Look up a tag by its numeric identifier (e.g. `0x9F02`)
pub fn lookup(tag: u32) -> Option<&'static TagInfo> {
    INDEX.get(&tag).copied()
}

/// Every dictionary entry, sorted by tag
pub fn entries() -> &'static [TagInfo] {
    emv_tags::TAGS
}
