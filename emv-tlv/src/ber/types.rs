//! BER-TLV encoding types (Tag, Length, etc.)

use crate::ber::cursor::ByteCursor;
use emv_core::{TlvError, TlvResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// Maximum width of an encoded tag, leading byte included
pub const MAX_TAG_WIDTH: usize = 4;

/// BER Tag Class
///
/// Taken from bits 8-7 of the first tag byte:
/// - **Universal**: Standard ASN.1 types (INTEGER, OCTET STRING, etc.)
/// - **Application**: Application-wide types (most EMV tags, e.g. `5A`, `6F`)
/// - **Context-specific**: Meaning depends on the enclosing template (`84`, `A5`)
/// - **Private**: Issuer or scheme proprietary data (`C0`..`DF`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl TagClass {
    /// Get tag class from the first tag byte (bits 8-7)
    pub fn from_bits(byte: u8) -> Self {
        match (byte >> 6) & 0x03 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }

    /// Convert tag class to bits (for encoding)
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

impl fmt::Display for TagClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagClass::Universal => "universal",
            TagClass::Application => "application",
            TagClass::ContextSpecific => "context-specific",
            TagClass::Private => "private",
        };
        f.pad(name)
    }
}

/// BER-TLV Tag
///
/// A tag is identified by the big-endian value of all its encoded bytes, the
/// way EMV documents name them: `9F02` is the two byte tag `9F 02`, not tag
/// number 2. The encoded width is kept so a tag with redundant continuation
/// bytes re-encodes to the exact same bytes.
///
/// # Encoding Format
///
/// Short form (tag number 0-30):
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T
/// ```
///
/// Extended form (tag number > 30):
/// ```text
/// First byte:  C C P 1 1 1 1 1  (all tag bits set to 1)
/// Following bytes: 1 T T T T T T T  (continuation bytes, last byte has bit 8 = 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Big-endian value of all tag bytes
    id: u32,
    /// Number of encoded bytes (1..=MAX_TAG_WIDTH)
    width: u8,
}

impl Tag {
    /// Create a tag from its numeric identifier (e.g. `0x5F2D`)
    ///
    /// The width is the minimal number of bytes holding `id`.
    pub fn new(id: u32) -> Self {
        let width = (4 - id.leading_zeros() as usize / 8).max(1);
        Self {
            id,
            width: width as u8,
        }
    }

    /// Get the numeric identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the number of encoded bytes
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Get the leading tag byte
    pub fn first_byte(&self) -> u8 {
        (self.id >> ((self.width() - 1) * 8)) as u8
    }

    /// Get tag class
    pub fn class(&self) -> TagClass {
        TagClass::from_bits(self.first_byte())
    }

    /// Check if tag is constructed
    pub fn is_constructed(&self) -> bool {
        (self.first_byte() & 0x20) != 0
    }

    /// Get the class-independent tag number
    ///
    /// For short form tags this is bits 5-1 of the only byte; for extended
    /// tags the 7-bit groups of the continuation bytes, most significant
    /// first.
    pub fn number(&self) -> u32 {
        let first = self.first_byte() & 0x1F;
        if first != 0x1F {
            return first as u32;
        }
        self.encode()[1..]
            .iter()
            .fold(0u32, |acc, byte| (acc << 7) | (byte & 0x7F) as u32)
    }

    /// Encode tag to bytes
    pub fn encode(&self) -> Vec<u8> {
        self.id.to_be_bytes()[4 - self.width()..].to_vec()
    }

    /// Decode a tag from the cursor
    ///
    /// # Error Handling
    /// Returns error if:
    /// - The cursor runs out before the tag terminates (`UnexpectedEof`)
    /// - Continuation bytes go past [`MAX_TAG_WIDTH`] (`InvalidTag`)
    pub fn decode(cursor: &mut ByteCursor<'_>) -> TlvResult<Self> {
        let offset = cursor.position();
        let first_byte = cursor.read_byte()?;
        let mut id = first_byte as u32;
        let mut width = 1;

        if first_byte & 0x1F == 0x1F {
            loop {
                if width >= MAX_TAG_WIDTH {
                    return Err(TlvError::InvalidTag { offset });
                }
                let byte = cursor.read_byte()?;
                id = (id << 8) | byte as u32;
                width += 1;
                if byte & 0x80 == 0 {
                    break;
                }
            }
        }

        Ok(Self {
            id,
            width: width as u8,
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$X}", self.id, width = self.width() * 2)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// BER-TLV Length
///
/// BER length can be encoded in two forms:
/// - **Short form**: For lengths 0-127 (1 byte)
/// - **Long form**: `0x80 | n` followed by `n` big-endian bytes
///
/// The long form keeps its byte count: `81 05` is a legal (if wasteful)
/// encoding of 5 and must re-encode as `81 05`, not `05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: value plus the number of length bytes after the first
    Long { value: usize, octets: u8 },
}

impl Length {
    /// Create a new length
    ///
    /// Automatically chooses the shortest form for the value.
    pub fn new(length: usize) -> Self {
        if length < 0x80 {
            Length::Short(length as u8)
        } else {
            let octets = std::mem::size_of::<usize>() - length.leading_zeros() as usize / 8;
            Length::Long {
                value: length,
                octets: octets as u8,
            }
        }
    }

    /// Get the length value
    pub fn value(&self) -> usize {
        match self {
            Length::Short(l) => *l as usize,
            Length::Long { value, .. } => *value,
        }
    }

    /// Number of bytes the length occupies when encoded
    pub fn encoded_len(&self) -> usize {
        match self {
            Length::Short(_) => 1,
            Length::Long { octets, .. } => 1 + *octets as usize,
        }
    }

    /// Encode length to bytes
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Length::Short(length) => vec![*length],
            Length::Long { value, octets } => {
                let mut result = Vec::with_capacity(1 + *octets as usize);
                result.push(0x80 | octets);
                for i in (0..*octets as u32).rev() {
                    // Leading zero octets beyond the width of usize
                    result.push(value.checked_shr(i * 8).unwrap_or(0) as u8);
                }
                result
            }
        }
    }

    /// Decode a length from the cursor
    ///
    /// # Error Handling
    /// Returns error if:
    /// - No length byte is left (`UnexpectedEof`)
    /// - The first byte is `0x80` (`UnsupportedIndefiniteLength`)
    /// - The first byte is `0xFF`, fewer length bytes remain than declared, or
    ///   the value does not fit in `usize` (`InvalidLength`)
    pub fn decode(cursor: &mut ByteCursor<'_>) -> TlvResult<Self> {
        let offset = cursor.position();
        let first_byte = cursor.read_byte()?;

        if first_byte & 0x80 == 0 {
            return Ok(Length::Short(first_byte));
        }

        let octets = first_byte & 0x7F;
        match octets {
            0 => Err(TlvError::UnsupportedIndefiniteLength { offset }),
            0x7F => Err(TlvError::InvalidLength {
                offset,
                reason: "reserved length byte 0xFF".to_string(),
            }),
            _ => {
                if cursor.remaining() < octets as usize {
                    return Err(TlvError::InvalidLength {
                        offset,
                        reason: format!(
                            "{} length bytes declared, {} available",
                            octets,
                            cursor.remaining()
                        ),
                    });
                }

                let mut value = 0usize;
                for &byte in cursor.read_n(octets as usize)? {
                    value = value
                        .checked_mul(256)
                        .and_then(|v| v.checked_add(byte as usize))
                        .ok_or_else(|| TlvError::InvalidLength {
                            offset,
                            reason: "length value overflows".to_string(),
                        })?;
                }

                Ok(Length::Long { value, octets })
            }
        }
    }
}
