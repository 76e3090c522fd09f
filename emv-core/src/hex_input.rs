//! Conversion of user supplied hex strings into raw bytes
//!
//! The message arrives as text (command line argument, stdin line or a form
//! field), so surrounding whitespace such as a trailing `\r\n` is dropped.
//! Everything between must be hex digit pairs; case does not matter.

use crate::error::{TlvError, TlvResult};

/// Decode a hex string into bytes
///
/// # Errors
/// Returns `TlvError::InvalidHexInput` if the trimmed input has an odd number
/// of digits or contains a non-hex character. For bad characters the position
/// is the character index in the original, untrimmed input.
pub fn decode_hex(input: &str) -> TlvResult<Vec<u8>> {
    let trimmed = input.trim();
    let leading = input.len() - input.trim_start().len();

    hex::decode(trimmed).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => TlvError::InvalidHexInput {
            position: Some(leading + index),
            reason: format!("invalid character {:?}", c),
        },
        hex::FromHexError::OddLength => TlvError::InvalidHexInput {
            position: None,
            reason: format!("odd number of hex digits ({})", trimmed.len()),
        },
        other => TlvError::InvalidHexInput {
            position: None,
            reason: other.to_string(),
        },
    })
}
