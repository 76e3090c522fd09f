use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Main error type for TLV decoding operations
///
/// Every variant is terminal for the decode call that produced it: no partial
/// results are returned. Variants carry the byte offset into the decoded input
/// at which the failure was detected (for `InvalidHexInput` the position is a
/// character index into the hex string instead).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("Invalid hex input{}: {reason}", at_position(.position))]
    InvalidHexInput {
        position: Option<usize>,
        reason: String,
    },

    #[error("Unexpected end of data at offset {offset}: need {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid tag at offset {offset}: continuation does not terminate")]
    InvalidTag { offset: usize },

    #[error("Invalid length at offset {offset}: {reason}")]
    InvalidLength { offset: usize, reason: String },

    #[error("Unsupported indefinite length at offset {offset}")]
    UnsupportedIndefiniteLength { offset: usize },

    #[error("Maximum nesting depth {limit} exceeded at offset {offset}")]
    MaxDepthExceeded { offset: usize, limit: usize },

    #[error("Trailing data at offset {offset}: {remaining} bytes left unconsumed")]
    TrailingData { offset: usize, remaining: usize },
}

fn at_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" at position {}", p),
        None => String::new(),
    }
}

/// Fieldless discriminant of [`TlvError`], handy for matching and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidHexInput,
    UnexpectedEof,
    InvalidTag,
    InvalidLength,
    UnsupportedIndefiniteLength,
    MaxDepthExceeded,
    TrailingData,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl TlvError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TlvError::InvalidHexInput { .. } => ErrorKind::InvalidHexInput,
            TlvError::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            TlvError::InvalidTag { .. } => ErrorKind::InvalidTag,
            TlvError::InvalidLength { .. } => ErrorKind::InvalidLength,
            TlvError::UnsupportedIndefiniteLength { .. } => ErrorKind::UnsupportedIndefiniteLength,
            TlvError::MaxDepthExceeded { .. } => ErrorKind::MaxDepthExceeded,
            TlvError::TrailingData { .. } => ErrorKind::TrailingData,
        }
    }

    /// Get the byte offset of the failure
    ///
    /// Returns `None` for hex input errors, which happen before any byte
    /// exists to point at.
    pub fn offset(&self) -> Option<usize> {
        match self {
            TlvError::InvalidHexInput { .. } => None,
            TlvError::UnexpectedEof { offset, .. }
            | TlvError::InvalidTag { offset }
            | TlvError::InvalidLength { offset, .. }
            | TlvError::UnsupportedIndefiniteLength { offset }
            | TlvError::MaxDepthExceeded { offset, .. }
            | TlvError::TrailingData { offset, .. } => Some(*offset),
        }
    }
}

/// Result type alias for TLV operations
pub type TlvResult<T> = Result<T, TlvError>;
