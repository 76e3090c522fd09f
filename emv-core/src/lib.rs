//! Core types and utilities for the EMV TLV parser
//!
//! This crate provides the error taxonomy shared by every decoding stage and
//! the conversion of user supplied hex strings into raw bytes.

pub mod error;
pub mod hex_input;

pub use error::{ErrorKind, TlvError, TlvResult};
pub use hex_input::decode_hex;
