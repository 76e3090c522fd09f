//! Bounded read cursor over an immutable byte buffer

use emv_core::{TlvError, TlvResult};

/// Read cursor over a borrowed byte buffer
///
/// # Position Tracking
///
/// The cursor keeps a local read position plus a base offset. A cursor made
/// with [`ByteCursor::sub_cursor`] covers only a value region, but the
/// offsets it reports stay absolute within the original input, so errors
/// raised deep inside nested objects point at the right byte.
///
/// The cursor is `Copy`: cloning it is how the decoder probes ahead without
/// committing.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    position: usize,
    base: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `buffer`
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_base(buffer, 0)
    }

    /// Create a cursor whose first byte sits at absolute offset `base`
    pub fn with_base(buffer: &'a [u8], base: usize) -> Self {
        Self {
            buffer,
            position: 0,
            base,
        }
    }

    /// Absolute offset of the next byte to be read
    pub fn position(&self) -> usize {
        self.base + self.position
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Check if every byte has been read
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Return the next byte without advancing
    pub fn peek(&self) -> TlvResult<u8> {
        self.buffer
            .get(self.position)
            .copied()
            .ok_or_else(|| self.eof(1))
    }

    /// Read the next byte, advancing by one
    pub fn read_byte(&mut self) -> TlvResult<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Ok(byte)
    }

    /// Read the next `count` bytes as a slice, advancing by `count`
    ///
    /// # Error Handling
    /// Returns `UnexpectedEof` (and leaves the cursor untouched) if fewer than
    /// `count` bytes remain.
    pub fn read_n(&mut self, count: usize) -> TlvResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(self.eof(count));
        }
        let start = self.position;
        self.position += count;
        Ok(&self.buffer[start..start + count])
    }

    /// Split off a cursor over the next `count` bytes and advance past them
    pub fn sub_cursor(&mut self, count: usize) -> TlvResult<ByteCursor<'a>> {
        let base = self.position();
        let region = self.read_n(count)?;
        Ok(ByteCursor::with_base(region, base))
    }

    fn eof(&self, needed: usize) -> TlvError {
        TlvError::UnexpectedEof {
            offset: self.position(),
            needed,
            available: self.remaining(),
        }
    }
}
