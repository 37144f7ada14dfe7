//! Sentinel-terminated line buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the line content,
//! allowing the scanner to detect end of line without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary, which also provides safe padding for `peek()` near the end
//! of the line.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a single source line.
///
/// # Layout
///
/// ```text
/// [line_bytes..., 0x00, padding_zeros...]
///  ^              ^     ^
///  0              |     rounded up to 64-byte boundary
///              line_len (sentinel)
/// ```
///
/// The sentinel byte at `line_len` is always `0x00`. All subsequent bytes
/// are also `0x00`, so `peek()` never reads out of bounds.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    /// Owned buffer: `[line_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the line content (excludes sentinel and padding).
    line_len: u32,
}

impl LineBuffer {
    /// Copy `line` into a new sentinel-terminated buffer.
    ///
    /// Lines longer than `u32::MAX` bytes are truncated to `u32::MAX`;
    /// the tokenizer never sees the tail.
    pub fn new(line: &str) -> Self {
        let mut buffer = Self {
            buf: Vec::new(),
            line_len: 0,
        };
        buffer.reset(line);
        buffer
    }

    /// Replace the content with `line`, reusing the allocation.
    ///
    /// Hosts that scan a document line by line keep one buffer around
    /// instead of allocating per line.
    pub fn reset(&mut self, line: &str) {
        let line_len = u32::try_from(line.len()).unwrap_or(u32::MAX);
        let content = &line.as_bytes()[..line_len as usize];

        // Round up to next 64-byte boundary (minimum: line + 1 sentinel byte).
        let padded_len = (content.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        self.buf.clear();
        self.buf.resize(padded_len, 0);
        self.buf[..content.len()].copy_from_slice(content);
        self.line_len = line_len;
    }

    /// Returns the line bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.line_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.line_len)
    }

    /// Length of the line in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.line_len
    }

    /// Returns `true` if the line is empty.
    pub fn is_empty(&self) -> bool {
        self.line_len == 0
    }
}

#[cfg(test)]
mod tests;
