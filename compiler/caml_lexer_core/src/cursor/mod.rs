//! Byte cursor over a sentinel-terminated line.
//!
//! The cursor advances through the buffer byte-by-byte. End of line is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the line length. No explicit bounds checking is
//! performed in the common case: the sentinel guarantees termination.
//!
//! # NUL inside a line
//!
//! A null at `pos < line_len` is ordinary line content (the dispatcher
//! emits it as an unstyled character); a null at `pos >= line_len` is the
//! sentinel. [`Cursor::is_eol`] tells them apart.

/// Byte cursor over a sentinel-terminated line buffer.
///
/// Created via [`LineBuffer::cursor()`](crate::LineBuffer::cursor).
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
///
/// # Invariant
///
/// `buf[line_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`LineBuffer`](crate::LineBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (line + sentinel + padding).
    buf: &'a [u8],
    /// Read position, a byte offset into the line.
    pos: u32,
    /// Length of the line content (excludes sentinel and padding).
    line_len: u32,
}

// Fat slice pointer plus two u32 offsets.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Cursor at the first byte of `buf`, whose line ends at `line_len`.
    pub(crate) fn new(buf: &'a [u8], line_len: u32) -> Self {
        debug_assert!(
            (line_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[line_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            line_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of line).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte after the current one.
    ///
    /// Safe at any position up to the sentinel: the padding guarantees a
    /// readable byte after it.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte just before the current position, or `0x00` at the
    /// start of the line.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(p) => self.buf[p as usize],
            None => 0,
        }
    }

    /// Step over one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Step over `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Width of the UTF-8 sequence led by `byte`. Lines come from `&str`,
    /// so lead bytes are always well formed; anything that is not a
    /// multi-byte lead counts as one byte.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` once the cursor has consumed the whole line.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.current() == 0 && self.pos >= self.line_len
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the line (excludes sentinel and padding).
    #[inline]
    pub fn line_len(&self) -> u32 {
        self.line_len
    }

    /// Line bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.line_len,
            "slice end {end} exceeds line length {}",
            self.line_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Line bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Consume bytes for as long as `pred` accepts them.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop. Every
    /// byte class the scanner uses satisfies this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past blank bytes: space, tab, carriage return, vertical tab
    /// and form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_blank);
    }

    /// Advance to the next `"` or `\` and return it, or return `0` with the
    /// cursor at end of line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by line_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.line_len as usize];
        match memchr::memchr2(b'"', b'\\', remaining) {
            Some(off) => {
                self.pos += off as u32;
                self.current()
            }
            None => {
                self.pos = self.line_len;
                0
            }
        }
    }

    /// Advance to the next `|` and return it, or return `0` with the cursor
    /// at end of line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by line_len which fits in u32"
    )]
    pub fn skip_to_pipe(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.line_len as usize];
        match memchr::memchr(b'|', remaining) {
            Some(off) => {
                self.pos += off as u32;
                b'|'
            }
            None => {
                self.pos = self.line_len;
                0
            }
        }
    }

    /// Advance to the next `(` or `*` and return it, or return `0` with the
    /// cursor at end of line.
    ///
    /// These are the only bytes that can start a comment delimiter pair.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by line_len which fits in u32"
    )]
    pub fn skip_to_comment_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.line_len as usize];
        match memchr::memchr2(b'(', b'*', remaining) {
            Some(off) => {
                self.pos += off as u32;
                self.current()
            }
            None => {
                self.pos = self.line_len;
                0
            }
        }
    }
}

/// Blank bytes skipped before every dispatch. The sentinel is not blank.
///
/// ASCII only: U+00A0 (no-break space) is not blank and scans as a
/// one-character `Plain` span.
#[inline]
pub(crate) fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}
