//! Mode-switching line scanner producing `(Tag, len)` pairs.
//!
//! The scanner walks one line through a sentinel-terminated [`Cursor`] and
//! mutates the caller's [`ScanState`] in place, so a string, quoted string or
//! comment left open at the end of one line resumes on the next.
//!
//! # Design
//!
//! [`LineScanner::next_token`] splits off blank runs, then dispatches on
//! [`ScanState::mode`] to one of four scanners:
//!
//! - base: classifies one lexeme by its first byte
//! - string: `"..."` with backslash escapes
//! - raw string: `{|...|}`, no escapes
//! - comment: `(* ... *)` with nesting depth
//!
//! The base scanner switches mode when it sees an opening delimiter and hands
//! the rest of the call to the new scanner, so the opening delimiter and the
//! body on the same line form one span.

use crate::cursor::is_blank;
use crate::{words, Cursor, LineBuffer, Mode, ScanState, Tag, Token};

/// Tokenizer for one line.
///
/// Holds the caller's state by `&mut` for the duration of the line. Once
/// [`next_token`](Self::next_token) returns [`Tag::Eol`], the state is the
/// state before the next line.
pub struct LineScanner<'a, 's> {
    cursor: Cursor<'a>,
    state: &'s mut ScanState,
}

impl<'a, 's> LineScanner<'a, 's> {
    /// Create a scanner over `cursor`, resuming from `state`.
    pub fn new(cursor: Cursor<'a>, state: &'s mut ScanState) -> Self {
        Self { cursor, state }
    }

    /// Current state (reflects every token produced so far).
    pub fn state(&self) -> &ScanState {
        self.state
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns [`Token::EOL`] once the line is exhausted, and keeps
    /// returning it on later calls. Every other token is non-empty.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eol() => Token::EOL,
            b if is_blank(b) => {
                self.cursor.eat_whitespace();
                self.emit(start, Tag::Whitespace)
            }
            _ => match self.state.mode {
                Mode::Base => self.base(start),
                Mode::String => self.string(start),
                Mode::RawString => self.raw_string(start),
                Mode::Comment => self.comment(start),
            },
        }
    }

    #[inline]
    fn emit(&self, start: u32, tag: Tag) -> Token {
        Token::new(tag, self.cursor.pos() - start)
    }

    // ─── Base ──────────────────────────────────────────────────────

    fn base(&mut self, start: u32) -> Token {
        let first = self.cursor.current();
        self.cursor.advance_char();

        match first {
            b';' if self.cursor.current() == b';' => {
                self.cursor.advance();
                self.state.at_line_start = true;
                self.emit(start, Tag::Plain)
            }
            b'"' => {
                self.state.mode = Mode::String;
                self.state.at_line_start = false;
                self.string(start)
            }
            b'{' if self.cursor.current() == b'|' => {
                self.cursor.advance();
                self.state.mode = Mode::RawString;
                self.state.at_line_start = false;
                self.raw_string(start)
            }
            b'(' if self.cursor.current() == b'*' => {
                self.cursor.advance();
                self.state.comment_depth = self.state.comment_depth.saturating_add(1);
                self.state.mode = Mode::Comment;
                self.comment(start)
            }
            b'`' | b'A'..=b'Z' => {
                self.cursor.eat_while(is_ident_continue);
                self.state.at_line_start = false;
                self.emit(start, Tag::Constructor)
            }
            b'a'..=b'z' | b'_' => self.lower_ident(start),
            b'0'..=b'9' => self.number(start, first),
            b'#' if self.state.at_line_start && is_word(self.cursor.current()) => {
                self.cursor.eat_while(is_word);
                self.state.at_line_start = false;
                self.emit(start, Tag::Atom)
            }
            b if is_operator_start(b) => {
                self.cursor.eat_while(is_operator_continue);
                self.state.at_line_start = false;
                self.emit(start, Tag::Operator)
            }
            // Lone `;`, brackets, commas, stray non-ASCII and the like.
            _ => self.emit(start, Tag::Plain),
        }
    }

    fn lower_ident(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_continue);
        self.state.at_line_start = false;
        let tag = words::lookup(self.cursor.slice_from(start)).unwrap_or(Tag::Variable);
        self.emit(start, tag)
    }

    /// Digits, word characters, an optional fraction and an optional signed
    /// exponent. Nothing is validated: `0x1A`, `1_000` and `1e-` all scan
    /// as one number.
    fn number(&mut self, start: u32, first: u8) -> Token {
        let is_hex = first == b'0' && matches!(self.cursor.current(), b'x' | b'X');

        self.cursor.eat_while(is_word);
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(is_word);
        }

        // `e`/`E` was swallowed as a word character; pick up the sign and
        // exponent digits after it. In hex literals `E` is a digit and a
        // following sign is a real operator.
        if !is_hex
            && matches!(self.cursor.prev(), b'e' | b'E')
            && matches!(self.cursor.current(), b'+' | b'-')
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }

        self.state.at_line_start = false;
        self.emit(start, Tag::Number)
    }

    // ─── String ────────────────────────────────────────────────────

    /// Scan to the closing `"`, or to end of line with the string left open.
    ///
    /// Escape tracking restarts on every call: a backslash at the very end
    /// of a line escapes nothing on the next one.
    fn string(&mut self, start: u32) -> Token {
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    self.state.mode = Mode::Base;
                    return self.emit(start, Tag::String);
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eol() {
                        self.cursor.advance();
                    }
                }
                _ => return self.emit(start, Tag::String),
            }
        }
    }

    // ─── Raw String ────────────────────────────────────────────────

    /// Scan to `|}`, or to end of line with the quoted string left open.
    ///
    /// The `|` must be consumed within this call: a line ending in `|`
    /// followed by a line starting with `}` does not close the string.
    fn raw_string(&mut self, start: u32) -> Token {
        while self.cursor.skip_to_pipe() == b'|' {
            self.cursor.advance();
            if self.cursor.current() == b'}' {
                self.cursor.advance();
                self.state.mode = Mode::Base;
                break;
            }
        }
        self.emit(start, Tag::String)
    }

    // ─── Comment ───────────────────────────────────────────────────

    /// Scan while `comment_depth > 0`, counting `(*` and `*)` pairs.
    ///
    /// Pairs may share a byte: the `*` of an opening `(*` can also start a
    /// closing `*)`, so `(*)` inside a comment opens and closes a level.
    /// Pair tracking restarts on every call, so the `*` of an opening
    /// delimiter consumed by the base scanner never pairs with a following
    /// `)`.
    fn comment(&mut self, start: u32) -> Token {
        while self.state.comment_depth > 0 {
            match self.cursor.skip_to_comment_delim() {
                b'(' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'*' {
                        // Leave the `*` unconsumed; it may start `*)`.
                        self.state.comment_depth = self.state.comment_depth.saturating_add(1);
                    }
                }
                b'*' => {
                    self.cursor.advance();
                    if self.cursor.current() == b')' {
                        self.cursor.advance();
                        self.state.comment_depth -= 1;
                    }
                }
                _ => break,
            }
        }
        if self.state.comment_depth == 0 {
            self.state.mode = Mode::Base;
        }
        self.emit(start, Tag::Comment)
    }
}

impl Iterator for LineScanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.tag == Tag::Eol {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes: word bytes plus
/// the apostrophe. The sentinel byte (0x00) maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'\''
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// `[A-Za-z0-9_]`, the body of numbers and directives.
#[inline]
fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_operator_start(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$'
            | b'%'
            | b'&'
            | b'*'
            | b'+'
            | b'-'
            | b'/'
            | b'~'
            | b'?'
            | b'<'
            | b'='
            | b'>'
            | b'|'
            | b'@'
            | b'^'
            | b'#'
    )
}

#[inline]
fn is_operator_continue(b: u8) -> bool {
    is_operator_start(b) || b == b':' || b == b'.'
}

/// Convenience function: tokenize one line, resuming from and updating
/// `state`.
///
/// Returns every token except the final `Eol`. Hosts scanning many lines
/// should keep one [`LineBuffer`] and drive a [`LineScanner`] directly.
pub fn tokenize_line(line: &str, state: &mut ScanState) -> Vec<Token> {
    let buf = LineBuffer::new(line);
    LineScanner::new(buf.cursor(), state).collect()
}
