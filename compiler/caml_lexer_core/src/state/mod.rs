//! Scan state carried between lines.

/// Which scanner handles the next non-blank byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Ordinary code: the base dispatcher.
    #[default]
    Base,
    /// Inside a `"..."` literal.
    String,
    /// Inside a `{|...|}` quoted string.
    RawString,
    /// Inside one or more nested `(* ... *)` comments.
    Comment,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::String => "string",
            Self::RawString => "raw-string",
            Self::Comment => "comment",
        }
    }
}

/// Everything the tokenizer remembers from one line to the next.
///
/// One value per document, threaded through every line in order. The state
/// is `Copy` and `Eq`, so a host can store the state before each line and
/// resume (or stop re-scanning) by comparing them.
///
/// # Invariant
///
/// After any completed scan call, `mode == Mode::Comment` iff
/// `comment_depth > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanState {
    /// Active scanner.
    pub mode: Mode,
    /// Number of currently open nested block comments.
    pub comment_depth: u32,
    /// Whether a `#` directive may start here: true at the start of the
    /// document and after `;;`, false once another token is consumed.
    pub at_line_start: bool,
}

impl ScanState {
    /// State at the start of a document.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Base,
            comment_depth: 0,
            at_line_start: true,
        }
    }

    /// Returns `true` if a string, quoted string or comment is still open.
    pub const fn is_open(&self) -> bool {
        !matches!(self.mode, Mode::Base)
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
