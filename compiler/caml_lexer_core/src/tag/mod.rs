//! Token categories and the `(tag, len)` token pair.

/// Category of a scanned span.
///
/// One byte, grouped by range:
/// - 0-8: styled categories (the ones an editor theme colors)
/// - 16-17: unstyled spans
/// - 255: end of line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Styled: 0-8 ===
    /// Reserved word (`let`, `match`, `struct`, ...).
    Keyword = 0,
    /// Symbolic operator run, or a word operator like `land`.
    Operator = 1,
    /// Standard library function treated specially (`raise`, `failwith`, ...).
    Builtin = 2,
    /// `true`, `false`, and toplevel `#` directives.
    Atom = 3,
    /// Lowercase identifier not in the word table.
    Variable = 4,
    /// Constructor, module name, or polymorphic variant tag.
    Constructor = 5,
    /// Numeric literal.
    Number = 6,
    /// String or quoted-string literal, including delimiters.
    String = 7,
    /// Block comment, including delimiters.
    Comment = 8,

    // === Unstyled: 16-17 ===
    /// Run of blank bytes.
    Whitespace = 16,
    /// `;;` or an unrecognized character.
    Plain = 17,

    // === Control: 255 ===
    /// End of line. Always zero width.
    Eol = 255,
}

impl Tag {
    /// Style label handed to the editor, or `None` for unstyled spans.
    ///
    /// Constructors use the `variable-2` label so themes can color them
    /// apart from plain variables.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Keyword => Some("keyword"),
            Self::Operator => Some("operator"),
            Self::Builtin => Some("builtin"),
            Self::Atom => Some("atom"),
            Self::Variable => Some("variable"),
            Self::Constructor => Some("variable-2"),
            Self::Number => Some("number"),
            Self::String => Some("string"),
            Self::Comment => Some("comment"),
            Self::Whitespace | Self::Plain | Self::Eol => None,
        }
    }

    /// Human-readable name for token dumps and debug output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Operator => "operator",
            Self::Builtin => "builtin",
            Self::Atom => "atom",
            Self::Variable => "variable",
            Self::Constructor => "constructor",
            Self::Number => "number",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Whitespace => "whitespace",
            Self::Plain => "plain",
            Self::Eol => "eol",
        }
    }

    /// Returns `true` if the tag carries a style label.
    pub const fn is_styled(self) -> bool {
        self.label().is_some()
    }
}

/// A scanned span: category plus byte length.
///
/// Tokens carry no position; the caller accumulates lengths. Lengths of all
/// tokens on a line sum to the line length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub tag: Tag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<Token>() <= 8);

impl Token {
    /// Zero-width end-of-line token.
    pub const EOL: Token = Token {
        tag: Tag::Eol,
        len: 0,
    };

    pub const fn new(tag: Tag, len: u32) -> Self {
        Self { tag, len }
    }
}
