//! Terminal theme: style labels to ANSI SGR sequences.

use caml_mode::Tag;

/// ANSI escape sequences used by the built-in themes.
mod colors {
    pub const KEYWORD: &str = "\x1b[1;35m"; // Bold magenta
    pub const OPERATOR: &str = "\x1b[33m"; // Yellow
    pub const BUILTIN: &str = "\x1b[36m"; // Cyan
    pub const ATOM: &str = "\x1b[1;34m"; // Bold blue
    pub const CONSTRUCTOR: &str = "\x1b[34m"; // Blue
    pub const NUMBER: &str = "\x1b[32m"; // Green
    pub const STRING: &str = "\x1b[31m"; // Red
    pub const COMMENT: &str = "\x1b[2;3m"; // Dim italic
    pub const RESET: &str = "\x1b[0m";
}

/// Whether to emit escape sequences at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a `--color` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Mapping from style label (as produced by [`Tag::label`]) to an SGR
/// sequence. Labels without an entry render unstyled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    styles: &'static [(&'static str, &'static str)],
}

impl Theme {
    /// Built-in theme for dark and light terminals alike.
    pub const DEFAULT: Theme = Theme {
        styles: &[
            ("keyword", colors::KEYWORD),
            ("operator", colors::OPERATOR),
            ("builtin", colors::BUILTIN),
            ("atom", colors::ATOM),
            ("variable-2", colors::CONSTRUCTOR),
            ("number", colors::NUMBER),
            ("string", colors::STRING),
            ("comment", colors::COMMENT),
        ],
    };

    /// Theme that styles nothing.
    pub const MONOCHROME: Theme = Theme { styles: &[] };

    /// SGR sequence for a style label.
    pub fn style_for_label(&self, label: &str) -> Option<&'static str> {
        self.styles
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, sgr)| sgr)
    }

    /// SGR sequence for a tag, or `None` if it renders unstyled.
    pub fn style(&self, tag: Tag) -> Option<&'static str> {
        self.style_for_label(tag.label()?)
    }

    /// Append `text` to `out`, wrapped in the tag's style if it has one.
    pub fn paint(&self, tag: Tag, text: &str, out: &mut String) {
        match self.style(tag) {
            Some(sgr) => {
                out.push_str(sgr);
                out.push_str(text);
                out.push_str(colors::RESET);
            }
            None => out.push_str(text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests;
