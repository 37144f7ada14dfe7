//! `tokens`: one line per token with its position and tag.

use std::fmt::Write;

use caml_mode::{Highlighter, Tag};

/// Options for the token dump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenOptions {
    /// Also list whitespace tokens.
    pub whitespace: bool,
}

/// Dump every token of `text` as `line:start-end tag "text"`.
///
/// Lines are 1-based; columns are 0-based byte offsets with an exclusive
/// end. A line that leaves a different mode or comment depth behind is
/// followed by a `line: -> mode(depth)` entry, e.g. `3: -> comment(1)`.
pub fn render_tokens(text: &str, options: TokenOptions) -> String {
    let mut out = String::new();
    let mut hl = Highlighter::new();
    for (index, line) in text.split('\n').enumerate() {
        let before = hl.state();
        let spans = hl.highlight_line(line);
        for span in &spans {
            if span.tag == Tag::Whitespace && !options.whitespace {
                continue;
            }
            let _ = writeln!(
                out,
                "{}:{}-{} {} {:?}",
                index + 1,
                span.start,
                span.end,
                span.tag.name(),
                span.text(line),
            );
        }
        let after = hl.state();
        if after.mode != before.mode || after.comment_depth != before.comment_depth {
            let _ = writeln!(
                out,
                "{}: -> {}({})",
                index + 1,
                after.mode.name(),
                after.comment_depth
            );
        }
    }
    out
}
