//! `highlight`: the source re-emitted with ANSI styling.

use caml_mode::Highlighter;

use crate::theme::Theme;

/// Render `text` with each span painted by `theme`.
///
/// The output reproduces the input byte for byte once escape sequences are
/// stripped. Adjacent spans with the same style share one escape sequence.
pub fn render_highlight(text: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut hl = Highlighter::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for span in hl.highlight_line_merged(line) {
            theme.paint(span.tag, span.text(line), &mut out);
        }
    }
    if hl.state().is_open() {
        tracing::debug!(mode = hl.state().mode.name(), "input ends inside an open construct");
    }
    out
}
