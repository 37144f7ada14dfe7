//! Line driver: turns raw `(Tag, len)` tokens into positioned spans.
//!
//! A [`Highlighter`] owns the scan state and a reusable line buffer, so a
//! host feeding a document top to bottom allocates nothing per line beyond
//! the returned span list.

use caml_lexer_core::{LineBuffer, LineScanner, ScanState, Tag};

/// One token placed on its line. Offsets are byte offsets into the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyledSpan {
    pub start: u32,
    pub end: u32,
    pub tag: Tag,
}

impl StyledSpan {
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Style label the editor applies, or `None` for unstyled text.
    #[inline]
    pub const fn label(&self) -> Option<&'static str> {
        self.tag.label()
    }

    /// The covered slice of `line`.
    ///
    /// Returns an empty string if the span does not fall on char
    /// boundaries of `line`, which only happens for a mismatched line.
    pub fn text<'l>(&self, line: &'l str) -> &'l str {
        line.get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}

/// Sequential highlighter for one document.
#[derive(Clone, Debug)]
pub struct Highlighter {
    state: ScanState,
    buffer: LineBuffer,
    lines: u64,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Start at the top of a document.
    pub fn new() -> Self {
        Self::resume(ScanState::new())
    }

    /// Continue from a state saved at a line boundary.
    pub fn resume(state: ScanState) -> Self {
        Self {
            state,
            buffer: LineBuffer::new(""),
            lines: 0,
        }
    }

    /// The state carried into the next line.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Number of lines highlighted since construction or the last reset.
    #[inline]
    pub fn lines_seen(&self) -> u64 {
        self.lines
    }

    /// Return to the start-of-document state.
    pub fn reset(&mut self) {
        self.state = ScanState::new();
        self.lines = 0;
    }

    /// Highlight one line and advance the carried state.
    ///
    /// The spans tile the line: they are contiguous, start at 0 and end at
    /// the line length.
    pub fn highlight_line(&mut self, line: &str) -> Vec<StyledSpan> {
        self.buffer.reset(line);
        let entry = self.state;
        let mut spans = Vec::new();
        let mut pos = 0u32;
        for token in LineScanner::new(self.buffer.cursor(), &mut self.state) {
            let end = pos + token.len;
            spans.push(StyledSpan {
                start: pos,
                end,
                tag: token.tag,
            });
            pos = end;
        }
        self.lines += 1;
        if entry != self.state {
            tracing::trace!(
                line = self.lines,
                from = entry.mode.name(),
                to = self.state.mode.name(),
                depth = self.state.comment_depth,
                "scan state changed"
            );
        }
        spans
    }

    /// Like [`highlight_line`](Self::highlight_line), merging adjacent spans
    /// that carry the same style label.
    ///
    /// Unstyled tokens (whitespace, punctuation) merge with each other.
    pub fn highlight_line_merged(&mut self, line: &str) -> Vec<StyledSpan> {
        merge_spans(self.highlight_line(line))
    }
}

/// Merge neighbours whose tags render identically.
///
/// Keeps the first tag of each merged run.
pub fn merge_spans(spans: Vec<StyledSpan>) -> Vec<StyledSpan> {
    let mut out: Vec<StyledSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match out.last_mut() {
            Some(last) if last.label() == span.label() && last.end == span.start => {
                last.end = span.end;
            }
            _ => out.push(span),
        }
    }
    out
}

/// Highlight every line of `text` from a fresh state.
///
/// Lines are split on `\n`; a trailing `\r` stays part of its line and
/// scans as whitespace.
pub fn highlight_document(text: &str) -> Vec<Vec<StyledSpan>> {
    let mut highlighter = Highlighter::new();
    let lines: Vec<_> = text
        .split('\n')
        .map(|line| highlighter.highlight_line(line))
        .collect();
    tracing::debug!(
        lines = lines.len(),
        open = highlighter.state().is_open(),
        "highlighted document"
    );
    lines
}

#[cfg(test)]
mod tests;
