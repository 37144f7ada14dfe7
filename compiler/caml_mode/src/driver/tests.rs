use super::*;
use caml_lexer_core::Mode;
use pretty_assertions::assert_eq;

fn span(start: u32, end: u32, tag: Tag) -> StyledSpan {
    StyledSpan { start, end, tag }
}

fn texts<'l>(line: &'l str, spans: &[StyledSpan]) -> Vec<(Tag, &'l str)> {
    spans.iter().map(|s| (s.tag, s.text(line))).collect()
}

fn assert_tiles(line: &str, spans: &[StyledSpan]) {
    let mut pos = 0;
    for span in spans {
        assert_eq!(span.start, pos, "gap before {span:?} in {line:?}");
        assert!(!span.is_empty(), "empty span {span:?} in {line:?}");
        pos = span.end;
    }
    assert_eq!(pos as usize, line.len());
}

// === Spans ===

#[test]
fn spans_carry_offsets() {
    let mut hl = Highlighter::new();
    let spans = hl.highlight_line("let x = 1");
    assert_eq!(
        spans,
        vec![
            span(0, 3, Tag::Keyword),
            span(3, 4, Tag::Whitespace),
            span(4, 5, Tag::Variable),
            span(5, 6, Tag::Whitespace),
            span(6, 7, Tag::Operator),
            span(7, 8, Tag::Whitespace),
            span(8, 9, Tag::Number),
        ]
    );
    assert_tiles("let x = 1", &spans);
}

#[test]
fn empty_line_has_no_spans() {
    let mut hl = Highlighter::new();
    assert!(hl.highlight_line("").is_empty());
    assert_eq!(hl.lines_seen(), 1);
}

#[test]
fn span_accessors() {
    let span = StyledSpan {
        start: 2,
        end: 5,
        tag: Tag::Constructor,
    };
    assert_eq!(span.len(), 3);
    assert_eq!(span.label(), Some("variable-2"));
    assert_eq!(span.text("| Some x"), "Som");
    assert_eq!(span.text("ab"), "");
}

#[test]
fn multibyte_text_tiles() {
    let line = "let s = \"h\u{e9}llo\" (* \u{2192} *)";
    let mut hl = Highlighter::new();
    let spans = hl.highlight_line(line);
    assert_tiles(line, &spans);
    let tagged = texts(line, &spans);
    assert_eq!(tagged[6], (Tag::String, "\"h\u{e9}llo\""));
    assert_eq!(tagged[8], (Tag::Comment, "(* \u{2192} *)"));
}

// === State carry ===

#[test]
fn state_carries_across_lines() {
    let mut hl = Highlighter::new();
    hl.highlight_line("let s = \"abc");
    assert_eq!(hl.state().mode, Mode::String);

    let second = "def\" in s";
    let spans = hl.highlight_line(second);
    assert_eq!(
        texts(second, &spans),
        vec![
            (Tag::String, "def\""),
            (Tag::Whitespace, " "),
            (Tag::Keyword, "in"),
            (Tag::Whitespace, " "),
            (Tag::Variable, "s"),
        ]
    );
    assert_eq!(hl.state().mode, Mode::Base);
    assert_eq!(hl.lines_seen(), 2);
}

#[test]
fn resume_from_saved_state() {
    let mut first = Highlighter::new();
    first.highlight_line("(* one (* two");
    let saved = first.state();
    assert_eq!(saved.comment_depth, 2);

    let mut resumed = Highlighter::resume(saved);
    let a = first.highlight_line("*) still *) x");
    let b = resumed.highlight_line("*) still *) x");
    assert_eq!(a, b);
    assert_eq!(first.state(), resumed.state());
}

#[test]
fn reset_returns_to_document_start() {
    let mut hl = Highlighter::new();
    hl.highlight_line("{| raw");
    assert_eq!(hl.state().mode, Mode::RawString);
    hl.reset();
    assert_eq!(hl.state(), ScanState::new());
    assert_eq!(hl.lines_seen(), 0);
    let spans = hl.highlight_line("x");
    assert_eq!(spans[0].tag, Tag::Variable);
}

#[test]
fn buffer_reuse_does_not_leak_previous_line() {
    let mut hl = Highlighter::new();
    hl.highlight_line("a_very_long_identifier_that_fills_the_buffer");
    let spans = hl.highlight_line("ab");
    assert_eq!(spans, vec![span(0, 2, Tag::Variable)]);
}

// === Merging ===

#[test]
fn merge_joins_same_label() {
    let line = "x ; y";
    let mut hl = Highlighter::new();
    let merged = hl.highlight_line_merged(line);
    assert_eq!(
        texts(line, &merged),
        vec![
            (Tag::Variable, "x"),
            (Tag::Whitespace, " ; "),
            (Tag::Variable, "y"),
        ]
    );
    assert_tiles(line, &merged);
}

#[test]
fn merge_keeps_distinct_labels() {
    let spans = vec![span(0, 1, Tag::Keyword), span(1, 2, Tag::Operator)];
    assert_eq!(merge_spans(spans.clone()), spans);
}

#[test]
fn merge_of_nothing() {
    assert!(merge_spans(Vec::new()).is_empty());
}

// === Documents ===

#[test]
fn document_lines() {
    let doc = "let rec f = function\n  | [] -> 0 (* base\n     case *)\n  | _ :: t -> 1 + f t";
    let lines = highlight_document(doc);
    assert_eq!(lines.len(), 4);
    for (line, spans) in doc.split('\n').zip(&lines) {
        assert_tiles(line, spans);
    }
    let third = doc.split('\n').nth(2).unwrap_or_default();
    assert_eq!(
        texts(third, &lines[2]),
        vec![(Tag::Whitespace, "     "), (Tag::Comment, "case *)")]
    );
}

#[test]
fn document_with_trailing_newline() {
    let lines = highlight_document("x\n");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].is_empty());
}

#[test]
fn crlf_line_endings_scan_as_whitespace() {
    let lines = highlight_document("x\r\ny");
    assert_eq!(
        lines[0],
        vec![span(0, 1, Tag::Variable), span(1, 2, Tag::Whitespace)]
    );
}
