use super::*;

// === Construction ===

#[test]
fn empty_line() {
    let buf = LineBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_line() {
    let buf = LineBuffer::new("let x");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"let x");
    assert_eq!(buf.as_sentinel_bytes()[5], 0);
}

#[test]
fn utf8_multibyte_line() {
    let line = "(* caf\u{e9} \u{1F42B} *)";
    let buf = LineBuffer::new(line);
    assert_eq!(buf.len() as usize, line.len());
    assert_eq!(buf.as_bytes(), line.as_bytes());
}

// === Padding ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let line = "x".repeat(len);
        let buf = LineBuffer::new(&line);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for line length {}",
            buf.as_sentinel_bytes().len(),
            len
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = LineBuffer::new("abc");
    for &b in &buf.as_sentinel_bytes()[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

#[test]
fn exact_cache_line_gets_extra_line_for_sentinel() {
    let line = "y".repeat(64);
    let buf = LineBuffer::new(&line);
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
    assert_eq!(buf.as_sentinel_bytes()[64], 0);
}

// === Reuse ===

#[test]
fn reset_replaces_content() {
    let mut buf = LineBuffer::new("a much longer first line of text");
    buf.reset("short");
    assert_eq!(buf.as_bytes(), b"short");
    assert_eq!(buf.len(), 5);
    // Stale bytes from the longer line must not survive past the sentinel.
    for &b in &buf.as_sentinel_bytes()[5..] {
        assert_eq!(b, 0);
    }
}

#[test]
fn reset_to_empty() {
    let mut buf = LineBuffer::new("let");
    buf.reset("");
    assert!(buf.is_empty());
    assert!(buf.cursor().is_eol());
}

#[test]
fn cursor_starts_at_zero() {
    let buf = LineBuffer::new("open");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.line_len(), 4);
    assert_eq!(cursor.current(), b'o');
}
