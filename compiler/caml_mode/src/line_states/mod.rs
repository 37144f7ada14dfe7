//! Per-line scan state cache for incremental re-highlighting.
//!
//! The cache stores the [`ScanState`] in effect before every line of a
//! document, plus the state after the last line. After an edit only the
//! changed lines and the lines whose entry state changed as a consequence
//! need to be scanned again: scanning stops at the first line whose exit
//! state matches what the cache already holds for the next line.
//!
//! Entries whose state is unknown (lines inside an edited region) are
//! `None` and never satisfy the stop test.

use caml_lexer_core::{LineBuffer, LineScanner, ScanState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineStates {
    /// `entries[i]` is the state before line `i`; the last entry is the
    /// state after the final line.
    entries: Vec<Option<ScanState>>,
}

impl Default for LineStates {
    fn default() -> Self {
        Self::new()
    }
}

impl LineStates {
    /// Cache for an empty document.
    pub fn new() -> Self {
        Self {
            entries: vec![Some(ScanState::new())],
        }
    }

    /// Scan a whole document.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut states = Self::new();
        states.rescan(lines, 0);
        states
    }

    /// Number of lines the cache covers.
    pub fn line_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// State in effect at the start of `line`, if known.
    pub fn before(&self, line: usize) -> Option<ScanState> {
        self.entries.get(line).copied().flatten()
    }

    /// State left behind by `line`, if known.
    pub fn after(&self, line: usize) -> Option<ScanState> {
        self.before(line.checked_add(1)?)
    }

    /// Record that `removed` lines starting at `at` were replaced by
    /// `inserted` new lines. Changing a single line in place needs no call.
    ///
    /// Entry states inside the replaced region become unknown and later
    /// entries shift to stay aligned with their lines. The old entry state of
    /// the first untouched line is kept as the stop target for the next
    /// [`rescan`](Self::rescan), which should start at `at`.
    pub fn edit(&mut self, at: usize, removed: usize, inserted: usize) {
        let at = at.min(self.line_count());
        let end = at.saturating_add(removed).min(self.line_count());
        let target = self.entries[end];
        let tail = self.entries.split_off(end + 1);
        self.entries.truncate(at + 1);
        if inserted > 0 {
            self.entries.resize(at + inserted, None);
            self.entries.push(target);
        }
        self.entries.extend(tail);
    }

    /// Re-scan `lines` starting at line `from` and return how many lines
    /// were scanned.
    ///
    /// `lines` is the whole current document. Lines before `from` must be
    /// unchanged since they were last scanned. Scanning resumes from the
    /// nearest known entry state at or before `from` and stops after the
    /// first line whose exit state equals the cached entry state of the
    /// next line; everything past that point is already correct.
    pub fn rescan<S: AsRef<str>>(&mut self, lines: &[S], from: usize) -> usize {
        self.entries.resize(lines.len() + 1, None);

        let mut first = from.min(lines.len());
        while first > 0 && self.entries[first].is_none() {
            first -= 1;
        }
        let mut state = self.entries[first].unwrap_or_default();

        let mut buffer = LineBuffer::new("");
        let mut rescanned = 0;
        for (index, line) in lines.iter().enumerate().skip(first) {
            buffer.reset(line.as_ref());
            LineScanner::new(buffer.cursor(), &mut state).for_each(|_| ());
            rescanned += 1;

            let next = &mut self.entries[index + 1];
            if *next == Some(state) {
                break;
            }
            *next = Some(state);
        }

        tracing::debug!(
            from,
            resumed_at = first,
            rescanned,
            lines = lines.len(),
            "rescanned line states"
        );
        rescanned
    }
}
