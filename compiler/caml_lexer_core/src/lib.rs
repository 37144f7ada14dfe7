//! Resumable line tokenizer for OCaml syntax highlighting.
//!
//! The tokenizer is fed one line at a time. Everything it needs to resume in
//! the middle of a string, a quoted string or a nested comment on the next
//! line lives in a [`ScanState`] owned by the caller:
//!
//! ```
//! use caml_lexer_core::{tokenize_line, Mode, ScanState, Tag};
//!
//! let mut state = ScanState::new();
//! let first = tokenize_line("(* start", &mut state);
//! assert_eq!(first[0].tag, Tag::Comment);
//! assert_eq!(state.mode, Mode::Comment);
//!
//! let second = tokenize_line("end *) let", &mut state);
//! assert_eq!(second[0].tag, Tag::Comment);
//! assert_eq!(state.mode, Mode::Base);
//! ```
//!
//! # Layers
//!
//! - [`LineBuffer`]: sentinel-terminated copy of one line
//! - [`Cursor`]: byte cursor over a `LineBuffer`
//! - [`LineScanner`]: mode dispatcher producing `(Tag, len)` pairs
//! - [`words`]: the fixed keyword/operator/builtin/atom table
//!
//! No allocation happens while scanning, and nothing here can fail:
//! malformed input degrades into [`Tag::Plain`] or into a mode that stays
//! open until the next line.

mod cursor;
mod line_buffer;
mod scanner;
mod state;
mod tag;
pub mod words;

pub use cursor::Cursor;
pub use line_buffer::LineBuffer;
pub use scanner::{tokenize_line, LineScanner};
pub use state::{Mode, ScanState};
pub use tag::{Tag, Token};
