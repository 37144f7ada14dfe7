//! OCaml editor mode built on [`caml_lexer_core`].
//!
//! Where the core crate knows how to split a single line into tagged
//! tokens, this crate is what an editor host attaches to a document:
//!
//! - [`language`]: mode registration metadata (name, MIME, comment syntax)
//! - [`config`]: editor defaults applied when the mode attaches
//! - [`driver`]: positioned spans per line with the scan state carried along
//! - [`line_states`]: per-line state cache for re-highlighting after edits
//!
//! ```
//! use caml_mode::driver::Highlighter;
//! use caml_mode::Tag;
//!
//! let mut hl = Highlighter::new();
//! let spans = hl.highlight_line("let answer = 42");
//! assert_eq!(spans[0].tag, Tag::Keyword);
//! assert_eq!(spans.last().map(|s| s.tag), Some(Tag::Number));
//! ```

pub mod config;
pub mod driver;
pub mod language;
pub mod line_states;

pub use caml_lexer_core::{Mode, ScanState, Tag};
pub use config::{ConfigError, EditorConfig, EditorDefaults};
pub use driver::{highlight_document, Highlighter, StyledSpan};
pub use language::{LanguageMode, OCAML};
pub use line_states::LineStates;
