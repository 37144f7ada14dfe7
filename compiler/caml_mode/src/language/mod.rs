//! Static description of the OCaml editor mode.
//!
//! This is what a host editor reads once when it registers the mode: how
//! comments are delimited (for comment-toggling commands), which MIME type
//! selects the mode, and which notebook kernel languages it applies to.

/// Metadata a host editor needs to register a language mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageMode {
    /// Mode name as registered with the editor.
    pub name: &'static str,
    /// MIME type associated with the mode.
    pub mime: &'static str,
    /// Block comment delimiters `(open, close)`.
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Line comment marker. OCaml has none.
    pub line_comment: Option<&'static str>,
}

/// The OCaml mode.
pub const OCAML: LanguageMode = LanguageMode {
    name: "ocaml",
    mime: "text/x-ocaml",
    block_comment: Some(("(*", "*)")),
    line_comment: None,
};

impl LanguageMode {
    /// Returns `true` if a notebook kernel reporting `language` should use
    /// this mode. Comparison ignores ASCII case (`OCaml`, `ocaml`).
    pub fn matches_language(&self, language: &str) -> bool {
        language.trim().eq_ignore_ascii_case(self.name)
    }

    /// Wrap `text` in this mode's block comment delimiters.
    ///
    /// Returns `None` for modes without block comments.
    pub fn comment_out(&self, text: &str) -> Option<String> {
        let (open, close) = self.block_comment?;
        Some(format!("{open} {text} {close}"))
    }
}

/// Resolve a MIME type to its mode. Parameters after `;` are ignored.
pub fn for_mime(mime: &str) -> Option<&'static LanguageMode> {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case(OCAML.mime) {
        Some(&OCAML)
    } else {
        None
    }
}
