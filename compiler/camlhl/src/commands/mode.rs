//! `mode`: language metadata and the effective editor configuration.

use std::fmt::Write;

use caml_mode::{EditorConfig, EditorDefaults, OCAML};

/// Inputs for the `mode` report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModeOptions {
    /// Options set explicitly with `--set`, before defaults are applied.
    pub config: EditorConfig,
    /// Notebook kernel language to attach to. `None` attaches
    /// unconditionally.
    pub kernel: Option<String>,
}

/// Describe the OCaml mode and the configuration an editor would end up
/// with.
///
/// Defaults are only applied when the mode attaches, i.e. when no kernel is
/// given or the kernel's language is OCaml.
pub fn render_mode(options: &ModeOptions) -> String {
    let mut config = options.config;
    let attached = options
        .kernel
        .as_deref()
        .is_none_or(|language| OCAML.matches_language(language));
    if attached {
        config.apply_defaults(&EditorDefaults::OCAML);
    }

    let mut out = String::new();
    let _ = writeln!(out, "mode:          {}", OCAML.name);
    let _ = writeln!(out, "mime:          {}", OCAML.mime);
    match OCAML.block_comment {
        Some((open, close)) => {
            let _ = writeln!(out, "block comment: {open} {close}");
        }
        None => {
            let _ = writeln!(out, "block comment: none");
        }
    }
    let _ = writeln!(out, "line comment:  {}", OCAML.line_comment.unwrap_or("none"));
    if let Some(kernel) = &options.kernel {
        let verdict = if attached { "attached" } else { "not attached" };
        let _ = writeln!(out, "kernel:        {kernel} ({verdict})");
    }
    let _ = writeln!(out, "indent_unit:   {}", show(config.indent_unit));
    let _ = writeln!(out, "line_numbers:  {}", show(config.line_numbers));
    out
}

fn show<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}
