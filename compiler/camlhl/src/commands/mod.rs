//! Command handlers for the `camlhl` CLI.
//!
//! Each submodule renders one command's output to a `String`. Shared file
//! handling lives here: reading input and fanning work out over files.

use rayon::prelude::*;

use crate::CliError;

mod highlight;
mod mode;
mod tokens;

pub use highlight::render_highlight;
pub use mode::{render_mode, ModeOptions};
pub use tokens::{render_tokens, TokenOptions};

/// Read a source file, classifying failures by cause.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::from_io(path, err))
}

/// Output produced for one input file.
#[derive(Debug)]
pub struct FileOutput {
    pub path: String,
    pub result: Result<String, CliError>,
}

/// Read and render every file in `paths`.
///
/// Files are processed in parallel, each with its own highlighter state.
/// Results come back in argument order.
pub fn render_files<F>(paths: &[String], render: F) -> Vec<FileOutput>
where
    F: Fn(&str) -> String + Sync,
{
    tracing::debug!(files = paths.len(), "rendering files");
    paths
        .par_iter()
        .map(|path| FileOutput {
            path: path.clone(),
            result: read_file(path).map(|text| render(&text)),
        })
        .collect()
}

/// Print rendered outputs to stdout and failures to stderr.
///
/// With more than one file, each output is preceded by a `==> path <==`
/// header. Returns `true` if every file succeeded.
pub fn emit_outputs(outputs: &[FileOutput]) -> bool {
    let headers = outputs.len() > 1;
    let mut ok = true;
    for (index, output) in outputs.iter().enumerate() {
        match &output.result {
            Ok(text) => {
                if headers {
                    if index > 0 {
                        println!();
                    }
                    println!("==> {} <==", output.path);
                }
                print!("{text}");
            }
            Err(err) => {
                eprintln!("error: {err}");
                ok = false;
            }
        }
    }
    ok
}
