//! `camlhl`: command-line front end for the OCaml highlighting mode.
//!
//! The binary in `main.rs` only parses arguments; everything it prints is
//! rendered to a `String` by [`commands`] so it can be tested directly.

use std::io;
use std::sync::Once;

use caml_mode::ConfigError;
use thiserror::Error;

pub mod commands;
pub mod theme;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging
/// cost. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Everything that can stop a `camlhl` run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("no input files given to '{command}'")]
    MissingFiles { command: &'static str },
    #[error("unknown option '{flag}' for '{command}'")]
    UnknownFlag {
        command: &'static str,
        flag: String,
    },
    #[error("option '{flag}' expects a value")]
    MissingValue { flag: &'static str },
    #[error("invalid color mode '{value}' (expected auto, always or never)")]
    InvalidColorMode { value: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Classify an I/O error from reading `path`.
    pub fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }
}
