//! Editor options the mode sets up when it attaches to a document.
//!
//! Defaults are applied once, with a presence test per option: anything the
//! user or host already set is left alone.

use std::fmt;

use thiserror::Error;

/// Defaults the OCaml mode brings to a freshly attached document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorDefaults {
    /// Columns per indentation level.
    pub indent_unit: u32,
    /// Whether the line number gutter is shown.
    pub line_numbers: bool,
}

impl EditorDefaults {
    pub const OCAML: EditorDefaults = EditorDefaults {
        indent_unit: 2,
        line_numbers: true,
    };
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self::OCAML
    }
}

/// Options of one editor instance. `None` means "not set yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditorConfig {
    pub indent_unit: Option<u32>,
    pub line_numbers: Option<bool>,
}

/// Error setting an editor option by name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown editor option '{name}'")]
    UnknownOption { name: String },
    #[error("invalid value '{value}' for option '{name}': expected {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl EditorConfig {
    /// Fill every unset option from `defaults`.
    ///
    /// Returns `true` if at least one option was assigned.
    pub fn apply_defaults(&mut self, defaults: &EditorDefaults) -> bool {
        let mut changed = false;
        if self.indent_unit.is_none() {
            self.indent_unit = Some(defaults.indent_unit);
            changed = true;
        }
        if self.line_numbers.is_none() {
            self.line_numbers = Some(defaults.line_numbers);
            changed = true;
        }
        if changed {
            tracing::debug!(config = %self, "applied editor defaults");
        }
        changed
    }

    /// Set an option by its editor name, parsing `value`.
    ///
    /// Accepts both `snake_case` and the editor's `camelCase` spelling
    /// (`indent_unit` / `indentUnit`, `line_numbers` / `lineNumbers`).
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match name.trim() {
            "indent_unit" | "indentUnit" => {
                let unit = value
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: "indent_unit",
                        value: value.to_string(),
                        expected: "a non-negative integer",
                    })?;
                self.indent_unit = Some(unit);
            }
            "line_numbers" | "lineNumbers" => {
                let on = parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                    name: "line_numbers",
                    value: value.to_string(),
                    expected: "true or false",
                })?;
                self.line_numbers = Some(on);
            }
            other => {
                return Err(ConfigError::UnknownOption {
                    name: other.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Parse a `name=value` assignment and apply it.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        match assignment.split_once('=') {
            Some((name, value)) => self.set_option(name, value),
            None => Err(ConfigError::UnknownOption {
                name: assignment.to_string(),
            }),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.indent_unit {
            Some(unit) => write!(f, "indent_unit={unit}")?,
            None => write!(f, "indent_unit=<unset>")?,
        }
        match self.line_numbers {
            Some(on) => write!(f, " line_numbers={on}"),
            None => write!(f, " line_numbers=<unset>"),
        }
    }
}
