//! Error types for loading, parsing, and populating.
//!
//! Responsibilities:
//! - Define one error enum covering every failure the crate can return.
//! - Keep the underlying cause reachable through `Error::source()`.
//!
//! Does NOT handle:
//! - Rejecting non-struct targets. That happens at compile time in the
//!   `EnvRecord` derive and through the `&mut T` bound of `populate`.
//!
//! Invariants:
//! - Every variant names the variable, line, or path it concerns.
//! - Values are only carried where the caller needs them to diagnose the
//!   failure (format, write, and conversion errors).

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the loader, the parser, and the populator.
#[derive(Error, Debug)]
pub enum EnvFileError {
    /// The environment file exists but could not be opened or read.
    #[error("{}", io_message(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// A line is not of the form `NAME=VALUE` with exactly one `=`.
    #[error("invalid variable format on line {line_number}: {line:?}")]
    Format { line_number: usize, line: String },

    /// The environment refused to store a variable.
    #[error("error setting variable {name}={value}")]
    EnvWrite {
        name: String,
        value: String,
        #[source]
        source: WriteRejection,
    },

    /// An annotated field names a variable that is not set.
    #[error("environment variable {name} not set")]
    MissingVariable { name: String },

    /// The variable is set but its value does not parse as the field's type.
    #[error("failed conversion for {name} (value {value:?})")]
    Conversion {
        name: String,
        value: String,
        #[source]
        source: ValueError,
    },

    /// The annotated field has a type that cannot be read from a string.
    #[error("type {kind} of field bound to {name} not supported")]
    UnsupportedType { name: String, kind: &'static str },
}

fn io_message(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("error reading env file {}", path.display()),
        None => "error reading env input".to_string(),
    }
}

/// Reasons an environment refuses a write.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRejection {
    #[error("variable name is empty")]
    EmptyName,

    #[error("variable name contains '='")]
    NameContainsEquals,

    #[error("variable name contains a NUL byte")]
    NameContainsNul,

    #[error("variable value contains a NUL byte")]
    ValueContainsNul,
}

/// Parse failures when converting a variable's value to a field's type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error(transparent)]
    Integer(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("invalid boolean literal {0:?}")]
    Boolean(String),
}
