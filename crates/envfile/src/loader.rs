//! Environment file loading.
//!
//! Responsibilities:
//! - Open the conventional `.env` file (or an explicit path) and stream it
//!   through the parser.
//! - Treat a missing file as "nothing to configure".
//! - Honor the `ENVFILE_DISABLED` gate.
//!
//! Does NOT handle:
//! - Line syntax (see parser.rs).
//! - Searching parent directories for a `.env` file.
//!
//! Invariants / Assumptions:
//! - Relative paths resolve against the process working directory.
//! - The file handle is dropped before returning, on success and on error.
//! - Parser errors are returned unchanged; only I/O errors from reading the
//!   file gain the file's path.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::{DEFAULT_ENV_FILE, DISABLE_VAR};
use crate::environment::{Environment, ProcessEnv};
use crate::error::EnvFileError;
use crate::parser::parse_into;

/// What a successful load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was parsed and `variables` entries were written.
    Loaded { path: PathBuf, variables: usize },
    /// The file does not exist; nothing was written.
    NotFound { path: PathBuf },
    /// `ENVFILE_DISABLED` is set; the file was not opened.
    Disabled,
}

/// Load `.env` from the working directory into the process environment.
///
/// Errors are only returned if the file exists.
pub fn load() -> Result<LoadOutcome, EnvFileError> {
    load_from(DEFAULT_ENV_FILE)
}

/// Load the file at `path` into the process environment.
pub fn load_from(path: impl AsRef<Path>) -> Result<LoadOutcome, EnvFileError> {
    load_into(path, &mut ProcessEnv)
}

/// Load the file at `path` into `env`.
///
/// If `ENVFILE_DISABLED` is `"1"` or `"true"` in `env`, the file is not
/// opened (useful for testing).
///
/// # Errors
///
/// - `EnvFileError::Io` if the file exists but cannot be opened or read.
/// - Any error from the parser, unchanged.
pub fn load_into<E: Environment>(
    path: impl AsRef<Path>,
    env: &mut E,
) -> Result<LoadOutcome, EnvFileError> {
    let path = path.as_ref();

    if is_disabled(env) {
        debug!(var = DISABLE_VAR, "env file loading disabled");
        return Ok(LoadOutcome::Disabled);
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "env file not found, skipping");
            return Ok(LoadOutcome::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(EnvFileError::Io {
                path: Some(path.to_path_buf()),
                source,
            });
        }
    };

    let variables = parse_into(BufReader::new(file), env).map_err(|e| match e {
        EnvFileError::Io { path: None, source } => EnvFileError::Io {
            path: Some(path.to_path_buf()),
            source,
        },
        other => other,
    })?;

    info!(path = %path.display(), variables, "loaded env file");
    Ok(LoadOutcome::Loaded {
        path: path.to_path_buf(),
        variables,
    })
}

fn is_disabled<E: Environment>(env: &E) -> bool {
    matches!(env.get(DISABLE_VAR).as_deref(), Some("true") | Some("1"))
}
