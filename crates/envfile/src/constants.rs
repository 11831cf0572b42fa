//! Named constants shared across the crate.

/// Conventional environment file, resolved against the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Setting this variable to `1` or `true` turns `load*` into a no-op.
pub const DISABLE_VAR: &str = "ENVFILE_DISABLED";

/// Literals accepted as `true` for `bool` fields.
pub const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// Literals accepted as `false` for `bool` fields.
pub const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];

/// First character of a comment line (after trimming).
pub const COMMENT_PREFIX: char = '#';

/// Separator between variable name and value.
pub const SEPARATOR: char = '=';
