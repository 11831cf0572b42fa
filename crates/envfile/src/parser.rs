//! Line-oriented `NAME=VALUE` parser.
//!
//! Responsibilities:
//! - Read text line by line and write each `NAME=VALUE` pair into an
//!   `Environment`.
//! - Ignore blank lines and lines starting with `#` after trimming.
//!
//! Does NOT handle:
//! - Quoting, escaping, interpolation, or multi-line values.
//! - Opening files (see loader.rs).
//!
//! Invariants:
//! - A data line must split on `=` into exactly two segments.
//! - Name and value are trimmed independently; inner whitespace is kept.
//! - The first failing line stops processing. Earlier writes stay applied.

use std::io::BufRead;

use tracing::debug;

use crate::constants::{COMMENT_PREFIX, SEPARATOR};
use crate::environment::{Environment, ProcessEnv};
use crate::error::EnvFileError;

/// Parse `reader` and set the variables in the process environment.
///
/// Returns the number of variables written.
///
/// The format is `FOO=bar` with `#` used for comments:
///
/// ```text
/// # This is a comment
/// FOO=foo
///
/// # Leading and trailing spaces are ignored
/// BAR = bar
///
/// # Sentences are allowed
/// BAZ=foo bar baz
/// ```
pub fn parse<R: BufRead>(reader: R) -> Result<usize, EnvFileError> {
    parse_into(reader, &mut ProcessEnv)
}

/// Parse a string into `env`.
pub fn parse_str<E: Environment>(input: &str, env: &mut E) -> Result<usize, EnvFileError> {
    parse_into(input.as_bytes(), env)
}

/// Parse `reader` and set the variables in `env`.
///
/// # Errors
///
/// - `EnvFileError::Io` if reading fails, including invalid UTF-8.
/// - `EnvFileError::Format` for a line without exactly one `=`.
/// - `EnvFileError::EnvWrite` if `env` refuses a variable.
pub fn parse_into<R: BufRead, E: Environment>(
    reader: R,
    env: &mut E,
) -> Result<usize, EnvFileError> {
    let mut written = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| EnvFileError::Io { path: None, source })?;
        let line_number = index + 1;

        let Some((name, value)) = parse_line(&line, line_number)? else {
            continue;
        };

        env.set(name, value)
            .map_err(|source| EnvFileError::EnvWrite {
                name: name.to_string(),
                value: value.to_string(),
                source,
            })?;
        debug!(name, line_number, "set environment variable");
        written += 1;
    }

    Ok(written)
}

/// Split one raw line into a trimmed `(name, value)` pair.
///
/// Returns `Ok(None)` for blank and comment lines.
fn parse_line(raw: &str, line_number: usize) -> Result<Option<(&str, &str)>, EnvFileError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let mut segments = line.split(SEPARATOR);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(name), Some(value), None) => Ok(Some((name.trim(), value.trim()))),
        _ => Err(EnvFileError::Format {
            line_number,
            line: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MemoryEnv;
    use crate::error::WriteRejection;

    fn parsed(input: &str) -> MemoryEnv {
        let mut env = MemoryEnv::new();
        parse_str(input, &mut env).expect("input should parse");
        env
    }

    #[test]
    fn test_empty_input_sets_nothing() {
        let mut env = MemoryEnv::new();
        assert_eq!(parse_str("", &mut env).unwrap(), 0);
        assert!(env.is_empty());
    }

    #[test]
    fn test_single_variable() {
        let env = parsed("FOO=foo");
        assert_eq!(env.get("FOO").as_deref(), Some("foo"));
    }

    #[test]
    fn test_indented_multiple_variables() {
        let env = parsed(
            "
				FOO=foo
				BAR=bar
			",
        );
        assert_eq!(env.get("FOO").as_deref(), Some("foo"));
        assert_eq!(env.get("BAR").as_deref(), Some("bar"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_gaps_around_name_and_value_are_trimmed() {
        let env = parsed("  FOO  =  foo  ");
        assert_eq!(env.get("FOO").as_deref(), Some("foo"));
    }

    #[test]
    fn test_comments_are_skipped() {
        let env = parsed(
            "
				# This is a comment
				FOO=foo
				#BAR=bar
			",
        );
        assert_eq!(env.get("FOO").as_deref(), Some("foo"));
        assert_eq!(env.get("BAR"), None);
    }

    #[test]
    fn test_inner_spaces_are_preserved() {
        let env = parsed("FOO=foo bar");
        assert_eq!(env.get("FOO").as_deref(), Some("foo bar"));
    }

    #[test]
    fn test_trailing_hash_is_part_of_value() {
        let env = parsed("FOO=bar #comment");
        assert_eq!(env.get("FOO").as_deref(), Some("bar #comment"));
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let env = parsed("FOO=");
        assert_eq!(env.get("FOO").as_deref(), Some(""));
    }

    #[test]
    fn test_crlf_line_endings() {
        let env = parsed("FOO=foo\r\nBAR=bar\r\n");
        assert_eq!(env.get("FOO").as_deref(), Some("foo"));
        assert_eq!(env.get("BAR").as_deref(), Some("bar"));
    }

    #[test]
    fn test_reference_scenario() {
        let mut env = MemoryEnv::new();
        let written =
            parse_str("FOO=foo\nBAR = bar\n# skip\nBAZ=foo bar baz\n", &mut env).unwrap();

        assert_eq!(written, 3);
        assert_eq!(env.get("FOO").as_deref(), Some("foo"));
        assert_eq!(env.get("BAR").as_deref(), Some("bar"));
        assert_eq!(env.get("BAZ").as_deref(), Some("foo bar baz"));
    }

    #[test]
    fn test_double_equals_is_format_error() {
        let mut env = MemoryEnv::new();
        match parse_str("FOO==bar", &mut env) {
            Err(EnvFileError::Format { line_number, line }) => {
                assert_eq!(line_number, 1);
                assert_eq!(line, "FOO==bar");
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_value_with_equals_is_format_error() {
        let mut env = MemoryEnv::new();
        let result = parse_str("FOO=a=b", &mut env);
        assert!(matches!(result, Err(EnvFileError::Format { .. })));
    }

    #[test]
    fn test_missing_equals_is_format_error() {
        let mut env = MemoryEnv::new();
        let result = parse_str("\n  JUST_A_NAME  \n", &mut env);
        match result {
            Err(EnvFileError::Format { line_number, line }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "JUST_A_NAME");
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_halts_without_rollback() {
        let mut env = MemoryEnv::new();
        let result = parse_str("FIRST=1\nBROKEN\nTHIRD=3\n", &mut env);

        assert!(matches!(
            result,
            Err(EnvFileError::Format { line_number: 2, .. })
        ));
        assert_eq!(env.get("FIRST").as_deref(), Some("1"));
        assert_eq!(env.get("THIRD"), None);
    }

    #[test]
    fn test_empty_name_is_env_write_error() {
        let mut env = MemoryEnv::new();
        match parse_str(" = value", &mut env) {
            Err(EnvFileError::EnvWrite {
                name,
                value,
                source,
            }) => {
                assert_eq!(name, "");
                assert_eq!(value, "value");
                assert_eq!(source, WriteRejection::EmptyName);
            }
            other => panic!("expected EnvWrite error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut env = MemoryEnv::new();
        let bytes: &[u8] = b"FOO=foo\nBAR=\xff\xfe\n";
        let result = parse_into(bytes, &mut env);

        assert!(matches!(result, Err(EnvFileError::Io { path: None, .. })));
        assert_eq!(env.get("FOO").as_deref(), Some("foo"));
    }

    #[test]
    fn test_parsing_twice_is_idempotent() {
        let input = "A=1\nB = two words\n# note\n";
        let mut env = MemoryEnv::new();
        parse_str(input, &mut env).unwrap();
        let once = env.clone();
        parse_str(input, &mut env).unwrap();

        assert_eq!(env, once);
    }
}
