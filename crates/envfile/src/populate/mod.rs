//! Struct population from environment variables.
//!
//! Responsibilities:
//! - Walk the annotated fields of an `EnvRecord` in declaration order.
//! - Look up each bound variable and convert it to the field's type.
//!
//! Does NOT handle:
//! - Writing to the environment (see parser.rs).
//! - Defaults for missing variables. Every annotated variable is required.
//!
//! Invariants:
//! - Unannotated fields are never touched.
//! - The first failing field stops processing. Fields before it keep their
//!   new values; fields after it keep their old ones.
//! - A missing variable is reported before the field's type is checked.

mod convert;
mod record;

pub use record::{EnvRecord, Field};

use tracing::debug;

use crate::environment::{Environment, ProcessEnv};
use crate::error::EnvFileError;
use convert::{AssignError, assign};

/// Populate the annotated fields of `target` from the process environment.
///
/// ```
/// use envfile::EnvRecord;
///
/// #[derive(EnvRecord, Default)]
/// struct Config {
///     #[env("ENVFILE_DOC_HOST")]
///     host: String,
///     #[env("ENVFILE_DOC_PORT")]
///     port: u16,
/// }
///
/// # unsafe {
/// #     std::env::set_var("ENVFILE_DOC_HOST", "localhost");
/// #     std::env::set_var("ENVFILE_DOC_PORT", "8080");
/// # }
/// let mut config = Config::default();
/// envfile::populate(&mut config)?;
///
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// # Ok::<(), envfile::EnvFileError>(())
/// ```
///
/// The target must be passed by mutable reference:
///
/// ```compile_fail
/// use envfile::EnvRecord;
///
/// #[derive(EnvRecord, Default)]
/// struct Config {
///     #[env("HOST")]
///     host: String,
/// }
///
/// envfile::populate(Config::default()).unwrap();
/// ```
pub fn populate<T: EnvRecord + ?Sized>(target: &mut T) -> Result<(), EnvFileError> {
    populate_from(target, &ProcessEnv)
}

/// Populate the annotated fields of `target` from `env`.
///
/// # Errors
///
/// - `EnvFileError::MissingVariable` if a bound variable is not set.
/// - `EnvFileError::Conversion` if a value does not parse as the field's type.
/// - `EnvFileError::UnsupportedType` if the field's type is not a string,
///   integer, float, or bool.
pub fn populate_from<T, E>(target: &mut T, env: &E) -> Result<(), EnvFileError>
where
    T: EnvRecord + ?Sized,
    E: Environment + ?Sized,
{
    for mut field in target.env_fields() {
        let name = field.var();
        let value = env
            .get(name)
            .ok_or_else(|| EnvFileError::MissingVariable {
                name: name.to_string(),
            })?;

        match assign(field.slot(), &value) {
            Ok(()) => debug!(name, kind = field.kind(), "populated field"),
            Err(AssignError::Unsupported) => {
                return Err(EnvFileError::UnsupportedType {
                    name: name.to_string(),
                    kind: field.kind(),
                });
            }
            Err(AssignError::Invalid(source)) => {
                return Err(EnvFileError::Conversion {
                    name: name.to_string(),
                    value,
                    source,
                });
            }
        }
    }

    Ok(())
}

/// Build a `T` from its `Default` and populate it from the process environment.
pub fn from_env<T: EnvRecord + Default>() -> Result<T, EnvFileError> {
    let mut target = T::default();
    populate(&mut target)?;
    Ok(target)
}
