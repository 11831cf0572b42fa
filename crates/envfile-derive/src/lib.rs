//! Derive macro for binding struct fields to environment variables.
//!
//! `#[derive(EnvRecord)]` generates an `envfile::EnvRecord` implementation
//! that lists every field annotated with `#[env("NAME")]`, in declaration
//! order, together with a mutable handle to the field:
//!
//! ```text
//! #[derive(EnvRecord)]
//! struct ServerConfig {
//!     #[env("HOST")]
//!     host: String,
//!     #[env("PORT")]
//!     port: u16,
//!     // Not annotated: left untouched by `envfile::populate`.
//!     retries: u32,
//! }
//! ```
//!
//! The generated code refers to `::envfile`, so the macro is meant to be
//! used through the `envfile` crate's re-export.

mod record;
mod utils;

use proc_macro::TokenStream;

/// Derive macro implementing `envfile::EnvRecord`.
///
/// # Attributes
///
/// ## Field-level
/// - `#[env("NAME")]` - Bind this field to the environment variable `NAME`.
///
/// # Errors
///
/// Compilation fails if the item is not a struct with named fields, or if an
/// `#[env]` attribute is malformed, empty, repeated, or names a variable
/// containing `=`.
#[proc_macro_derive(EnvRecord, attributes(env))]
pub fn derive_env_record(input: TokenStream) -> TokenStream {
    record::derive_env_record(input)
}
