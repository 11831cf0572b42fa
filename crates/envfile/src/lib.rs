//! Load `.env` files into the process environment and bind struct fields
//! to environment variables.
//!
//! This crate provides three entry points that share nothing but the
//! environment itself:
//!
//! - [`load`] reads `.env` from the working directory, if it exists.
//! - [`parse`] reads `NAME=VALUE` lines from any reader.
//! - [`populate`] fills the `#[env("NAME")]` fields of a struct.
//!
//! ```no_run
//! use envfile::EnvRecord;
//!
//! #[derive(EnvRecord, Default)]
//! struct Config {
//!     #[env("HOST")]
//!     host: String,
//!     #[env("PORT")]
//!     port: u16,
//! }
//!
//! envfile::load()?;
//! let config: Config = envfile::from_env()?;
//! println!("{}:{}", config.host, config.port);
//! # Ok::<(), envfile::EnvFileError>(())
//! ```
//!
//! Only structs with named fields can derive `EnvRecord`:
//!
//! ```compile_fail
//! use envfile::EnvRecord;
//!
//! #[derive(EnvRecord)]
//! enum Mode {
//!     #[env("MODE")]
//!     Fast,
//! }
//! ```
//!
//! ```compile_fail
//! use envfile::EnvRecord;
//!
//! #[derive(EnvRecord)]
//! struct Port(#[env("PORT")] u16);
//! ```
//!
//! All reads and writes go through the [`Environment`] trait. [`ProcessEnv`]
//! is the process table; [`MemoryEnv`] keeps tests and dry runs away from it.

extern crate self as envfile;

pub mod constants;
mod environment;
mod error;
mod loader;
mod parser;
mod populate;

pub use envfile_derive::EnvRecord;
pub use environment::{Environment, MemoryEnv, ProcessEnv};
pub use error::{EnvFileError, ValueError, WriteRejection};
pub use loader::{LoadOutcome, load, load_from, load_into};
pub use parser::{parse, parse_into, parse_str};
pub use populate::{EnvRecord, Field, from_env, populate, populate_from};
