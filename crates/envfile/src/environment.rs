//! Environment variable storage behind a narrow capability.
//!
//! Responsibilities:
//! - Define the `Environment` trait used by the parser (writes) and the
//!   populator (reads).
//! - Provide `ProcessEnv`, backed by the host process's variable table.
//! - Provide `MemoryEnv`, an in-memory table for callers that must not
//!   touch process state.
//!
//! Does NOT handle:
//! - Synchronization. `ProcessEnv` writes are not safe to race with other
//!   threads reading or writing the environment.
//!
//! Invariants:
//! - This is the only library module that calls `std::env::set_var`.
//! - Writes are validated before reaching `set_var`, so invalid names or
//!   values surface as `WriteRejection` instead of a panic.

use std::collections::BTreeMap;

use crate::error::WriteRejection;

/// Read/write access to a table of environment variables.
pub trait Environment {
    /// Look up `name`, returning `None` if it is not set.
    fn get(&self, name: &str) -> Option<String>;

    /// Set `name` to `value`, overwriting any existing value.
    fn set(&mut self, name: &str, value: &str) -> Result<(), WriteRejection>;
}

/// Check a name/value pair against the rules every platform enforces.
fn validate_write(name: &str, value: &str) -> Result<(), WriteRejection> {
    if name.is_empty() {
        return Err(WriteRejection::EmptyName);
    }
    if name.contains('=') {
        return Err(WriteRejection::NameContainsEquals);
    }
    if name.contains('\0') {
        return Err(WriteRejection::NameContainsNul);
    }
    if value.contains('\0') {
        return Err(WriteRejection::ValueContainsNul);
    }
    Ok(())
}

/// The host process's environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    /// Values that are not valid Unicode are converted lossily.
    fn get(&self, name: &str) -> Option<String> {
        if validate_write(name, "").is_err() {
            return None;
        }
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), WriteRejection> {
        validate_write(name, value)?;
        // SAFETY: the crate is single-threaded by contract; callers that share
        // the environment across threads must serialize access themselves.
        unsafe {
            std::env::set_var(name, value);
        }
        Ok(())
    }
}

/// An in-memory environment, ordered by name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), WriteRejection> {
        validate_write(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
