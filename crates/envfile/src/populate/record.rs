//! Field descriptors produced by `#[derive(EnvRecord)]`.

use std::any::{Any, type_name};
use std::fmt;

/// A struct whose fields can be bound to environment variables.
///
/// Implemented by `#[derive(EnvRecord)]`; see the crate docs for the
/// attribute syntax.
pub trait EnvRecord {
    /// Annotated fields, in declaration order.
    fn env_fields(&mut self) -> Vec<Field<'_>>;
}

/// One annotated field: the variable it binds to and a handle for writing it.
pub struct Field<'a> {
    var: &'static str,
    kind: &'static str,
    slot: &'a mut dyn Any,
}

impl<'a> Field<'a> {
    pub fn new<T: Any>(var: &'static str, slot: &'a mut T) -> Self {
        Self {
            var,
            kind: type_name::<T>(),
            slot,
        }
    }

    /// Name of the environment variable bound to this field.
    pub fn var(&self) -> &'static str {
        self.var
    }

    /// Declared type of the field, as reported by `std::any::type_name`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub(crate) fn slot(&mut self) -> &mut dyn Any {
        self.slot
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("var", &self.var)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
