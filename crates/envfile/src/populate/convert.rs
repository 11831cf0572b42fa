//! String-to-field conversion by declared type.
//!
//! Supported kinds are `String`, the signed and unsigned integers, `f32`,
//! `f64`, and `bool`. Integers parse at the field's own width, so an
//! out-of-range value is a parse error. `f32` fields parse as `f64` first
//! and are narrowed on assignment.

use std::any::Any;

use crate::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::error::ValueError;

/// Why a value could not be assigned to a slot.
#[derive(Debug)]
pub(crate) enum AssignError {
    Unsupported,
    Invalid(ValueError),
}

impl From<ValueError> for AssignError {
    fn from(err: ValueError) -> Self {
        AssignError::Invalid(err)
    }
}

macro_rules! assign_integer {
    ($slot:expr, $raw:expr, $($ty:ty),+ $(,)?) => {
        $(
            if let Some(field) = $slot.downcast_mut::<$ty>() {
                *field = $raw.parse::<$ty>().map_err(ValueError::from)?;
                return Ok(());
            }
        )+
    };
}

/// Convert `raw` according to the concrete type behind `slot` and store it.
pub(crate) fn assign(slot: &mut dyn Any, raw: &str) -> Result<(), AssignError> {
    if let Some(field) = slot.downcast_mut::<String>() {
        *field = raw.to_string();
        return Ok(());
    }

    assign_integer!(slot, raw, i8, i16, i32, i64, i128, isize);
    assign_integer!(slot, raw, u8, u16, u32, u64, u128, usize);

    if let Some(field) = slot.downcast_mut::<f64>() {
        *field = parse_float(raw)?;
        return Ok(());
    }
    if let Some(field) = slot.downcast_mut::<f32>() {
        *field = parse_float(raw)? as f32;
        return Ok(());
    }
    if let Some(field) = slot.downcast_mut::<bool>() {
        *field = parse_bool(raw)?;
        return Ok(());
    }

    Err(AssignError::Unsupported)
}

fn parse_float(raw: &str) -> Result<f64, ValueError> {
    Ok(raw.parse::<f64>()?)
}

pub(crate) fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    if TRUE_LITERALS.iter().any(|literal| *literal == raw) {
        Ok(true)
    } else if FALSE_LITERALS.iter().any(|literal| *literal == raw) {
        Ok(false)
    } else {
        Err(ValueError::Boolean(raw.to_string()))
    }
}
