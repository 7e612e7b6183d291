//! Typed extraction of attribute values.

use crate::Record;
use crate::convert::{mapping_form, sequence_form};
use crate::value::{Mapping, Symbol, Value};

use super::CoercionError;

/// Conversion from a stored [`Value`] into a Rust type.
///
/// Used by [`crate::Record::extract`], by [`super::typed`], and by code the
/// `EvilStruct` derive generates.
pub trait FromValue: Sized {
    /// Convert `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] when `value` has an incompatible shape.
    fn from_value(value: &Value) -> Result<Self, CoercionError>;

    /// Value to use when the attribute slot is unassigned.
    ///
    /// `None` means an unassigned slot cannot be represented, which is the
    /// case for every type except `Option<T>`.
    #[must_use]
    fn from_unassigned() -> Option<Self> {
        None
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(CoercionError::mismatch("string", other)),
        }
    }
}

impl FromValue for Symbol {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Symbol(s) => Ok(s.clone()),
            other => Err(CoercionError::mismatch("symbol", other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(CoercionError::mismatch("bool", other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Integer(i) => Ok(*i),
            other => Err(CoercionError::mismatch("integer", other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        let wide = i64::from_value(value)?;
        Self::try_from(wide).map_err(|err| CoercionError::invalid("i32", value, err.to_string()))
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        let wide = i64::from_value(value)?;
        Self::try_from(wide).map_err(|err| CoercionError::invalid("u32", value, err.to_string()))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Float(x) => Ok(*x),
            other => Err(CoercionError::mismatch("float", other)),
        }
    }
}

impl FromValue for Mapping {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        mapping_form(value)
            .map(std::borrow::Cow::into_owned)
            .ok_or_else(|| CoercionError::mismatch("mapping", value))
    }
}

impl FromValue for Record {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        value
            .as_record()
            .cloned()
            .ok_or_else(|| CoercionError::mismatch("record", value))
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        let items = sequence_form(value).ok_or_else(|| CoercionError::mismatch("sequence", value))?;
        items.iter().map(T::from_value).collect()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }

    fn from_unassigned() -> Option<Self> {
        Some(None)
    }
}
