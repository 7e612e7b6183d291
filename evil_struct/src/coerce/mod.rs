//! The type-coercion capability consumed by attribute declarations.
//!
//! A [`Coercion`] receives the raw input for one attribute and either returns
//! the value to store or rejects it with a [`CoercionError`]. Any
//! `Fn(Value) -> Result<Value, CoercionError>` closure is a coercion, and a
//! few ready-made ones live in [`strict`], [`coercible`], [`optional`] and
//! [`typed`].

mod error;
mod extract;

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::value::{Value, ValueKind};

pub use error::CoercionError;
pub use extract::FromValue;

/// Pluggable type capability applied to a present attribute value.
pub trait Coercion: Send + Sync {
    /// Coerce `value`, or reject it.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] when `value` is not acceptable.
    fn apply(&self, value: Value) -> Result<Value, CoercionError>;

    /// Short description used in diagnostics.
    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("custom coercion")
    }
}

impl<F> Coercion for F
where
    F: Fn(Value) -> Result<Value, CoercionError> + Send + Sync,
{
    fn apply(&self, value: Value) -> Result<Value, CoercionError> {
        self(value)
    }
}

impl fmt::Debug for dyn Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Accepts values of exactly one kind and rejects everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strict(ValueKind);

impl Coercion for Strict {
    fn apply(&self, value: Value) -> Result<Value, CoercionError> {
        if value.kind() == self.0 {
            Ok(value)
        } else {
            Err(CoercionError::mismatch(self.0.name(), &value))
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("strict {}", self.0))
    }
}

/// Strict coercions, which never convert between kinds.
pub mod strict {
    use super::Strict;
    use crate::value::ValueKind;

    /// Accepts strings only.
    #[must_use]
    pub const fn string() -> Strict {
        Strict(ValueKind::String)
    }

    /// Accepts integers only.
    #[must_use]
    pub const fn integer() -> Strict {
        Strict(ValueKind::Integer)
    }

    /// Accepts floats only.
    #[must_use]
    pub const fn float() -> Strict {
        Strict(ValueKind::Float)
    }

    /// Accepts booleans only.
    #[must_use]
    pub const fn boolean() -> Strict {
        Strict(ValueKind::Bool)
    }

    /// Accepts symbols only.
    #[must_use]
    pub const fn symbol() -> Strict {
        Strict(ValueKind::Symbol)
    }
}

/// Lenient coercions that convert compatible scalars.
pub mod coercible {
    use std::borrow::Cow;

    use super::{Coercion, CoercionError};
    use crate::value::Value;

    /// Converts scalars to their string representation.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Stringify;

    impl Coercion for Stringify {
        fn apply(&self, value: Value) -> Result<Value, CoercionError> {
            match value {
                Value::String(_) => Ok(value),
                Value::Symbol(s) => Ok(Value::String(s.as_str().to_owned())),
                Value::Integer(i) => Ok(Value::String(i.to_string())),
                Value::Float(x) => Ok(Value::String(x.to_string())),
                Value::Bool(b) => Ok(Value::String(b.to_string())),
                other => Err(CoercionError::mismatch("string", &other)),
            }
        }

        fn describe(&self) -> Cow<'static, str> {
            Cow::Borrowed("coercible string")
        }
    }

    /// Parses decimal strings into integers.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ParseInteger;

    impl Coercion for ParseInteger {
        fn apply(&self, value: Value) -> Result<Value, CoercionError> {
            match value {
                Value::Integer(_) => Ok(value),
                Value::String(ref s) => s
                    .trim()
                    .parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|err| CoercionError::invalid("integer", &value, err.to_string())),
                other => Err(CoercionError::mismatch("integer", &other)),
            }
        }

        fn describe(&self) -> Cow<'static, str> {
            Cow::Borrowed("coercible integer")
        }
    }

    /// Converts scalars to strings.
    #[must_use]
    pub const fn string() -> Stringify {
        Stringify
    }

    /// Parses strings into integers.
    #[must_use]
    pub const fn integer() -> ParseInteger {
        ParseInteger
    }
}

/// Lets null through untouched and defers every other value to the inner
/// coercion.
#[derive(Clone)]
pub struct Optional(Arc<dyn Coercion>);

impl Coercion for Optional {
    fn apply(&self, value: Value) -> Result<Value, CoercionError> {
        if value.is_null() {
            Ok(value)
        } else {
            self.0.apply(value)
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("optional {}", self.0.describe()))
    }
}

/// Wrap `inner` so that null passes through.
#[must_use]
pub fn optional<C: Coercion + 'static>(inner: C) -> Optional {
    Optional(Arc::new(inner))
}

/// Validates through [`FromValue`] for `T` and stores the value `T`
/// converts back into.
pub struct Typed<T>(PhantomData<fn() -> T>);

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Typed<T> {}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Typed<{}>", std::any::type_name::<T>())
    }
}

impl<T> Coercion for Typed<T>
where
    T: FromValue + Into<Value>,
{
    fn apply(&self, value: Value) -> Result<Value, CoercionError> {
        T::from_value(&value).map(Into::into)
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<T>())
    }
}

/// Coercion backed by a Rust type.
///
/// ```rust
/// use evil_struct::Value;
/// use evil_struct::coerce::{Coercion, typed};
///
/// let coercion = typed::<Vec<String>>();
/// assert!(coercion.apply(Value::from(vec!["a", "b"])).is_ok());
/// assert!(coercion.apply(Value::from(vec![1])).is_err());
/// ```
#[must_use]
pub const fn typed<T>() -> Typed<T>
where
    T: FromValue + Into<Value>,
{
    Typed(PhantomData)
}
