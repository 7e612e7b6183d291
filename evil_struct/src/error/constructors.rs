//! Constructors and inspection helpers for `StructError`.

use std::sync::Arc;

use super::StructError;
use crate::coerce::CoercionError;
use crate::value::{Symbol, Value};

impl StructError {
    /// Construct a missing-attribute error.
    ///
    /// # Examples
    ///
    /// ```
    /// use evil_struct::{StructError, sym};
    /// let e = StructError::missing_attribute(sym("foo"));
    /// assert_eq!(e.to_string(), "missing required attribute 'foo'");
    /// ```
    #[must_use]
    pub const fn missing_attribute(name: Symbol) -> Self {
        Self::MissingAttribute { name }
    }

    /// Construct a coercion failure for `attribute`.
    #[must_use]
    pub const fn type_coercion(attribute: Symbol, value: Value, source: CoercionError) -> Self {
        Self::TypeCoercion {
            attribute,
            value,
            source,
        }
    }

    /// Construct an unsupported-input error.
    ///
    /// # Examples
    ///
    /// ```
    /// use evil_struct::{StructError, Value};
    /// let e = StructError::unsupported_input(&Value::from(1), "not a mapping");
    /// assert!(matches!(e, StructError::UnsupportedInput { kind: "integer", .. }));
    /// ```
    #[must_use]
    pub fn unsupported_input(input: &Value, reason: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            kind: input.kind().name(),
            reason: reason.into(),
        }
    }

    /// Construct an unsupported-input error wrapped in an [`Arc`].
    ///
    /// This helper reduces repetition in call sites that return a
    /// [`crate::StructResult`].
    #[must_use]
    pub fn unsupported_input_arc(input: &Value, reason: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::unsupported_input(input, reason))
    }

    /// Name of the attribute the error refers to, when there is one.
    #[must_use]
    pub const fn attribute(&self) -> Option<&Symbol> {
        match self {
            Self::MissingAttribute { name } => Some(name),
            Self::TypeCoercion { attribute, .. } => Some(attribute),
            Self::UnsupportedInput { .. } => None,
        }
    }
}
