//! Extensions for mapping errors to `StructResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(StructError::…))`
//! patterns when a coercion result has to be attributed to a specific
//! attribute and value.
//!
//! - Use [`StructResultExt::into_struct`] for error types that implement
//!   `Into<StructError>`.
//! - Use [`CoercionResultExt::for_attribute`] for [`CoercionError`] results
//!   that should become [`StructError::TypeCoercion`].
//!
//! # Examples
//!
//! ```
//! use evil_struct::coerce::{Coercion, strict};
//! use evil_struct::{CoercionResultExt, StructError, Value, sym};
//!
//! let raw = Value::from(1);
//! let err = strict::string()
//!     .apply(raw.clone())
//!     .for_attribute(&sym("name"), &raw)
//!     .unwrap_err();
//! assert!(matches!(&*err, StructError::TypeCoercion { .. }));
//! ```

use std::sync::Arc;

use crate::coerce::CoercionError;
use crate::value::{Symbol, Value};
use crate::{StructError, StructResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<StructError>` into a [`StructResult`].
pub trait StructResultExt<T, E> {
    /// Convert `Result<T, E>` into `StructResult<T>` using `Into<StructError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<StructError>`.
    fn into_struct(self) -> StructResult<T>;
}

impl<T, E> StructResultExt<T, E> for Result<T, E>
where
    E: Into<StructError>,
{
    fn into_struct(self) -> StructResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension tailored to attributing a [`CoercionError`] to an attribute.
pub trait CoercionResultExt<T> {
    /// Convert `Result<T, CoercionError>` into `StructResult<T>` as a
    /// [`StructError::TypeCoercion`] naming `attribute` and the offending
    /// `value`.
    ///
    /// # Errors
    ///
    /// Returns a `StructError::TypeCoercion` wrapped in `Arc` when the input
    /// is `Err`.
    fn for_attribute(self, attribute: &Symbol, value: &Value) -> StructResult<T>;
}

impl<T> CoercionResultExt<T> for Result<T, CoercionError> {
    fn for_attribute(self, attribute: &Symbol, value: &Value) -> StructResult<T> {
        self.map_err(|source| {
            Arc::new(StructError::type_coercion(
                attribute.clone(),
                value.clone(),
                source,
            ))
        })
    }
}
