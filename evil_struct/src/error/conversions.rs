//! Trait-based conversions between `StructError` and coercion failures.

use std::sync::Arc;

use super::StructError;
use crate::coerce::CoercionError;

/// A nested record that fails to build surfaces as a coercion failure of the
/// enclosing attribute, keeping the nested error as its source.
impl From<Arc<StructError>> for CoercionError {
    fn from(err: Arc<StructError>) -> Self {
        Self::nested("record", err)
    }
}

impl From<StructError> for CoercionError {
    fn from(err: StructError) -> Self {
        Self::from(Arc::new(err))
    }
}
