//! Rejections reported by coercions.

use std::borrow::Cow;
use std::sync::Arc;

use thiserror::Error;

use crate::StructError;
use crate::value::{Value, ValueKind};

/// A coercion rejected its input.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CoercionError {
    expected: Cow<'static, str>,
    found: ValueKind,
    message: String,
    #[source]
    source: Option<Arc<StructError>>,
}

impl CoercionError {
    /// The input has the wrong kind.
    #[must_use]
    pub fn mismatch(expected: impl Into<Cow<'static, str>>, found: &Value) -> Self {
        let expected = expected.into();
        let message = format!("expected {expected}, found {}", found.kind());
        Self {
            expected,
            found: found.kind(),
            message,
            source: None,
        }
    }

    /// The input has an acceptable kind but an invalid content.
    #[must_use]
    pub fn invalid(
        expected: impl Into<Cow<'static, str>>,
        found: &Value,
        reason: impl AsRef<str>,
    ) -> Self {
        let expected = expected.into();
        let message = format!("invalid {expected}: {}", reason.as_ref());
        Self {
            expected,
            found: found.kind(),
            message,
            source: None,
        }
    }

    /// A nested record could not be built from the input.
    #[must_use]
    pub fn nested(expected: impl Into<Cow<'static, str>>, source: Arc<StructError>) -> Self {
        let expected = expected.into();
        let message = format!("invalid {expected}: {source}");
        Self {
            expected,
            found: ValueKind::Mapping,
            message,
            source: Some(source),
        }
    }

    /// What the coercion expected.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Kind of the rejected value.
    #[must_use]
    pub const fn found(&self) -> ValueKind {
        self.found
    }
}
