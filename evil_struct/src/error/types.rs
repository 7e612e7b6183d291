//! Primary error enum for record construction.

use thiserror::Error;

use crate::coerce::CoercionError;
use crate::value::{Symbol, Value};

/// Errors that can occur while building or merging records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StructError {
    /// A required attribute was absent from the input.
    #[error("missing required attribute '{name}'")]
    MissingAttribute {
        /// Input name of the missing attribute.
        name: Symbol,
    },

    /// The attribute's coercion rejected the supplied value.
    #[error("attribute '{attribute}' rejected {value:?}: {source}")]
    TypeCoercion {
        /// Input name of the attribute being coerced.
        attribute: Symbol,
        /// The offending raw value.
        value: Value,
        /// The coercion's own error, unmodified.
        #[source]
        source: CoercionError,
    },

    /// The input cannot be turned into a mapping.
    #[error("cannot build a record from {kind}: {reason}")]
    UnsupportedInput {
        /// Kind of the rejected input.
        kind: &'static str,
        /// Why the input was rejected.
        reason: String,
    },
}
