//! Per-declaration options and their merge rule.

use std::fmt;
use std::sync::Arc;

use super::AttributeDef;
use crate::coerce::Coercion;
use crate::value::{Symbol, Value};

/// Producer of a default value, invoked lazily when the input lacks the
/// attribute.
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Options accepted by an attribute declaration.
///
/// Every option is tri-state: unset, or set to a value. [`merge`] lets
/// explicitly set options on the right-hand side win, which is how shared
/// option blocks combine with per-attribute options.
///
/// [`merge`]: AttributeOptions::merge
///
/// ```rust
/// use evil_struct::{AttributeOptions, Value};
/// use evil_struct::coerce::strict;
///
/// let shared = AttributeOptions::new()
///     .coerce(strict::string())
///     .with_default(|| Value::from("bar"));
/// let merged = shared.merge(AttributeOptions::new().optional());
/// assert!(merged.is_optional());
/// assert!(merged.has_default());
/// ```
#[derive(Clone, Default)]
pub struct AttributeOptions {
    coercion: Option<Arc<dyn Coercion>>,
    default: Option<DefaultFn>,
    optional: Option<bool>,
    null_as_absent: Option<bool>,
    store_as: Option<Symbol>,
}

impl AttributeOptions {
    /// Options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerce present values with `coercion`.
    #[must_use]
    pub fn coerce<C: Coercion + 'static>(self, coercion: C) -> Self {
        self.coerce_with(Arc::new(coercion))
    }

    /// Coerce present values with an already shared coercion.
    #[must_use]
    pub fn coerce_with(mut self, coercion: Arc<dyn Coercion>) -> Self {
        self.coercion = Some(coercion);
        self
    }

    /// Produce a default with `producer` when the input lacks the attribute.
    #[must_use]
    pub fn with_default<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(Arc::new(producer));
        self
    }

    /// Mark the attribute as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = Some(true);
        self
    }

    /// Mark the attribute as required, overriding a shared `optional`.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.optional = Some(false);
        self
    }

    /// Treat an explicit null in the input as if the key were missing.
    ///
    /// The default producer then runs, or an optional slot stays unassigned.
    /// Typed `Option<T>` fields use this, since `None` cannot tell the two
    /// apart.
    #[must_use]
    pub fn null_as_absent(mut self) -> Self {
        self.null_as_absent = Some(true);
        self
    }

    /// Store the attribute under `storage` instead of its input name.
    #[must_use]
    pub fn store_as(mut self, storage: impl Into<Symbol>) -> Self {
        self.store_as = Some(storage.into());
        self
    }

    /// Overlay `overrides` on `self`; options set in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            coercion: overrides.coercion.or(self.coercion),
            default: overrides.default.or(self.default),
            optional: overrides.optional.or(self.optional),
            null_as_absent: overrides.null_as_absent.or(self.null_as_absent),
            store_as: overrides.store_as.or(self.store_as),
        }
    }

    /// Returns `true` when the options mark the attribute optional.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional.unwrap_or(false)
    }

    /// Returns `true` when a default producer is set.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub(super) fn into_declaration(self, name: Symbol) -> AttributeDef {
        let optional = self.is_optional();
        AttributeDef {
            storage: self.store_as.unwrap_or_else(|| name.clone()),
            name,
            coercion: self.coercion,
            default: self.default,
            optional,
            null_as_absent: self.null_as_absent.unwrap_or(false),
        }
    }
}

impl fmt::Debug for AttributeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeOptions")
            .field("coercion", &self.coercion)
            .field("default", &self.default.as_ref().map(|_| "<producer>"))
            .field("optional", &self.optional)
            .field("null_as_absent", &self.null_as_absent)
            .field("store_as", &self.store_as)
            .finish()
    }
}
