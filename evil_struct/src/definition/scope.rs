//! Shared-option blocks.

use super::{AttributeOptions, StructDef};
use crate::value::Symbol;

/// Builder handed to [`StructDef::attributes`] blocks.
///
/// Each declaration made through the scope merges its own options over the
/// shared ones. Scopes nest: an inner block's shared options are the outer
/// shared options overlaid with the inner ones.
///
/// ```rust
/// use evil_struct::{AttributeOptions, StructDef, Value};
///
/// let mut def = StructDef::new("Foo");
/// def.attributes(AttributeOptions::new().optional(), |scope| {
///     scope.attribute("foo", AttributeOptions::new());
///     scope.attributes(
///         AttributeOptions::new().with_default(|| Value::from(1)),
///         |inner| {
///             inner.attribute("bar", AttributeOptions::new().required());
///         },
///     );
/// });
///
/// assert!(def.declaration("foo").is_some_and(|d| d.is_optional()));
/// let bar = def.declaration("bar");
/// assert!(bar.is_some_and(|d| d.has_default() && !d.is_optional()));
/// ```
pub struct SharedScope<'a> {
    definition: &'a mut StructDef,
    options: AttributeOptions,
}

impl<'a> SharedScope<'a> {
    pub(super) fn new(definition: &'a mut StructDef, options: AttributeOptions) -> Self {
        Self {
            definition,
            options,
        }
    }

    /// Declare `name` with the shared options overlaid by `options`.
    pub fn attribute(&mut self, name: impl Into<Symbol>, options: AttributeOptions) -> &mut Self {
        let merged = self.options.clone().merge(options);
        self.definition.attribute(name, merged);
        self
    }

    /// Open a nested block whose shared options are this scope's overlaid by
    /// `options`.
    pub fn attributes<F>(&mut self, options: AttributeOptions, block: F) -> &mut Self
    where
        F: FnOnce(&mut SharedScope<'_>),
    {
        let shared = self.options.clone().merge(options);
        let mut inner = SharedScope::new(&mut *self.definition, shared);
        block(&mut inner);
        self
    }
}
