//! Type definitions: the attribute registry and its declarations.
//!
//! A [`StructDef`] is built mutably at declaration time and shared by every
//! record it constructs. The definition is copy-on-write: records and derived
//! definitions keep the snapshot they were created from, so later
//! declarations on one definition never leak into another.
//!
//! # Example
//!
//! ```rust
//! use evil_struct::{AttributeOptions, StructDef, Value, sym};
//! use evil_struct::coerce::strict;
//!
//! let mut base = StructDef::new("Base");
//! base.attribute("foo", AttributeOptions::new());
//!
//! let mut child = base.derive("Child");
//! child.attributes(
//!     AttributeOptions::new().coerce(strict::string()),
//!     |scope| {
//!         scope.attribute("bar", AttributeOptions::new().optional());
//!     },
//! );
//!
//! assert_eq!(base.list_of_attributes(), [sym("foo")]);
//! assert_eq!(child.list_of_attributes(), [sym("foo"), sym("bar")]);
//! ```

mod options;
mod scope;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::coerce::Coercion;
use crate::value::Symbol;

pub use options::{AttributeOptions, DefaultFn};
pub use scope::SharedScope;

/// A registered attribute declaration. Immutable once registered.
#[derive(Clone)]
pub struct AttributeDef {
    name: Symbol,
    storage: Symbol,
    coercion: Option<Arc<dyn Coercion>>,
    default: Option<DefaultFn>,
    optional: bool,
    null_as_absent: bool,
}

impl AttributeDef {
    /// Key the attribute is read from in constructor input.
    #[must_use]
    pub const fn name(&self) -> &Symbol {
        &self.name
    }

    /// Key the attribute is stored and hashified under.
    #[must_use]
    pub const fn storage(&self) -> &Symbol {
        &self.storage
    }

    /// Whether an absent input leaves the slot unassigned instead of failing.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether an explicit null input counts as a missing key.
    #[must_use]
    pub const fn treats_null_as_absent(&self) -> bool {
        self.null_as_absent
    }

    /// Whether a default producer is registered.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The coercion applied to present values, if any.
    #[must_use]
    pub fn coercion(&self) -> Option<&dyn Coercion> {
        self.coercion.as_deref()
    }

    pub(crate) fn default_producer(&self) -> Option<&DefaultFn> {
        self.default.as_ref()
    }
}

impl fmt::Debug for AttributeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDef")
            .field("name", &self.name)
            .field("storage", &self.storage)
            .field("coercion", &self.coercion)
            .field("default", &self.default.as_ref().map(|_| "<producer>"))
            .field("optional", &self.optional)
            .field("null_as_absent", &self.null_as_absent)
            .finish()
    }
}

#[derive(Clone)]
struct Definition {
    name: String,
    attributes: Vec<AttributeDef>,
    registry: Vec<Symbol>,
}

impl Definition {
    fn register(&mut self, declaration: AttributeDef) {
        let storage = declaration.storage.clone();
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|existing| existing.storage == storage)
        {
            debug!(
                definition = %self.name,
                attribute = %storage,
                "redeclared attribute replaces the earlier declaration"
            );
            *existing = declaration;
            return;
        }
        self.registry.push(storage);
        self.attributes.push(declaration);
    }
}

/// A record type: an ordered attribute registry plus its declarations.
///
/// Cloning is cheap and yields a handle to the same snapshot.
#[derive(Clone)]
pub struct StructDef {
    inner: Arc<Definition>,
}

impl StructDef {
    /// A definition named `name` with no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Definition {
                name: name.into(),
                attributes: Vec::new(),
                registry: Vec::new(),
            }),
        }
    }

    /// Name used in diagnostics and `Debug` output.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declare an attribute read from input key `name`.
    ///
    /// Redeclaring a storage name replaces the earlier declaration in place;
    /// the registry keeps a single entry at the original position.
    pub fn attribute(&mut self, name: impl Into<Symbol>, options: AttributeOptions) -> &mut Self {
        let declaration = options.into_declaration(name.into());
        Arc::make_mut(&mut self.inner).register(declaration);
        self
    }

    /// Declare several attributes sharing `options`.
    ///
    /// Inside `block`, options passed to [`SharedScope::attribute`] are
    /// merged over `options`, explicit ones winning.
    pub fn attributes<F>(&mut self, options: AttributeOptions, block: F) -> &mut Self
    where
        F: FnOnce(&mut SharedScope<'_>),
    {
        let mut scope = SharedScope::new(self, options);
        block(&mut scope);
        self
    }

    /// A new definition starting from a copy of this one's declarations.
    #[must_use]
    pub fn derive(&self, name: impl Into<String>) -> Self {
        let mut inner = (*self.inner).clone();
        inner.name = name.into();
        debug!(
            parent = %self.inner.name,
            child = %inner.name,
            attributes = inner.registry.len(),
            "derived definition"
        );
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Storage names in declaration order.
    #[must_use]
    pub fn list_of_attributes(&self) -> &[Symbol] {
        &self.inner.registry
    }

    /// Declarations in declaration order.
    #[must_use]
    pub fn declarations(&self) -> &[AttributeDef] {
        &self.inner.attributes
    }

    /// Declaration stored under `storage`.
    #[must_use]
    pub fn declaration(&self, storage: impl AsRef<str>) -> Option<&AttributeDef> {
        let storage = storage.as_ref();
        self.inner
            .attributes
            .iter()
            .find(|declaration| declaration.storage.as_str() == storage)
    }

    /// Returns `true` when both handles point at the same snapshot.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for StructDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructDef")
            .field("name", &self.inner.name)
            .field("attributes", &self.inner.attributes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the attribute registry.

    use super::*;
    use crate::coerce::strict;
    use crate::sym;

    #[test]
    fn store_as_renames_the_storage_slot() {
        let mut def = StructDef::new("Foo");
        def.attribute("some argument", AttributeOptions::new().store_as("qux"));
        let declaration = def.declaration("qux");
        assert_eq!(declaration.map(AttributeDef::name), Some(&sym("some argument")));
        assert_eq!(def.list_of_attributes(), [sym("qux")]);
    }

    #[test]
    fn redeclaration_replaces_in_place() {
        let mut def = StructDef::new("Foo");
        def.attribute("foo", AttributeOptions::new())
            .attribute("bar", AttributeOptions::new())
            .attribute("foo", AttributeOptions::new().optional());
        assert_eq!(def.list_of_attributes(), [sym("foo"), sym("bar")]);
        assert!(def.declaration("foo").is_some_and(AttributeDef::is_optional));
    }

    #[test]
    fn parent_mutation_after_derive_is_isolated() {
        let mut parent = StructDef::new("Parent");
        parent.attribute("foo", AttributeOptions::new());
        let mut child = parent.derive("Child");
        parent.attribute("late", AttributeOptions::new());
        child.attribute("own", AttributeOptions::new());

        assert_eq!(parent.list_of_attributes(), [sym("foo"), sym("late")]);
        assert_eq!(child.list_of_attributes(), [sym("foo"), sym("own")]);
        assert!(!parent.same_as(&child));
    }

    #[test]
    fn declarations_expose_their_coercion() {
        let mut def = StructDef::new("Foo");
        def.attribute("foo", AttributeOptions::new().coerce(strict::string()));
        let description = def
            .declaration("foo")
            .and_then(AttributeDef::coercion)
            .map(|coercion| coercion.describe().into_owned());
        assert_eq!(description.as_deref(), Some("strict string"));
    }
}
