//! Conversion capabilities for opaque host objects.

use std::fmt;
use std::sync::Arc;

use super::{Mapping, Value};

/// Capabilities an opaque object may expose to constructors and to
/// hashification.
///
/// Every method defaults to `None`, meaning "capability absent". Probes run
/// in a fixed order; see [`crate::convert::hashify`] and
/// [`crate::convert::mapping_form`].
pub trait Convertible: fmt::Debug + Send + Sync {
    /// Explicit conversion to a sequence. Probed first by hashification.
    fn to_sequence(&self) -> Option<Vec<Value>> {
        None
    }

    /// Primary conversion to a mapping.
    fn to_mapping(&self) -> Option<Mapping> {
        None
    }

    /// Alternate conversion to a mapping, probed after
    /// [`Convertible::to_mapping`].
    fn to_hash(&self) -> Option<Mapping> {
        None
    }

    /// Generic enumeration of the object's elements. Probed last.
    fn elements(&self) -> Option<Vec<Value>> {
        None
    }
}

/// Shared handle to a [`Convertible`] host object.
///
/// Two handles are equal only when they point at the same object.
#[derive(Clone)]
pub struct Object(Arc<dyn Convertible>);

impl Object {
    /// Wrap `inner` in a shared handle.
    #[must_use]
    pub fn new<T: Convertible + 'static>(inner: T) -> Self {
        Self(Arc::new(inner))
    }

    /// Borrow the wrapped capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &dyn Convertible {
        &*self.0
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}
