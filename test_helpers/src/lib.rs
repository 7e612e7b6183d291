//! Test helpers shared across crates.
//!
//! This crate provides configurable [`Convertible`] doubles and a counter for
//! default producers.

pub mod doubles {
    //! Host objects with configurable conversion capabilities.
    //!
    //! Each probe the library makes is recorded, so tests can assert both the
    //! result of a conversion and the order capabilities were tried in.
    //!
    //! # Examples
    //!
    //! ```
    //! use evil_struct::{mapping, sym};
    //! use evil_struct::convert::mapping_form;
    //! use test_helpers::doubles::Double;
    //!
    //! let double = Double::new("settings").with_to_hash(mapping! { "foo" => 1 });
    //! let value = double.to_value();
    //! assert!(mapping_form(&value).is_some());
    //! assert_eq!(double.calls(), ["to_mapping", "to_hash"]);
    //! ```

    use std::fmt;
    use std::sync::Arc;

    use evil_struct::{Convertible, Mapping, Value};
    use parking_lot::Mutex;

    /// A [`Convertible`] whose capabilities are chosen by the test.
    #[derive(Clone, Default)]
    pub struct Double {
        name: &'static str,
        to_h: Option<Mapping>,
        to_hash: Option<Mapping>,
        to_a: Option<Vec<Value>>,
        each: Option<Vec<Value>>,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Double {
        /// A double named `name` with no capabilities.
        #[must_use]
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                ..Self::default()
            }
        }

        /// Expose `mapping` through [`Convertible::to_mapping`].
        #[must_use]
        pub fn with_to_h(mut self, mapping: Mapping) -> Self {
            self.to_h = Some(mapping);
            self
        }

        /// Expose `mapping` through [`Convertible::to_hash`].
        #[must_use]
        pub fn with_to_hash(mut self, mapping: Mapping) -> Self {
            self.to_hash = Some(mapping);
            self
        }

        /// Expose `items` through [`Convertible::to_sequence`].
        #[must_use]
        pub fn with_to_a<T: Into<Value>>(mut self, items: Vec<T>) -> Self {
            self.to_a = Some(items.into_iter().map(Into::into).collect());
            self
        }

        /// Expose `items` through [`Convertible::elements`].
        #[must_use]
        pub fn with_each<T: Into<Value>>(mut self, items: Vec<T>) -> Self {
            self.each = Some(items.into_iter().map(Into::into).collect());
            self
        }

        /// Wrap a handle sharing this double's call log in a [`Value`].
        #[must_use]
        pub fn to_value(&self) -> Value {
            Value::object(self.clone())
        }

        /// Capabilities probed so far, in order.
        #[must_use]
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }

        fn record<T: Clone>(&self, probe: &'static str, answer: Option<&T>) -> Option<T> {
            self.calls.lock().push(probe);
            answer.cloned()
        }
    }

    impl fmt::Debug for Double {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "#<Double {}>", self.name)
        }
    }

    impl Convertible for Double {
        fn to_sequence(&self) -> Option<Vec<Value>> {
            self.record("to_sequence", self.to_a.as_ref())
        }

        fn to_mapping(&self) -> Option<Mapping> {
            self.record("to_mapping", self.to_h.as_ref())
        }

        fn to_hash(&self) -> Option<Mapping> {
            self.record("to_hash", self.to_hash.as_ref())
        }

        fn elements(&self) -> Option<Vec<Value>> {
            self.record("elements", self.each.as_ref())
        }
    }
}

pub mod counter {
    //! Counting default producers.
    //!
    //! # Examples
    //!
    //! ```
    //! use evil_struct::{AttributeOptions, StructDef, Value};
    //! use test_helpers::counter::CallCounter;
    //!
    //! let counter = CallCounter::new();
    //! let mut def = StructDef::new("Foo");
    //! def.attribute("foo", AttributeOptions::new().with_default(counter.producer("qux")));
    //! assert_eq!(counter.count(), 0);
    //! def.build(Value::Null).expect("build record");
    //! assert_eq!(counter.count(), 1);
    //! ```

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use evil_struct::Value;

    /// Shared invocation counter.
    #[derive(Clone, Debug, Default)]
    pub struct CallCounter {
        count: Arc<AtomicUsize>,
    }

    impl CallCounter {
        /// A counter starting at zero.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// A default producer returning `value` and bumping the counter.
        pub fn producer<T>(&self, value: T) -> impl Fn() -> Value + Send + Sync + 'static
        where
            T: Into<Value> + Clone + Send + Sync + 'static,
        {
            let count = Arc::clone(&self.count);
            move || {
                count.fetch_add(1, Ordering::SeqCst);
                value.clone().into()
            }
        }

        /// Number of producer invocations so far.
        #[must_use]
        pub fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }
}
