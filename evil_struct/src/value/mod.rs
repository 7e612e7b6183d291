//! Dynamic value tree consumed and produced by records.
//!
//! Records are built from loosely-typed input and hashified back into plain
//! nested mappings. [`Value`] is the closed set of shapes that flow through
//! both directions. Host objects that are neither mappings nor sequences
//! participate through the [`Convertible`] capability trait.

mod key;
mod object;
mod ser;

#[cfg(feature = "serde_json")]
mod json;

use std::fmt;

use indexmap::IndexMap;

use crate::Record;

pub use key::{Key, Symbol, sym};
pub use object::{Convertible, Object};

/// Insertion-ordered mapping with symbolic or string keys.
///
/// Equality ignores insertion order, matching how records compare.
pub type Mapping = IndexMap<Key, Value>;

/// A loosely-typed value accepted by constructors and produced by
/// hashification.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value. Never converted during hashification.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Integer(i64),
    /// Floating point scalar.
    Float(f64),
    /// UTF-8 string scalar.
    String(String),
    /// Interned-style symbolic name.
    Symbol(Symbol),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Mapping from keys to values.
    Mapping(Mapping),
    /// A constructed record.
    Record(Record),
    /// An opaque host object exposing conversion capabilities.
    Object(Object),
}

/// Discriminant of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Float`]
    Float,
    /// [`Value::String`]
    String,
    /// [`Value::Symbol`]
    Symbol,
    /// [`Value::Sequence`]
    Sequence,
    /// [`Value::Mapping`]
    Mapping,
    /// [`Value::Record`]
    Record,
    /// [`Value::Object`]
    Object,
}

impl ValueKind {
    /// Human-readable name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Record => "record",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Wrap a host object so it can take part in construction and
    /// hashification.
    #[must_use]
    pub fn object<T: Convertible + 'static>(inner: T) -> Self {
        Self::Object(Object::new(inner))
    }

    /// Returns the discriminant of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Record(_) => ValueKind::Record,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the string contents of a string or symbol.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrow the elements held by [`Value::Sequence`].
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the record held by [`Value::Record`].
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(record), rhs) | (rhs, Self::Record(record)) => record.equals(rhs),
            (Self::Null, Self::Null) => true,
            (Self::Bool(lhs), Self::Bool(rhs)) => lhs == rhs,
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs == rhs,
            (Self::String(lhs), Self::String(rhs)) => lhs == rhs,
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs == rhs,
            (Self::Sequence(lhs), Self::Sequence(rhs)) => lhs == rhs,
            (Self::Mapping(lhs), Self::Mapping(rhs)) => lhs == rhs,
            (Self::Object(lhs), Self::Object(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => fmt::Debug::fmt(b, f),
            Self::Integer(i) => fmt::Debug::fmt(i, f),
            Self::Float(x) => fmt::Debug::fmt(x, f),
            Self::String(s) => fmt::Debug::fmt(s, f),
            Self::Symbol(s) => fmt::Debug::fmt(s, f),
            Self::Sequence(items) => f.debug_list().entries(items).finish(),
            Self::Mapping(mapping) => f.debug_map().entries(mapping).finish(),
            Self::Record(record) => fmt::Debug::fmt(record, f),
            Self::Object(object) => fmt::Debug::fmt(object, f),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Build a [`Mapping`] from `key => value` pairs.
///
/// Keys go through [`Key::from`], so `sym("foo")` produces a symbolic key and
/// `"foo"` a string key. Values go through [`Value::from`].
///
/// ```rust
/// use evil_struct::{Key, Value, mapping, sym};
///
/// let map = mapping! { sym("foo") => "bar", "baz" => 1 };
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&Key::from(sym("foo"))), Some(&Value::from("bar")));
/// assert_eq!(map.get(&Key::from("baz")), Some(&Value::from(1)));
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Mapping::new();
        $( map.insert($crate::Key::from($key), $crate::Value::from($value)); )+
        map
    }};
}
