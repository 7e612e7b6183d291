//! Mapping keys and symbolic names.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A symbolic name, the canonical form of every attribute and record key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a symbol from any string-like name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Borrow the symbol's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`Symbol::new`].
#[must_use]
pub fn sym(name: impl AsRef<str>) -> Symbol {
    Symbol::new(name)
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&Symbol> for Symbol {
    fn from(name: &Symbol) -> Self {
        name.clone()
    }
}

/// A mapping key: either symbolic or a plain string.
///
/// `Key::Symbol("foo")` and `Key::String("foo")` are distinct keys inside a
/// [`crate::Mapping`]. Constructors and merges collapse both forms onto the
/// symbolic one with [`Key::into_symbol`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Symbolic key, as produced by hashification of a record.
    Symbol(Symbol),
    /// String key, as produced by JSON input.
    String(String),
}

impl Key {
    /// Borrow the textual name of the key regardless of its form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Symbol(name) => name.as_str(),
            Self::String(name) => name,
        }
    }

    /// Consume the key and return its canonical symbolic form.
    #[must_use]
    pub fn into_symbol(self) -> Symbol {
        match self {
            Self::Symbol(name) => name,
            Self::String(name) => Symbol::from(name),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => fmt::Debug::fmt(name, f),
            Self::String(name) => fmt::Debug::fmt(name, f),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Symbol> for Key {
    fn from(name: Symbol) -> Self {
        Self::Symbol(name)
    }
}

impl From<&Symbol> for Key {
    fn from(name: &Symbol) -> Self {
        Self::Symbol(name.clone())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::String(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::String(name)
    }
}
