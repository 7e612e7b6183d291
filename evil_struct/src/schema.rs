//! Statically typed records.
//!
//! [`Schema`] connects a plain Rust struct to a [`StructDef`]. It is normally
//! implemented with `#[derive(EvilStruct)]`, which declares one attribute per
//! field and generates typed accessors for free: the fields themselves.

use crate::StructResult;
use crate::definition::StructDef;
use crate::record::Record;
use crate::value::{Mapping, Value};

/// A Rust type backed by a record definition.
///
/// # Examples
///
/// ```rust
/// use evil_struct::{EvilStruct, Schema, mapping, sym};
///
/// #[derive(Clone, Debug, PartialEq, EvilStruct)]
/// struct User {
///     name: String,
///     #[attribute(default = 18)]
///     age: i64,
///     nickname: Option<String>,
/// }
///
/// let user = User::load(mapping! { "name" => "Joe" })?;
/// assert_eq!(user.age, 18);
/// assert_eq!(user.nickname, None);
/// assert_eq!(user.to_h(), mapping! { sym("name") => "Joe", sym("age") => 18 });
///
/// let older = user.merge(mapping! { "age" => 40 })?;
/// assert_eq!(older.age, 40);
/// # Ok::<_, std::sync::Arc<evil_struct::StructError>>(())
/// ```
pub trait Schema: Sized {
    /// The definition every instance is validated against.
    fn definition() -> StructDef;

    /// Read typed fields out of a record built from [`Schema::definition`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::StructError`] when a slot is missing or holds a
    /// value of the wrong shape.
    fn from_record(record: &Record) -> StructResult<Self>;

    /// Record view of `self`.
    fn to_record(&self) -> Record;

    /// Build an instance from loosely-typed input.
    ///
    /// # Errors
    ///
    /// Returns any construction error produced by [`StructDef::build`].
    fn load(value: impl Into<Value>) -> StructResult<Self> {
        let record = Self::definition().build(value)?;
        Self::from_record(&record)
    }

    /// Hashify `self`.
    #[must_use]
    fn to_h(&self) -> Mapping {
        self.to_record().to_h()
    }

    /// Shallow merge, see [`Record::merge`].
    ///
    /// # Errors
    ///
    /// Returns any error produced by [`Record::merge`].
    fn merge(&self, other: impl Into<Value>) -> StructResult<Self> {
        let merged = self.to_record().merge(other)?;
        Self::from_record(&merged)
    }

    /// Deep merge, see [`Record::merge_deeply`].
    ///
    /// # Errors
    ///
    /// Returns any error produced by [`Record::merge_deeply`].
    fn merge_deeply(&self, other: impl Into<Value>) -> StructResult<Self> {
        let merged = self.to_record().merge_deeply(other)?;
        Self::from_record(&merged)
    }
}
