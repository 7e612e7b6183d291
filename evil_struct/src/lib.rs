//! Core crate for the `evil_struct` record framework.
//!
//! A [`StructDef`] declares named, optionally typed attributes. Records are
//! built from loosely-typed input (mappings, pair sequences, or any object
//! convertible to a mapping), validated per attribute, and can be hashified
//! back into plain nested mappings, compared structurally, and combined with
//! shallow or deep merges that always return new records.
//!
//! The [`EvilStruct`] derive, implemented in the companion
//! `evil_struct_macros` crate, generates a [`Schema`] for plain Rust structs.
//!
//! ```rust
//! use evil_struct::coerce::strict;
//! use evil_struct::{AttributeOptions, StructDef, Value, mapping, sym};
//!
//! let mut def = StructDef::new("Foo");
//! def.attributes(AttributeOptions::new().coerce(strict::string()), |scope| {
//!     scope.attribute("foo", AttributeOptions::new());
//!     scope.attribute("bar", AttributeOptions::new().optional());
//! });
//!
//! let record = def.build(mapping! { "foo" => "FOO" })?;
//! assert_eq!(record.to_h(), mapping! { sym("foo") => "FOO" });
//!
//! let merged = record.merge_deeply(mapping! { "bar" => "BAR" })?;
//! assert_eq!(merged.get("bar"), Some(&Value::from("BAR")));
//! # Ok::<_, std::sync::Arc<evil_struct::StructError>>(())
//! ```

use std::sync::Arc;

pub use evil_struct_macros::EvilStruct;

pub mod coerce;
mod construct;
pub mod convert;
mod definition;
mod error;
pub mod merge;
mod record;
mod result_ext;
mod schema;
mod value;

pub use coerce::{CoercionError, FromValue};
pub use definition::{AttributeDef, AttributeOptions, DefaultFn, SharedScope, StructDef};
pub use error::StructError;
pub use record::{Record, Slot};
pub use result_ext::{CoercionResultExt, StructResultExt};
pub use schema::Schema;
pub use value::{Convertible, Key, Mapping, Object, Symbol, Value, ValueKind, sym};

#[cfg(feature = "serde_json")]
pub use serde_json;

/// Result type returned by fallible record operations.
pub type StructResult<T> = Result<T, Arc<StructError>>;
