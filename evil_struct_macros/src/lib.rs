//! Procedural macros for `evil_struct`.
//!
//! The [`EvilStruct`] derive turns a struct with named fields into a typed
//! record: it declares one attribute per field on a lazily built
//! `StructDef`, and implements `Schema`, `FromValue`, and `From<T> for Value`
//! so derived types nest inside each other.
//!
//! Container attributes, `#[evil_struct(...)]`:
//! - `rename_all = "..."` renames every input key (`snake_case`,
//!   `camelCase`, `kebab-case`, and the other serde spellings).
//! - `crate = "..."` overrides the path generated code uses to reach
//!   `evil_struct`.
//!
//! Field attributes, `#[attribute(...)]`:
//! - `name = "..."` sets the input key explicitly.
//! - `store_as = "..."` stores and hashifies the field under another key.
//! - `default = expr` supplies a default, evaluated lazily.
//! - `coerce = expr` replaces the typed coercion with a custom one.
//! - `optional` marks the field optional; `Option<T>` fields are optional
//!   without it.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `evil_struct::Schema`.
#[proc_macro_derive(EvilStruct, attributes(evil_struct, attribute))]
pub fn derive_evil_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
