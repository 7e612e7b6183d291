//! Parsing utilities for the `EvilStruct` derive macro.

use syn::{Attribute, Expr};

mod input;
mod literals;
mod rename;
mod type_utils;

pub(crate) use input::{ParsedField, ParsedInput, parse_input};
use literals::lit_str;
pub(crate) use rename::RenameAll;
pub(crate) use type_utils::option_inner;

/// Container attributes from `#[evil_struct(...)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub rename_all: Option<RenameAll>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[evil_struct(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `evil_struct::`.
    pub crate_path: Option<syn::Path>,
}

/// Field attributes from `#[attribute(...)]`.
///
/// - `name` overrides the input key, taking precedence over `rename_all`.
/// - `store_as` overrides the storage key, which defaults to the input key.
/// - `default` supplies an expression of the field's type, evaluated each
///   time the input lacks the key.
/// - `coerce` replaces the generated `typed::<T>()` coercion.
/// - `optional` lets the input omit the key.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub name: Option<String>,
    pub store_as: Option<String>,
    pub default: Option<Expr>,
    pub coerce: Option<Expr>,
    pub optional: bool,
}

/// Iterate all attributes named `name` once and apply a callback.
fn parse_nested<F>(attrs: &[Attribute], name: &str, mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Parse `#[evil_struct(...)]` container attributes.
///
/// Unknown keys are rejected, like unknown field options.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_nested(attrs, "evil_struct", |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("rename_all") => {
                let value = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameAll::parse(&value)?);
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => Err(meta.error(
                "unknown evil_struct option; expected `rename_all` or `crate`",
            )),
        }
    })?;
    Ok(out)
}

/// Parse `#[attribute(...)]` field attributes.
///
/// Unknown keys are rejected so typos surface at compile time.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, syn::Error> {
    let mut out = FieldAttrs::default();
    parse_nested(attrs, "attribute", |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("name") => {
                out.name = Some(lit_str(meta, "name")?.value());
            }
            Some("store_as") => {
                out.store_as = Some(lit_str(meta, "store_as")?.value());
            }
            Some("default") => {
                out.default = Some(meta.value()?.parse::<Expr>()?);
            }
            Some("coerce") => {
                out.coerce = Some(meta.value()?.parse::<Expr>()?);
            }
            Some("optional") => {
                out.optional = true;
            }
            _ => {
                return Err(meta.error(
                    "unknown attribute option; expected one of `name`, `store_as`, \
`default`, `coerce`, or `optional`",
                ));
            }
        }
        Ok(())
    })?;
    Ok(out)
}
