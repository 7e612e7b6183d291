//! Input parsing for the `EvilStruct` derive macro.
//!
//! This module gathers the struct identifier, fields, and relevant attribute
//! metadata in one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, option_inner, parse_field_attrs, parse_struct_attrs};

/// A field with its keys resolved.
pub(crate) struct ParsedField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    /// Key read from constructor input.
    pub input_name: String,
    /// Key the value is stored and hashified under.
    pub storage: String,
    /// `true` for `Option<T>` fields, which map `None` to an unassigned slot.
    pub is_option: bool,
    pub attrs: FieldAttrs,
}

impl ParsedField {
    /// Whether the declaration lets the input omit the key.
    pub(crate) const fn is_optional(&self) -> bool {
        self.is_option || self.attrs.optional
    }
}

/// Everything generation needs from the user's struct.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums, unions, tuple and unit structs, and generic structs: the
/// definition lives in a `static`, which cannot depend on type parameters.
pub(crate) fn parse_input(input: &DeriveInput) -> Result<ParsedInput, syn::Error> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "EvilStruct cannot be derived for generic structs",
        ));
    }
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "EvilStruct requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "EvilStruct can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "EvilStruct requires named fields"));
        };
        let field_attrs = parse_field_attrs(&field.attrs)?;
        let is_option = option_inner(&field.ty).is_some();
        if field_attrs.optional && !is_option && field_attrs.default.is_none() {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "`optional` requires an `Option<T>` field or a `default`",
            ));
        }
        let raw_name = field_ident.to_string();
        let plain = raw_name.strip_prefix("r#").unwrap_or(&raw_name).to_owned();
        let input_name = field_attrs.name.clone().unwrap_or_else(|| {
            attrs
                .rename_all
                .map_or_else(|| plain.clone(), |rule| rule.apply(&plain))
        });
        let storage = field_attrs
            .store_as
            .clone()
            .unwrap_or_else(|| input_name.clone());
        fields.push(ParsedField {
            ident: field_ident,
            ty: field.ty.clone(),
            input_name,
            storage,
            is_option,
            attrs: field_attrs,
        });
    }
    Ok(ParsedInput {
        ident,
        attrs,
        fields,
    })
}
