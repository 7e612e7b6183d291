//! Code generation for `#[derive(EvilStruct)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

use super::parse::{ParsedField, ParsedInput};

/// Generate the `Schema`, `From<T> for Value`, and `FromValue`
/// implementations for `parsed`.
pub(crate) fn expand(parsed: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &parsed.ident;
    let definition_name = LitStr::new(&ident.to_string(), ident.span());
    let declarations = parsed.fields.iter().map(|field| declaration_tokens(field, krate));
    let extractions = parsed.fields.iter().map(extraction_tokens);
    let slots = parsed.fields.iter().map(|field| slot_tokens(field, krate));

    quote! {
        impl #krate::Schema for #ident {
            fn definition() -> #krate::StructDef {
                static DEFINITION: ::std::sync::LazyLock<#krate::StructDef> =
                    ::std::sync::LazyLock::new(|| {
                        let mut definition = #krate::StructDef::new(#definition_name);
                        #( #declarations )*
                        definition
                    });
                ::core::clone::Clone::clone(&*DEFINITION)
            }

            fn from_record(record: &#krate::Record) -> #krate::StructResult<Self> {
                ::core::result::Result::Ok(Self {
                    #( #extractions, )*
                })
            }

            fn to_record(&self) -> #krate::Record {
                #krate::Record::from_parts(
                    <Self as #krate::Schema>::definition(),
                    ::std::vec![ #( #slots, )* ],
                )
            }
        }

        impl ::core::convert::From<#ident> for #krate::Value {
            fn from(value: #ident) -> Self {
                #krate::Value::Record(#krate::Schema::to_record(&value))
            }
        }

        impl #krate::FromValue for #ident {
            fn from_value(
                value: &#krate::Value,
            ) -> ::core::result::Result<Self, #krate::CoercionError> {
                <Self as #krate::Schema>::load(::core::clone::Clone::clone(value))
                    .map_err(#krate::CoercionError::from)
            }
        }
    }
}

fn declaration_tokens(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let ty = &field.ty;
    let input_name = &field.input_name;
    let coercion = field.attrs.coerce.as_ref().map_or_else(
        || quote! { #krate::coerce::typed::<#ty>() },
        |expr| quote! { #expr },
    );
    let optional = field.is_optional().then(|| quote! { .optional() });
    let null_as_absent = field.is_option.then(|| quote! { .null_as_absent() });
    let default = field.attrs.default.as_ref().map(|expr| {
        quote! {
            .with_default(|| {
                let value: #ty = #expr;
                #krate::Value::from(value)
            })
        }
    });
    let store_as = (field.storage != field.input_name).then(|| {
        let storage = &field.storage;
        quote! { .store_as(#storage) }
    });
    quote! {
        definition.attribute(
            #input_name,
            #krate::AttributeOptions::new()
                .coerce(#coercion)
                #optional
                #null_as_absent
                #default
                #store_as,
        );
    }
}

fn extraction_tokens(field: &ParsedField) -> TokenStream {
    let ident = &field.ident;
    let ty = &field.ty;
    let storage = &field.storage;
    quote! { #ident: record.extract::<#ty>(#storage)? }
}

fn slot_tokens(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let ident = &field.ident;
    let storage = &field.storage;
    let slot = if field.is_option {
        quote! { #krate::Slot::from_option(::core::clone::Clone::clone(&self.#ident)) }
    } else {
        quote! {
            #krate::Slot::Assigned(#krate::Value::from(::core::clone::Clone::clone(&self.#ident)))
        }
    };
    quote! { (#krate::Symbol::new(#storage), #slot) }
}

#[cfg(test)]
mod tests {
    //! Unit tests for generated declarations.

    use super::*;
    use crate::derive::parse::parse_input;
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use syn::{DeriveInput, parse_quote};

    fn expand_to_string(input: &DeriveInput) -> Result<String> {
        let parsed = parse_input(input)?;
        Ok(expand(&parsed, &quote! { evil_struct }).to_string())
    }

    #[rstest]
    fn option_fields_are_declared_optional() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Foo {
                bar: Option<String>,
            }
        };
        let code = expand_to_string(&input)?;
        ensure!(code.contains(". optional ()"), "missing optional: {code}");
        ensure!(code.contains(". null_as_absent ()"), "missing null_as_absent: {code}");
        ensure!(code.contains("Slot :: from_option"), "missing from_option: {code}");
        Ok(())
    }

    #[rstest]
    fn store_as_is_emitted_only_when_keys_differ() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Foo {
                #[attribute(name = "some argument", store_as = "qux")]
                qux: String,
                plain: String,
            }
        };
        let code = expand_to_string(&input)?;
        ensure!(code.contains(". store_as (\"qux\")"), "missing store_as: {code}");
        ensure!(code.matches(". store_as").count() == 1, "unexpected store_as: {code}");
        ensure!(code.contains("record . extract :: < String > (\"qux\")"), "{code}");
        Ok(())
    }

    #[rstest]
    #[case::custom_coercion(
        parse_quote! {
            struct Foo {
                #[attribute(coerce = evil_struct::coerce::coercible::integer())]
                count: i64,
            }
        },
        "coercible :: integer ()",
    )]
    #[case::typed_coercion(
        parse_quote! { struct Foo { count: i64 } },
        "coerce :: typed :: < i64 > ()",
    )]
    #[case::default_expression(
        parse_quote! {
            struct Foo {
                #[attribute(default = 18)]
                age: i64,
            }
        },
        "let value : i64 = 18 ;",
    )]
    fn declarations_carry_field_options(
        #[case] input: DeriveInput,
        #[case] expected: &str,
    ) -> Result<()> {
        let code = expand_to_string(&input)?;
        ensure!(code.contains(expected), "expected {expected:?} in {code}");
        Ok(())
    }
}
