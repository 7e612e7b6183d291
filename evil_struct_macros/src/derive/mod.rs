//! Expansion of `#[derive(EvilStruct)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parse `input` and generate the trait implementations for it.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    Ok(generate::expand(&parsed, &krate))
}
