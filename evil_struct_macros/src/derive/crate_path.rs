//! Where generated code finds the runtime crate.
//!
//! A workspace that renames the dependency (`records = { package =
//! "evil_struct", ... }`) or re-exports it from a facade crate writes
//! `#[evil_struct(crate = "records")]`, and every emitted path starts from
//! that prefix.

use proc_macro2::TokenStream;
use quote::quote;

/// Prefix for paths in generated code: the override when one was given,
/// `evil_struct` otherwise.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { evil_struct }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, "evil_struct")]
    #[case::renamed(Some("records"), "records")]
    #[case::reexported(Some("facade::records"), "facade :: records")]
    #[case::absolute(Some("::records"), ":: records")]
    fn prefix_follows_the_override(
        #[case] override_path: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = override_path.map(syn::parse_str::<syn::Path>).transpose()?;
        assert_eq!(resolve(parsed.as_ref()).to_string(), expected);
        Ok(())
    }
}
