//! Type introspection helpers.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the inner type if `ty` is `Option<T>`.
///
/// The check is shallow: only the final path segment is inspected, so
/// `std::option::Option<T>` and `core::option::Option<T>` match while type
/// aliases of `Option` do not.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(angle_args) = &last.arguments else {
        return None;
    };
    let GenericArgument::Type(inner) = angle_args.args.first()? else {
        return None;
    };
    Some(inner)
}
