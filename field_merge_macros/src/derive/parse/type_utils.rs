//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to sort
//! each field into one of the shapes the runtime understands: a bare
//! primitive, an `Option` of a primitive, any other type, or an `Option` of
//! any other type.

use syn::{GenericArgument, PathArguments, Type};

/// Scalar types with a boxed counterpart, in runtime table order.
const PRIMITIVES: [&str; 8] = ["bool", "i8", "char", "f32", "i32", "i64", "i16", "f64"];

/// How a field's declared type is read and written.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub(crate) enum FieldShape {
    /// A bare primitive; holds the field type.
    Primitive(Type),
    /// `Option<P>` for primitive `P`; holds `P`.
    Boxed(Type),
    /// Any other type; holds the field type.
    Reference(Type),
    /// `Option<T>` for non-primitive `T`; holds `T`.
    Nullable(Type),
}

/// Sort `ty` into its [`FieldShape`].
///
/// Classification is syntactic. A type parameter or alias is a
/// [`FieldShape::Reference`]; the runtime resolves it to a primitive field
/// type when it names one of the paired scalars.
pub(crate) fn classify(ty: &Type) -> FieldShape {
    if primitive_name(ty).is_some() {
        return FieldShape::Primitive(ty.clone());
    }
    match option_inner(ty) {
        Some(inner) if primitive_name(inner).is_some() => FieldShape::Boxed(inner.clone()),
        Some(inner) => FieldShape::Nullable(inner.clone()),
        None => FieldShape::Reference(ty.clone()),
    }
}

/// Returns the primitive's name if `ty` spells one of the paired scalars.
///
/// Accepts the bare name (`i32`) and the `core::primitive::i32` or
/// `std::primitive::i32` forms.
pub(crate) fn primitive_name(ty: &Type) -> Option<&'static str> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let mut segs = p.path.segments.iter().rev();
    let last = segs.next()?;
    if !last.arguments.is_none() {
        return None;
    }
    let prefix: Vec<String> = segs.rev().map(|seg| seg.ident.to_string()).collect();
    let qualified = match prefix.as_slice() {
        [] => p.path.leading_colon.is_none(),
        [root, module] => (root == "core" || root == "std") && module == "primitive",
        _ => false,
    };
    if !qualified {
        return None;
    }
    PRIMITIVES.into_iter().find(|name| last.ident == name)
}

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the inner type if `ty` is `Option<T>`.
///
/// The check is shallow: it inspects only the outermost path and supports
/// fully-qualified forms like `std::option::Option<T>`. `Option<Option<T>>`
/// yields `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}
