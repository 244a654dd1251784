//! Parsing utilities for the `Introspect` derive macro.

use syn::{Attribute, LitStr};

mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{ParsedInput, parse_input};
use literals::lit_str;
pub(crate) use type_utils::{FieldShape, classify};
#[cfg(test)]
use type_utils::{option_inner, primitive_name};

/// Struct-level `#[introspect(...)]` settings.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[introspect(crate = "my_alias")]`, generated code
    /// references items through `my_alias::` instead of `::field_merge::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Introspect)]`.
///
/// - `skip` leaves the field out of the generated impl entirely.
/// - `base` exposes the field as the embedded ancestor rather than as a data
///   field.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub base: bool,
}

/// Iterate all `#[introspect(...)]` attributes once and apply a callback.
fn parse_introspect<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("introspect")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Extracts `#[introspect(...)]` metadata applied to a struct.
///
/// Only `crate` is recognised; any other key is a compile error.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_introspect(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s: LitStr = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(meta.error("unknown introspect attribute; expected `crate`"))
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[introspect(...)]` attributes.
///
/// Recognises `skip` and `base`. Unknown keys are rejected, as is a field
/// marked both `skip` and `base`.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> Result<FieldAttrs, syn::Error> {
    let mut out = FieldAttrs::default();
    parse_introspect(&field.attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else if meta.path.is_ident("base") {
            out.base = true;
            Ok(())
        } else {
            Err(meta.error("unknown introspect attribute; expected `skip` or `base`"))
        }
    })?;
    if out.skip && out.base {
        return Err(syn::Error::new_spanned(
            field,
            "a field cannot be both `skip` and `base`",
        ));
    }
    Ok(out)
}
