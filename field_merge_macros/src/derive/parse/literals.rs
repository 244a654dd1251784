//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitStr};

/// Parses a literal from an attribute using `extractor`.
///
/// `expected` names the literal kind in the error reported when `extractor`
/// rejects it.
fn parse_lit<T, F>(
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
    expected: &str,
    extractor: F,
) -> Result<T, syn::Error>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be a {expected}")))
}

/// Parses a string literal from an attribute.
///
/// # Examples
///
/// ```rust,ignore
/// use syn::Attribute;
/// let attr: Attribute = syn::parse_quote!(#[introspect(crate = "alias")]);
/// attr.parse_nested_meta(|meta| {
///     let s = lit_str(&meta, "crate")?;
///     assert_eq!(s.value(), "alias");
///     Ok(())
/// }).unwrap();
/// ```
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<LitStr, syn::Error> {
    parse_lit(meta, key, "string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}
