//! Per-field plans assembled from the parsed derive input.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Generics, Ident, Type, WherePredicate, parse_quote};

use super::crate_path;
use super::parse::{FieldShape, ParsedInput, classify};

/// Declared visibility of a field, mirrored from `field_merge::Visibility`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum VisibilityLevel {
    Private,
    Restricted,
    Public,
}

impl VisibilityLevel {
    fn of(vis: &syn::Visibility) -> Self {
        if matches!(vis, syn::Visibility::Public(_)) {
            Self::Public
        } else if matches!(vis, syn::Visibility::Inherited) {
            Self::Private
        } else {
            Self::Restricted
        }
    }

    /// Tokens naming the runtime variant under `krate`.
    pub(crate) fn tokens(self, krate: &TokenStream) -> TokenStream {
        match self {
            Self::Private => quote! { #krate::Visibility::Private },
            Self::Restricted => quote! { #krate::Visibility::Restricted },
            Self::Public => quote! { #krate::Visibility::Public },
        }
    }
}

/// A data field exposed through the generated impl.
pub(crate) struct FieldPlan {
    pub ident: Ident,
    /// Field name as seen at runtime, without any `r#` prefix.
    pub name: String,
    pub shape: FieldShape,
    pub visibility: VisibilityLevel,
}

/// The field marked `#[introspect(base)]`.
pub(crate) struct BasePlan {
    pub ident: Ident,
    pub ty: Type,
}

/// Everything needed to emit one `Introspect` impl.
pub(crate) struct IntrospectPlan {
    pub ident: Ident,
    pub generics: Generics,
    pub krate: TokenStream,
    pub fields: Vec<FieldPlan>,
    pub base: Option<BasePlan>,
}

impl IntrospectPlan {
    /// Build the plan, dropping skipped fields and separating the base.
    ///
    /// Fails when more than one field is marked `base`.
    pub(crate) fn from_parsed(parsed: ParsedInput) -> syn::Result<Self> {
        let krate = crate_path::resolve(&parsed.struct_attrs);
        let mut fields = Vec::with_capacity(parsed.fields.len());
        let mut base = None;

        for (field, attrs) in parsed.fields {
            if attrs.skip {
                continue;
            }
            let Some(ident) = field.ident.clone() else {
                return Err(syn::Error::new_spanned(
                    &field,
                    "Introspect requires named fields",
                ));
            };
            if attrs.base {
                if base.is_some() {
                    return Err(syn::Error::new_spanned(
                        &field,
                        "only one field can be marked `base`",
                    ));
                }
                base = Some(BasePlan { ident, ty: field.ty });
                continue;
            }
            fields.push(FieldPlan {
                name: ident.unraw().to_string(),
                shape: classify(&field.ty),
                visibility: VisibilityLevel::of(&field.vis),
                ident,
            });
        }

        Ok(Self {
            ident: parsed.ident,
            generics: parsed.generics,
            krate,
            fields,
            base,
        })
    }

    /// Extra `where` predicates needed when the struct is generic.
    ///
    /// Values of non-primitive fields are cloned into type-tagged boxes, which
    /// needs `Clone + 'static`; the base must itself implement `Introspect`.
    /// Non-generic structs get no extra predicates.
    pub(crate) fn bounds(&self) -> Vec<WherePredicate> {
        if self.generics.params.is_empty() {
            return Vec::new();
        }
        let krate = &self.krate;
        let mut bounds: Vec<WherePredicate> = self
            .fields
            .iter()
            .filter_map(|field| match &field.shape {
                FieldShape::Reference(ty) | FieldShape::Nullable(ty) => {
                    Some(parse_quote!(#ty: ::core::clone::Clone + 'static))
                }
                FieldShape::Primitive(_) | FieldShape::Boxed(_) => None,
            })
            .collect();
        if let Some(base) = &self.base {
            let ty = &base.ty;
            bounds.push(parse_quote!(#ty: #krate::Introspect));
        }
        bounds
    }
}
