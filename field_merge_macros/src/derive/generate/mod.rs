//! Code generation for `#[derive(Introspect)]`.
//!
//! Emits a single `Introspect` impl. Each field contributes a descriptor and
//! an access, read, and write arm; the shape decided during planning selects
//! the `field_merge::__private` helper pair used by the read and write arms.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::FieldShape;
use super::plan::{FieldPlan, IntrospectPlan};

/// Token fragments contributed by one field.
struct FieldTokens {
    descriptor: TokenStream,
    access_arm: TokenStream,
    read_arm: TokenStream,
    write_arm: TokenStream,
}

/// Semantic type expression for a field.
fn field_type_tokens(krate: &TokenStream, shape: &FieldShape) -> TokenStream {
    match shape {
        FieldShape::Primitive(ty) => quote! { #krate::FieldType::primitive::<#ty>() },
        FieldShape::Boxed(ty) => quote! { #krate::FieldType::boxed::<#ty>() },
        FieldShape::Reference(ty) => quote! { #krate::FieldType::reference::<#ty>() },
        FieldShape::Nullable(ty) => quote! { #krate::FieldType::nullable::<#ty>() },
    }
}

fn field_tokens(krate: &TokenStream, field: &FieldPlan) -> FieldTokens {
    let ident = &field.ident;
    let name = field.name.as_str();
    let visibility = field.visibility.tokens(krate);
    let field_type = field_type_tokens(krate, &field.shape);
    let helpers = quote! { #krate::__private };

    let (read, write) = match &field.shape {
        FieldShape::Primitive(_) => (
            quote! { #helpers::read_primitive(&self.#ident) },
            quote! { #helpers::write_primitive(&mut self.#ident, value) },
        ),
        FieldShape::Boxed(_) => (
            quote! { #helpers::read_boxed(self.#ident.as_ref()) },
            quote! { #helpers::write_boxed(&mut self.#ident, value) },
        ),
        FieldShape::Reference(_) => (
            quote! { #helpers::read_reference(&self.#ident) },
            quote! { #helpers::write_reference(&mut self.#ident, value) },
        ),
        FieldShape::Nullable(_) => (
            quote! { #helpers::read_nullable(self.#ident.as_ref()) },
            quote! { #helpers::write_nullable(&mut self.#ident, value) },
        ),
    };

    FieldTokens {
        descriptor: quote! {
            #krate::FieldDescriptor::new(#name, #field_type, #visibility)
        },
        access_arm: quote! {
            #name => #helpers::ensure_access(type_name, name, #visibility, access),
        },
        read_arm: quote! {
            #name => {
                #helpers::ensure_access(type_name, name, #visibility, access)?;
                ::core::result::Result::Ok(#read)
            }
        },
        write_arm: quote! {
            #name => {
                #helpers::ensure_access(type_name, name, #visibility, access)?;
                #write.map_err(|rejected| {
                    #krate::AccessError::type_mismatch(type_name, name, &rejected)
                })
            }
        },
    }
}

/// `base` and `base_mut` overrides, or nothing when no base is declared.
fn base_methods(plan: &IntrospectPlan) -> TokenStream {
    let Some(base) = &plan.base else {
        return TokenStream::new();
    };
    let krate = &plan.krate;
    let ident = &base.ident;
    quote! {
        fn base(&self) -> ::core::option::Option<&dyn #krate::Introspect> {
            ::core::option::Option::Some(&self.#ident)
        }

        fn base_mut(&mut self) -> ::core::option::Option<&mut dyn #krate::Introspect> {
            ::core::option::Option::Some(&mut self.#ident)
        }
    }
}

/// Emit the `Introspect` impl described by `plan`.
pub(crate) fn introspect_impl(plan: &IntrospectPlan) -> TokenStream {
    let krate = &plan.krate;
    let ident = &plan.ident;

    let mut generics = plan.generics.clone();
    let bounds = plan.bounds();
    if !bounds.is_empty() {
        generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields: Vec<FieldTokens> = plan
        .fields
        .iter()
        .map(|field| field_tokens(krate, field))
        .collect();
    let descriptors = fields.iter().map(|field| &field.descriptor);
    let access_arms = fields.iter().map(|field| &field.access_arm);
    let read_arms = fields.iter().map(|field| &field.read_arm);
    let write_arms = fields.iter().map(|field| &field.write_arm);
    // Without fields only the fallback arm remains, which ignores these.
    let (unused_read, unused_write) = if fields.is_empty() {
        (quote! { let _ = access; }, quote! { let _ = (value, access); })
    } else {
        (TokenStream::new(), TokenStream::new())
    };
    let base = base_methods(plan);

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Introspect for #ident #ty_generics #where_clause {
            fn declared_fields(&self) -> ::std::vec::Vec<#krate::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn check_access(
                &self,
                name: &str,
                access: #krate::Access,
            ) -> ::core::result::Result<(), #krate::AccessError> {
                let type_name = ::core::any::type_name::<Self>();
                #unused_read
                match name {
                    #(#access_arms)*
                    _ => ::core::result::Result::Err(
                        #krate::AccessError::no_such_field(type_name, name),
                    ),
                }
            }

            fn read_field(
                &self,
                name: &str,
                access: #krate::Access,
            ) -> ::core::result::Result<
                ::core::option::Option<#krate::Value>,
                #krate::AccessError,
            > {
                let type_name = ::core::any::type_name::<Self>();
                #unused_read
                match name {
                    #(#read_arms)*
                    _ => ::core::result::Result::Err(
                        #krate::AccessError::no_such_field(type_name, name),
                    ),
                }
            }

            fn write_field(
                &mut self,
                name: &str,
                value: #krate::Value,
                access: #krate::Access,
            ) -> ::core::result::Result<(), #krate::AccessError> {
                let type_name = ::core::any::type_name::<Self>();
                #unused_write
                match name {
                    #(#write_arms)*
                    _ => ::core::result::Result::Err(
                        #krate::AccessError::no_such_field(type_name, name),
                    ),
                }
            }

            #base
        }
    }
}
