//! Input parsing for the `Introspect` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields, Generics, Ident};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// Everything the generator needs from the user's struct.
pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub generics: Generics,
    pub struct_attrs: StructAttrs,
    /// Named fields paired with their parsed attributes, in declaration order.
    pub fields: Vec<(syn::Field, FieldAttrs)>,
}

/// Gathers information from the user-provided struct.
///
/// Enums, unions, and tuple or unit structs are rejected. A struct with
/// braces but no fields is accepted.
pub(crate) fn parse_input(input: &DeriveInput) -> Result<ParsedInput, syn::Error> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Introspect requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Introspect can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        fields.push((field.clone(), parse_field_attrs(field)?));
    }
    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        struct_attrs,
        fields,
    })
}
