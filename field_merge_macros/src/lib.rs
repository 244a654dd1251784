//! Procedural macros for `field_merge`.
//!
//! `#[derive(Introspect)]` implements `field_merge::Introspect` for a struct
//! with named fields. The generated impl lists the declared fields with their
//! visibility and semantic type, and reads or writes them by name through the
//! helpers in `field_merge::__private`.
//!
//! Recognised attributes:
//!
//! - `#[introspect(crate = "path")]` on the struct changes the path used to
//!   reach `field_merge` in the generated code.
//! - `#[introspect(skip)]` on a field hides it from introspection.
//! - `#[introspect(base)]` on a field marks it as the embedded ancestor. The
//!   field's type must implement `Introspect`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `field_merge::Introspect`.
#[proc_macro_derive(Introspect, attributes(introspect))]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
