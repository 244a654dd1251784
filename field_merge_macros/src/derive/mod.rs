//! Expansion of `#[derive(Introspect)]`.
//!
//! Parsing validates the input and reads attributes, planning sorts each field
//! into its runtime shape, and generation emits the trait impl.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;
mod plan;

/// Expand the derive for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let plan = plan::IntrospectPlan::from_parsed(parsed)?;
    Ok(generate::introspect_impl(&plan))
}
