//! Path to the runtime crate used by generated code.
//!
//! Expansions name every runtime item through this prefix. A caller that
//! depends on `field_merge` under another name sets
//! `#[introspect(crate = "renamed")]`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::parse::StructAttrs;

/// Prefix for runtime items: the `crate` override when present, otherwise
/// the absolute `::field_merge`.
pub(crate) fn resolve(attrs: &StructAttrs) -> TokenStream {
    attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { ::field_merge }, ToTokens::to_token_stream)
}
