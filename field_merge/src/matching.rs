//! Field matching: pair source and destination fields by name and type.

use crate::descriptor::FieldDescriptor;
use crate::enumerate::accessible_fields;
use crate::introspect::{Access, Introspect};

/// A source field and the destination field it can be copied into.
///
/// Both sides share the same name; their types are compatible but may differ
/// in boxed/primitive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPair {
    source: FieldDescriptor,
    destination: FieldDescriptor,
}

impl FieldPair {
    /// Pair two descriptors if they match.
    ///
    /// Returns `None` when the names differ or the types are incompatible.
    #[must_use]
    pub fn try_new(source: FieldDescriptor, destination: FieldDescriptor) -> Option<Self> {
        (source.name() == destination.name()
            && source.ty().is_compatible_with(&destination.ty()))
        .then_some(Self {
            source,
            destination,
        })
    }

    /// Shared field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.source.name()
    }

    /// Source-side descriptor.
    #[must_use]
    pub const fn source(&self) -> &FieldDescriptor {
        &self.source
    }

    /// Destination-side descriptor.
    #[must_use]
    pub const fn destination(&self) -> &FieldDescriptor {
        &self.destination
    }
}

/// Pair every accessible source field with a compatible destination field.
///
/// For each source field the first accessible destination field with the same
/// name is considered; the pair is kept only when the types are compatible.
/// Source fields without a partner are dropped. The result follows the
/// source's declaration order and holds at most one pair per source field.
pub fn common_fields(
    source: &dyn Introspect,
    destination: &dyn Introspect,
    access: Access,
) -> Vec<FieldPair> {
    let destination_fields = accessible_fields(destination, access);
    accessible_fields(source, access)
        .into_iter()
        .filter_map(|source_field| {
            let candidate = destination_fields
                .iter()
                .find(|field| field.name() == source_field.name())?;
            let pair = FieldPair::try_new(source_field, *candidate);
            if pair.is_none() {
                tracing::trace!(
                    field = source_field.name(),
                    source_type = %source_field.ty(),
                    destination_type = %candidate.ty(),
                    "field types are incompatible"
                );
            }
            pair
        })
        .collect()
}

/// Names of [`common_fields`], in source declaration order.
pub fn common_field_names(
    source: &dyn Introspect,
    destination: &dyn Introspect,
    access: Access,
) -> Vec<&'static str> {
    common_fields(source, destination, access)
        .iter()
        .map(FieldPair::name)
        .collect()
}
