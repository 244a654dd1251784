//! Field enumeration: the accessible fields declared on a type.

use crate::descriptor::FieldDescriptor;
use crate::introspect::{Access, Introspect};

/// Fields declared directly on `object`'s type that `access` may read.
///
/// A field is accessible when [`Introspect::check_access`] succeeds. Failing
/// checks are not errors; the field is left out. Fields inherited through
/// [`Introspect::base`] are never included. Declaration order is kept.
pub fn accessible_fields(object: &dyn Introspect, access: Access) -> Vec<FieldDescriptor> {
    object
        .declared_fields()
        .into_iter()
        .filter(|field| match object.check_access(field.name(), access) {
            Ok(()) => true,
            Err(err) => {
                tracing::trace!(
                    type_name = object.type_name(),
                    field = field.name(),
                    error = %err,
                    "field is not accessible"
                );
                false
            }
        })
        .collect()
}

/// Names of [`accessible_fields`], in declaration order.
pub fn accessible_field_names(object: &dyn Introspect, access: Access) -> Vec<&'static str> {
    accessible_fields(object, access)
        .iter()
        .map(FieldDescriptor::name)
        .collect()
}
