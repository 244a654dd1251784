//! Errors reported by introspection operations.

use thiserror::Error;

use crate::introspect::{Access, Visibility};
use crate::value::Value;

/// Failure to read or write a field through [`Introspect`](crate::Introspect).
///
/// Enumeration and matching treat every variant as "field not accessible" and
/// skip the field silently. Only a failed write during a merge escalates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AccessError {
    /// The type declares no field with this name.
    #[error("`{type_name}` has no field named `{field}`")]
    NoSuchField {
        /// Type that was inspected.
        type_name: &'static str,
        /// Requested field name.
        field: String,
    },

    /// The caller's access level does not reach the field's visibility.
    #[error("field `{field}` of `{type_name}` is {visibility:?} but access is {access:?}")]
    Denied {
        /// Type that declares the field.
        type_name: &'static str,
        /// Field name.
        field: String,
        /// Declared visibility of the field.
        visibility: Visibility,
        /// Access level the caller supplied.
        access: Access,
    },

    /// The value offered to a write does not fit the field's type.
    #[error("field `{field}` of `{type_name}` cannot store a value of type `{found}`")]
    TypeMismatch {
        /// Type that declares the field.
        type_name: &'static str,
        /// Field name.
        field: String,
        /// Type of the rejected value.
        found: &'static str,
    },
}

impl AccessError {
    /// Build [`Self::NoSuchField`].
    #[must_use]
    pub fn no_such_field(type_name: &'static str, field: &str) -> Self {
        Self::NoSuchField {
            type_name,
            field: field.to_owned(),
        }
    }

    /// Build [`Self::TypeMismatch`] for a rejected `value`.
    #[must_use]
    pub fn type_mismatch(type_name: &'static str, field: &str, found: &Value) -> Self {
        Self::TypeMismatch {
            type_name,
            field: field.to_owned(),
            found: found.type_name(),
        }
    }

    /// Name of the field the error concerns.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::NoSuchField { field, .. }
            | Self::Denied { field, .. }
            | Self::TypeMismatch { field, .. } => field,
        }
    }
}
