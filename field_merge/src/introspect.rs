//! The introspection capability every merged type provides.

use serde::{Deserialize, Serialize};

use crate::descriptor::FieldDescriptor;
use crate::error::AccessError;
use crate::value::Value;

/// Declared visibility of a field, ordered from least to most visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Visibility {
    /// No visibility modifier.
    Private,
    /// `pub(crate)`, `pub(super)`, `pub(self)` or `pub(in path)`.
    Restricted,
    /// `pub`.
    Public,
}

/// Visibility level granted to the caller of an introspection operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Only `pub` fields.
    #[default]
    PublicOnly,
    /// `pub` and restricted-visibility fields.
    Restricted,
    /// Every field, including private ones.
    Unrestricted,
}

impl Access {
    /// Whether a field declared with `visibility` may be read or written.
    ///
    /// ```rust
    /// use field_merge::{Access, Visibility};
    ///
    /// assert!(Access::PublicOnly.permits(Visibility::Public));
    /// assert!(!Access::PublicOnly.permits(Visibility::Restricted));
    /// assert!(Access::Unrestricted.permits(Visibility::Private));
    /// ```
    #[must_use]
    pub const fn permits(self, visibility: Visibility) -> bool {
        match self {
            Self::PublicOnly => matches!(visibility, Visibility::Public),
            Self::Restricted => !matches!(visibility, Visibility::Private),
            Self::Unrestricted => true,
        }
    }
}

/// Runtime view over the fields of a struct.
///
/// Usually derived with `#[derive(Introspect)]`. A hand-written implementation
/// must keep the three field operations consistent: every name returned by
/// [`declared_fields`](Self::declared_fields) is readable and writable under
/// the same [`Access`], and `write_field` accepts any [`Value`] produced by
/// reading a field of a compatible [`FieldType`](crate::FieldType).
///
/// Types have no inheritance in Rust. A struct may instead embed one ancestor
/// and expose it through [`base`](Self::base); the ancestor's fields are
/// inherited rather than declared, so they take no part in matching but can
/// receive writes (see [`ShadowResolution`](crate::ShadowResolution)).
pub trait Introspect {
    /// Name of the concrete type, used in logs and errors.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Fields declared directly on this type, in declaration order.
    fn declared_fields(&self) -> Vec<FieldDescriptor>;

    /// Read the field called `name`.
    ///
    /// Returns `Ok(None)` when the field holds the absent value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchField`] when the type declares no such
    /// field and [`AccessError::Denied`] when `access` does not permit it.
    fn read_field(&self, name: &str, access: Access) -> Result<Option<Value>, AccessError>;

    /// Whether the field called `name` exists and `access` reaches it.
    ///
    /// Agrees with [`read_field`](Self::read_field) on every name. The
    /// default reads the field and discards the value; derived impls check
    /// the declared visibility without reading.
    ///
    /// # Errors
    ///
    /// Returns the error [`read_field`](Self::read_field) would return.
    fn check_access(&self, name: &str, access: Access) -> Result<(), AccessError> {
        self.read_field(name, access).map(drop)
    }

    /// Overwrite the field called `name` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchField`] or [`AccessError::Denied`] as for
    /// [`read_field`](Self::read_field), and [`AccessError::TypeMismatch`]
    /// when `value` cannot be stored in the field.
    fn write_field(&mut self, name: &str, value: Value, access: Access)
    -> Result<(), AccessError>;

    /// The embedded ancestor, if any.
    fn base(&self) -> Option<&dyn Introspect> {
        None
    }

    /// Mutable access to the embedded ancestor, if any.
    fn base_mut(&mut self) -> Option<&mut dyn Introspect> {
        None
    }
}

/// Fail with [`AccessError::Denied`] unless `access` permits `visibility`.
///
/// # Errors
///
/// Returns [`AccessError::Denied`] naming `type_name` and `field`.
pub fn ensure_access(
    type_name: &'static str,
    field: &str,
    visibility: Visibility,
    access: Access,
) -> Result<(), AccessError> {
    if access.permits(visibility) {
        Ok(())
    } else {
        Err(AccessError::Denied {
            type_name,
            field: field.to_owned(),
            visibility,
            access,
        })
    }
}
