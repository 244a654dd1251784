//! Copy same-named, type-compatible fields from one struct into another.
//!
//! Rust has no runtime reflection, so every participating type exposes its
//! fields through the [`Introspect`] trait. The companion
//! `field_merge_macros` crate derives that trait from the struct definition;
//! hand-written implementations work too.
//!
//! Merging runs in three steps:
//!
//! 1. [`accessible_fields`] enumerates the fields declared on each type that
//!    the caller's [`Access`] level may read.
//! 2. [`common_fields`] pairs fields whose names are equal and whose
//!    [`FieldType`]s are compatible. Identical types match, as do a bare
//!    primitive and its `Option` counterpart (for example `i32` and
//!    `Option<i32>`).
//! 3. [`merge_only`] copies every paired value that is present on the source
//!    and, when an allow-list is supplied, named in it.
//!
//! ```rust
//! use field_merge::{Introspect, merge, merge_only};
//!
//! #[derive(Introspect)]
//! pub struct Patch {
//!     pub enabled: Option<bool>,
//!     pub label: Option<String>,
//! }
//!
//! #[derive(Introspect)]
//! pub struct Settings {
//!     pub enabled: bool,
//!     pub label: Option<String>,
//!     pub retries: i32,
//! }
//!
//! let patch = Patch { enabled: Some(false), label: None };
//! let mut settings = Settings {
//!     enabled: true,
//!     label: Some("primary".to_owned()),
//!     retries: 3,
//! };
//!
//! merge(&patch, &mut settings);
//! assert!(!settings.enabled);
//! assert_eq!(settings.label.as_deref(), Some("primary"));
//! assert_eq!(settings.retries, 3);
//!
//! let patch = Patch { enabled: Some(true), label: Some("backup".to_owned()) };
//! merge_only(&patch, &mut settings, &["label"]);
//! assert!(!settings.enabled);
//! assert_eq!(settings.label.as_deref(), Some("backup"));
//! ```

pub use field_merge_macros::Introspect;

// Lets derive expansions inside this crate refer to `::field_merge`.
extern crate self as field_merge;

mod descriptor;
mod enumerate;
mod error;
mod introspect;
mod matching;
mod merge;
mod value;

pub use descriptor::{BOXING_TABLE, FieldDescriptor, FieldType, PrimitiveKind, TypeTag};
pub use enumerate::{accessible_field_names, accessible_fields};
pub use error::AccessError;
pub use introspect::{Access, Introspect, Visibility};
pub use matching::{FieldPair, common_field_names, common_fields};
pub use merge::{FieldMerger, MergeOptions, ShadowResolution, merge, merge_only};
pub use value::{OpaqueValue, Primitive, Value};

/// Support items referenced by `#[derive(Introspect)]` expansions.
///
/// Not part of the public API; the contents may change without notice.
#[doc(hidden)]
pub mod __private {
    pub use crate::introspect::ensure_access;
    pub use crate::value::slot::{
        read_boxed, read_nullable, read_primitive, read_reference, write_boxed, write_nullable,
        write_primitive, write_reference,
    };
}
