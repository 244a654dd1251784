//! The merge driver: copy matched fields from a source into a destination.

use serde::{Deserialize, Serialize};

use crate::descriptor::FieldDescriptor;
use crate::enumerate::accessible_fields;
use crate::error::AccessError;
use crate::introspect::{Access, Introspect};
use crate::matching::{FieldPair, common_field_names, common_fields};
use crate::value::Value;

mod resolve;

/// Which level wins when a destination field name is declared at more than
/// one level of its [`Introspect::base`] chain.
///
/// Matching only ever sees the destination's own declared fields, so this
/// affects where the write lands, not whether the field is copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowResolution {
    /// The destination type's own field.
    #[default]
    MostDerived,
    /// The field on the deepest ancestor declaring the name with a type
    /// compatible with the matched field. Ancestors whose same-named field has
    /// another type are passed over.
    LeastDerived,
}

/// Settings shared by every merge a [`FieldMerger`] performs.
///
/// Deserialisable so host applications can load it with their own
/// configuration layer; missing keys take their defaults.
///
/// ```rust
/// use field_merge::{Access, MergeOptions, ShadowResolution};
///
/// let options: MergeOptions = serde_json::from_str(r#"{"access": "restricted"}"#)?;
/// assert_eq!(options.access, Access::Restricted);
/// assert_eq!(options.shadowing, ShadowResolution::MostDerived);
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Visibility the merger may read and write.
    pub access: Access,
    /// Write target for shadowed names.
    pub shadowing: ShadowResolution,
}

/// Copies fields between [`Introspect`] values.
///
/// Every call is independent; the merger holds nothing but its options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMerger {
    options: MergeOptions,
}

impl FieldMerger {
    /// Merger using `options`.
    #[must_use]
    pub const fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Options this merger applies.
    #[must_use]
    pub const fn options(&self) -> MergeOptions {
        self.options
    }

    /// Copy every matched, present field from `source` into `destination`.
    ///
    /// Equivalent to [`merge_only`](Self::merge_only) with an empty
    /// allow-list.
    ///
    /// # Panics
    ///
    /// See [`merge_only`](Self::merge_only).
    #[track_caller]
    pub fn merge<'d, D: Introspect>(
        &self,
        source: &dyn Introspect,
        destination: &'d mut D,
    ) -> &'d mut D {
        let unrestricted: &[&str] = &[];
        self.merge_only(source, destination, unrestricted)
    }

    /// Copy matched, present fields named in `field_names` from `source`
    /// into `destination`.
    ///
    /// An empty `field_names` copies every matched field. Source fields that
    /// are absent, unmatched, inaccessible, or not listed are skipped
    /// silently. Values are cloned field by field; nested values are never
    /// merged recursively. Returns `destination` for chaining.
    ///
    /// # Panics
    ///
    /// Panics when a field that was matched and readable cannot be written.
    /// That only happens when an [`Introspect`] implementation reports a field
    /// in [`declared_fields`](Introspect::declared_fields) that its
    /// [`write_field`](Introspect::write_field) then refuses, which is a bug
    /// in that implementation.
    #[track_caller]
    pub fn merge_only<'d, D, S>(
        &self,
        source: &dyn Introspect,
        destination: &'d mut D,
        field_names: &[S],
    ) -> &'d mut D
    where
        D: Introspect,
        S: AsRef<str>,
    {
        self.copy_fields(source, &mut *destination, field_names);
        destination
    }

    /// Accessible fields declared on `object`.
    #[must_use]
    pub fn accessible_fields(&self, object: &dyn Introspect) -> Vec<FieldDescriptor> {
        accessible_fields(object, self.options.access)
    }

    /// Field pairs a merge from `source` into `destination` would consider.
    #[must_use]
    pub fn common_fields(
        &self,
        source: &dyn Introspect,
        destination: &dyn Introspect,
    ) -> Vec<FieldPair> {
        common_fields(source, destination, self.options.access)
    }

    /// Names of [`common_fields`](Self::common_fields).
    #[must_use]
    pub fn common_field_names(
        &self,
        source: &dyn Introspect,
        destination: &dyn Introspect,
    ) -> Vec<&'static str> {
        common_field_names(source, destination, self.options.access)
    }

    #[track_caller]
    fn copy_fields<S: AsRef<str>>(
        &self,
        source: &dyn Introspect,
        destination: &mut dyn Introspect,
        field_names: &[S],
    ) {
        let access = self.options.access;
        let pairs = common_fields(source, &*destination, access);
        let matched = pairs.len();
        let mut copied = 0_usize;

        for pair in pairs {
            let name = pair.name();
            if !is_allowed(field_names, name) {
                tracing::trace!(field = name, "field is not in the allow-list");
                continue;
            }
            let value = match source.read_field(name, access) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    tracing::trace!(field = name, "source value is absent");
                    continue;
                }
                Err(err) => {
                    tracing::trace!(field = name, error = %err, "source field is unreadable");
                    continue;
                }
            };
            self.store_value(destination, &pair, value);
            copied += 1;
        }

        tracing::debug!(
            source = source.type_name(),
            destination = destination.type_name(),
            matched,
            copied,
            "merged fields"
        );
    }

    #[track_caller]
    fn store_value(&self, destination: &mut dyn Introspect, pair: &FieldPair, value: Value) {
        let MergeOptions { access, shadowing } = self.options;
        let name = pair.name();
        let ty = pair.destination().ty();
        let type_name = destination.type_name();
        let written = resolve::write_target(destination, name, ty, access, shadowing)
            .ok_or_else(|| AccessError::no_such_field(type_name, name))
            .and_then(|target| target.write_field(name, value, access));
        if let Err(err) = written {
            consistency_violation(type_name, &err);
        }
    }
}

/// Copy every matched, present field from `source` into `destination` using
/// default [`MergeOptions`].
///
/// # Panics
///
/// See [`FieldMerger::merge_only`].
#[track_caller]
pub fn merge<'d, D: Introspect>(source: &dyn Introspect, destination: &'d mut D) -> &'d mut D {
    FieldMerger::default().merge(source, destination)
}

/// Copy the matched, present fields named in `field_names` from `source`
/// into `destination` using default [`MergeOptions`].
///
/// An empty `field_names` copies every matched field.
///
/// # Panics
///
/// See [`FieldMerger::merge_only`].
#[track_caller]
pub fn merge_only<'d, D, S>(
    source: &dyn Introspect,
    destination: &'d mut D,
    field_names: &[S],
) -> &'d mut D
where
    D: Introspect,
    S: AsRef<str>,
{
    FieldMerger::default().merge_only(source, destination, field_names)
}

fn is_allowed<S: AsRef<str>>(field_names: &[S], name: &str) -> bool {
    field_names.is_empty() || field_names.iter().any(|allowed| allowed.as_ref() == name)
}

#[cold]
#[track_caller]
fn consistency_violation(type_name: &'static str, err: &AccessError) -> ! {
    tracing::error!(
        type_name,
        field = err.field(),
        error = %err,
        "matched field could not be written"
    );
    panic!(
        "field `{}` of `{type_name}` passed the access check but could not be written: {err}",
        err.field()
    );
}
