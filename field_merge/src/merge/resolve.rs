//! Write-time lookup of the destination field through the base chain.
//!
//! Matching uses descriptors from the destination's own declarations. The
//! write re-resolves the name against every level of the chain so that a
//! [`ShadowResolution::LeastDerived`] policy can route it to an ancestor.
//! Only levels whose field type is compatible with the matched type qualify.

use crate::descriptor::FieldType;
use crate::introspect::{Access, Introspect};

use super::ShadowResolution;

/// The level of `object`'s chain that should receive a write to `name`.
pub(super) fn write_target<'a>(
    object: &'a mut dyn Introspect,
    name: &str,
    ty: FieldType,
    access: Access,
    shadowing: ShadowResolution,
) -> Option<&'a mut dyn Introspect> {
    let depth = write_depth(&*object, name, ty, access, shadowing)?;
    ancestor_mut(object, depth)
}

/// Distance from `object` to the level selected by `shadowing`, counting
/// only levels that declare `name` with a type compatible with `ty` and
/// permit `access` to it.
pub(super) fn write_depth(
    object: &dyn Introspect,
    name: &str,
    ty: FieldType,
    access: Access,
    shadowing: ShadowResolution,
) -> Option<usize> {
    let mut depths = std::iter::successors(Some(object), |level| level.base())
        .enumerate()
        .filter(|(_, level)| declares_compatible(*level, name, ty, access))
        .map(|(depth, _)| depth);
    match shadowing {
        ShadowResolution::MostDerived => depths.next(),
        ShadowResolution::LeastDerived => depths.last(),
    }
}

fn declares_compatible(
    level: &dyn Introspect,
    name: &str,
    ty: FieldType,
    access: Access,
) -> bool {
    level
        .declared_fields()
        .iter()
        .any(|field| field.name() == name && field.ty().is_compatible_with(&ty))
        && level.check_access(name, access).is_ok()
}

fn ancestor_mut(object: &mut dyn Introspect, depth: usize) -> Option<&mut dyn Introspect> {
    match depth.checked_sub(1) {
        None => Some(object),
        Some(remaining) => ancestor_mut(object.base_mut()?, remaining),
    }
}
