//! Field descriptors and the semantic type tags used for matching.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::introspect::Visibility;
use crate::value::Primitive;

/// The closed set of primitive kinds that have a boxed counterpart.
///
/// Each kind corresponds to exactly one Rust scalar type:
///
/// | kind      | bare type | boxed type       |
/// |-----------|-----------|------------------|
/// | `Boolean` | `bool`    | `Option<bool>`   |
/// | `Byte`    | `i8`      | `Option<i8>`     |
/// | `Char`    | `char`    | `Option<char>`   |
/// | `Float`   | `f32`     | `Option<f32>`    |
/// | `Int`     | `i32`     | `Option<i32>`    |
/// | `Long`    | `i64`     | `Option<i64>`    |
/// | `Short`   | `i16`     | `Option<i16>`    |
/// | `Double`  | `f64`     | `Option<f64>`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `bool`.
    Boolean,
    /// `i8`.
    Byte,
    /// `char`.
    Char,
    /// `f32`.
    Float,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `i16`.
    Short,
    /// `f64`.
    Double,
}

impl PrimitiveKind {
    /// Every kind, in table order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
        Self::Double,
    ];

    /// Name of the Rust scalar type backing this kind.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Byte => "i8",
            Self::Char => "char",
            Self::Float => "f32",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Short => "i16",
            Self::Double => "f64",
        }
    }

    /// [`TypeId`] of the Rust scalar type backing this kind.
    #[must_use]
    pub fn scalar_type_id(self) -> TypeId {
        match self {
            Self::Boolean => TypeId::of::<bool>(),
            Self::Byte => TypeId::of::<i8>(),
            Self::Char => TypeId::of::<char>(),
            Self::Float => TypeId::of::<f32>(),
            Self::Int => TypeId::of::<i32>(),
            Self::Long => TypeId::of::<i64>(),
            Self::Short => TypeId::of::<i16>(),
            Self::Double => TypeId::of::<f64>(),
        }
    }

    /// Kind backed by `T`, or `None` when `T` is not one of the paired
    /// scalars.
    ///
    /// ```rust
    /// use field_merge::PrimitiveKind;
    ///
    /// assert_eq!(PrimitiveKind::of::<i32>(), Some(PrimitiveKind::Int));
    /// assert_eq!(PrimitiveKind::of::<u32>(), None);
    /// ```
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Option<Self> {
        let id = TypeId::of::<T>();
        Self::ALL.into_iter().find(|kind| kind.scalar_type_id() == id)
    }
}

/// Runtime identity of a non-primitive field type.
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for log and
/// error output.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The [`TypeId`] this tag compares by.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Human-readable type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declared type of a field, reduced to what matching needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A bare primitive such as `i32`. Never absent.
    Primitive(PrimitiveKind),
    /// `Option` of a primitive. Absent when `None`.
    Boxed(PrimitiveKind),
    /// Any other type. Never absent.
    Reference(TypeTag),
    /// `Option<T>` for any non-primitive `T`. Absent when `None`; the tag
    /// names `T`.
    NullableReference(TypeTag),
}

/// Pairs of types that match despite differing representation.
///
/// The table is closed: no other cross-type pairing is ever accepted.
pub const BOXING_TABLE: [(FieldType, FieldType); 8] = [
    boxing_entry(PrimitiveKind::Boolean),
    boxing_entry(PrimitiveKind::Byte),
    boxing_entry(PrimitiveKind::Char),
    boxing_entry(PrimitiveKind::Float),
    boxing_entry(PrimitiveKind::Int),
    boxing_entry(PrimitiveKind::Long),
    boxing_entry(PrimitiveKind::Short),
    boxing_entry(PrimitiveKind::Double),
];

const fn boxing_entry(kind: PrimitiveKind) -> (FieldType, FieldType) {
    (FieldType::Primitive(kind), FieldType::Boxed(kind))
}

impl FieldType {
    /// Type of a bare primitive field `T`.
    #[must_use]
    pub const fn primitive<T: Primitive>() -> Self {
        Self::Primitive(T::KIND)
    }

    /// Type of an `Option<T>` field where `T` is primitive.
    #[must_use]
    pub const fn boxed<T: Primitive>() -> Self {
        Self::Boxed(T::KIND)
    }

    /// Type of a field holding `T`.
    ///
    /// Used where the field type is not spelled as a primitive, such as a
    /// generic parameter. A `T` that turns out to be a primitive still yields
    /// [`FieldType::Primitive`], so `Wrapper<i32>.value: T` matches a bare
    /// `i32`.
    #[must_use]
    pub fn reference<T: ?Sized + 'static>() -> Self {
        PrimitiveKind::of::<T>().map_or_else(
            || Self::Reference(TypeTag::of::<T>()),
            Self::Primitive,
        )
    }

    /// Type of an `Option<T>` field; [`FieldType::Boxed`] when `T` is a
    /// primitive.
    #[must_use]
    pub fn nullable<T: ?Sized + 'static>() -> Self {
        PrimitiveKind::of::<T>().map_or_else(
            || Self::NullableReference(TypeTag::of::<T>()),
            Self::Boxed,
        )
    }

    /// Whether a field of this type may hold the absent value.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Boxed(_) | Self::NullableReference(_))
    }

    /// Whether values may be copied between fields of `self` and `other`.
    ///
    /// True for identical types and for the primitive/boxed pairs listed in
    /// [`BOXING_TABLE`], in either direction.
    ///
    /// ```rust
    /// use field_merge::FieldType;
    ///
    /// assert!(FieldType::primitive::<i32>().is_compatible_with(&FieldType::boxed::<i32>()));
    /// assert!(!FieldType::primitive::<i32>().is_compatible_with(&FieldType::boxed::<i64>()));
    /// assert!(!FieldType::reference::<String>().is_compatible_with(&FieldType::nullable::<String>()));
    /// ```
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self == other
            || BOXING_TABLE.iter().any(|(bare, boxed)| {
                (self == bare && other == boxed) || (self == boxed && other == bare)
            })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.rust_type()),
            Self::Boxed(kind) => write!(f, "Option<{}>", kind.rust_type()),
            Self::Reference(tag) => f.write_str(tag.name()),
            Self::NullableReference(tag) => write!(f, "Option<{}>", tag.name()),
        }
    }
}

/// A single field declared on a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    ty: FieldType,
    visibility: Visibility,
}

impl FieldDescriptor {
    /// Describe a field.
    #[must_use]
    pub const fn new(name: &'static str, ty: FieldType, visibility: Visibility) -> Self {
        Self {
            name,
            ty,
            visibility,
        }
    }

    /// Case-sensitive field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type.
    #[must_use]
    pub const fn ty(&self) -> FieldType {
        self.ty
    }

    /// Declared visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }
}
