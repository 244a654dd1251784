//! Dynamically typed field values.
//!
//! A [`Value`] carries one field's contents from the source object to the
//! destination. Primitive kinds get a variant each so that a bare `i32` and an
//! `Option<i32>` exchange the same representation; every other type travels
//! as a type-tagged [`OpaqueValue`].

use std::any::Any;
use std::fmt;

use crate::descriptor::{PrimitiveKind, TypeTag};

pub(crate) mod slot;

/// A value read from, or about to be written to, a field.
///
/// The absent value is not a variant: reads return `Option<Value>` and use
/// `None` for it.
#[derive(Debug)]
pub enum Value {
    /// [`PrimitiveKind::Boolean`].
    Bool(bool),
    /// [`PrimitiveKind::Byte`].
    Byte(i8),
    /// [`PrimitiveKind::Char`].
    Char(char),
    /// [`PrimitiveKind::Float`].
    Float(f32),
    /// [`PrimitiveKind::Int`].
    Int(i32),
    /// [`PrimitiveKind::Long`].
    Long(i64),
    /// [`PrimitiveKind::Short`].
    Short(i16),
    /// [`PrimitiveKind::Double`].
    Double(f64),
    /// Any non-primitive value.
    Object(OpaqueValue),
}

impl Value {
    /// Wrap a value of any type.
    ///
    /// A `T` that is one of the [`Primitive`] types produces its primitive
    /// variant, so generic code reaches the same representation as code
    /// naming the type directly.
    ///
    /// ```rust
    /// use field_merge::{PrimitiveKind, Value};
    ///
    /// assert_eq!(Value::object(7_i64).kind(), Some(PrimitiveKind::Long));
    /// assert_eq!(Value::object(String::new()).kind(), None);
    /// ```
    #[must_use]
    pub fn object<T: 'static>(value: T) -> Self {
        let boxed: Box<dyn Any> = Box::new(value);
        unbox_primitive(boxed).unwrap_or_else(|inner| {
            Self::Object(OpaqueValue {
                tag: TypeTag::of::<T>(),
                inner,
            })
        })
    }

    /// Extract a `T`, whichever variant carries it.
    ///
    /// The inverse of [`Value::object`].
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the value does not hold a `T`.
    pub fn downcast<T: 'static>(self) -> Result<T, Self> {
        match self.kind() {
            None => match self {
                Self::Object(object) => object.downcast::<T>().map_err(Self::Object),
                other => Err(other),
            },
            Some(PrimitiveKind::Boolean) => take_primitive::<bool, T>(self),
            Some(PrimitiveKind::Byte) => take_primitive::<i8, T>(self),
            Some(PrimitiveKind::Char) => take_primitive::<char, T>(self),
            Some(PrimitiveKind::Float) => take_primitive::<f32, T>(self),
            Some(PrimitiveKind::Int) => take_primitive::<i32, T>(self),
            Some(PrimitiveKind::Long) => take_primitive::<i64, T>(self),
            Some(PrimitiveKind::Short) => take_primitive::<i16, T>(self),
            Some(PrimitiveKind::Double) => take_primitive::<f64, T>(self),
        }
    }

    /// Primitive kind of the value, or `None` for [`Value::Object`].
    #[must_use]
    pub const fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Bool(_) => Some(PrimitiveKind::Boolean),
            Self::Byte(_) => Some(PrimitiveKind::Byte),
            Self::Char(_) => Some(PrimitiveKind::Char),
            Self::Float(_) => Some(PrimitiveKind::Float),
            Self::Int(_) => Some(PrimitiveKind::Int),
            Self::Long(_) => Some(PrimitiveKind::Long),
            Self::Short(_) => Some(PrimitiveKind::Short),
            Self::Double(_) => Some(PrimitiveKind::Double),
            Self::Object(_) => None,
        }
    }

    /// Name of the Rust type the value holds.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => PrimitiveKind::Boolean.rust_type(),
            Self::Byte(_) => PrimitiveKind::Byte.rust_type(),
            Self::Char(_) => PrimitiveKind::Char.rust_type(),
            Self::Float(_) => PrimitiveKind::Float.rust_type(),
            Self::Int(_) => PrimitiveKind::Int.rust_type(),
            Self::Long(_) => PrimitiveKind::Long.rust_type(),
            Self::Short(_) => PrimitiveKind::Short.rust_type(),
            Self::Double(_) => PrimitiveKind::Double.rust_type(),
            Self::Object(object) => object.tag().name(),
        }
    }
}

/// A boxed value of some non-primitive type, tagged with that type.
pub struct OpaqueValue {
    tag: TypeTag,
    inner: Box<dyn Any>,
}

impl OpaqueValue {
    /// Box `value`.
    #[must_use]
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Type of the boxed value.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Borrow the value as `T`, if that is its type.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Unbox the value as `T`.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the value is not a `T`.
    pub fn downcast<T: 'static>(self) -> Result<T, Self> {
        let Self { tag, inner } = self;
        inner
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|rejected| Self {
                tag,
                inner: rejected,
            })
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.tag).finish()
    }
}

/// Primitive payload of `boxed`, or `boxed` back when it holds another type.
fn unbox_primitive(boxed: Box<dyn Any>) -> Result<Value, Box<dyn Any>> {
    fn attempt<P: Primitive>(boxed: Box<dyn Any>) -> Result<Value, Box<dyn Any>> {
        boxed.downcast::<P>().map(|inner| inner.into_value())
    }
    attempt::<bool>(boxed)
        .or_else(attempt::<i8>)
        .or_else(attempt::<char>)
        .or_else(attempt::<f32>)
        .or_else(attempt::<i32>)
        .or_else(attempt::<i64>)
        .or_else(attempt::<i16>)
        .or_else(attempt::<f64>)
}

/// `value`'s `P` payload as a `T`, for the case where `T` is `P`.
fn take_primitive<P: Primitive, T: 'static>(value: Value) -> Result<T, Value> {
    let inner = P::from_value(value)?;
    let boxed: Box<dyn Any> = Box::new(inner);
    boxed
        .downcast::<T>()
        .map(|typed| *typed)
        .map_err(|_| inner.into_value())
}

mod sealed {
    pub trait Sealed {}
}

/// Rust scalar types that belong to a [`PrimitiveKind`].
///
/// Implemented for `bool`, `i8`, `char`, `f32`, `i32`, `i64`, `i16` and `f64`
/// only; the set is closed.
pub trait Primitive: Copy + 'static + sealed::Sealed {
    /// Kind this type represents.
    const KIND: PrimitiveKind;

    /// Wrap `self` in its [`Value`] variant.
    fn into_value(self) -> Value;

    /// Extract `Self` from its [`Value`] variant.
    ///
    /// # Errors
    ///
    /// Returns `value` unchanged when it holds a different kind.
    fn from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $kind:ident / $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$kind;

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Boolean / Bool,
    i8 => Byte / Byte,
    char => Char / Char,
    f32 => Float / Float,
    i32 => Int / Int,
    i64 => Long / Long,
    i16 => Short / Short,
    f64 => Double / Double,
}

#[cfg(test)]
mod tests;
