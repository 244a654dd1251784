//! Field read/write helpers called from derived `Introspect` impls.
//!
//! Each field shape gets a read/write pair. Writes hand a rejected value
//! back to the caller so it can be reported in an
//! [`AccessError::TypeMismatch`](crate::AccessError::TypeMismatch).

use super::{Primitive, Value};

/// Read a bare primitive. Never absent.
pub fn read_primitive<T: Primitive>(slot: &T) -> Option<Value> {
    Some(slot.into_value())
}

/// Read an `Option` of a primitive.
pub fn read_boxed<T: Primitive>(slot: Option<&T>) -> Option<Value> {
    slot.map(|value| value.into_value())
}

/// Read any other type by cloning it. Never absent.
///
/// A generic `T` instantiated with a primitive is read as that primitive.
pub fn read_reference<T: Clone + 'static>(slot: &T) -> Option<Value> {
    Some(Value::object(slot.clone()))
}

/// Read an `Option` of any other type by cloning the contents.
pub fn read_nullable<T: Clone + 'static>(slot: Option<&T>) -> Option<Value> {
    slot.map(|value| Value::object(value.clone()))
}

/// Store a primitive value in a bare primitive field.
///
/// # Errors
///
/// Returns `value` when it is not of kind `T`.
pub fn write_primitive<T: Primitive>(slot: &mut T, value: Value) -> Result<(), Value> {
    *slot = T::from_value(value)?;
    Ok(())
}

/// Store a primitive value in an `Option` field.
///
/// # Errors
///
/// Returns `value` when it is not of kind `T`.
pub fn write_boxed<T: Primitive>(slot: &mut Option<T>, value: Value) -> Result<(), Value> {
    *slot = Some(T::from_value(value)?);
    Ok(())
}

/// Store a value in a field of type `T`.
///
/// # Errors
///
/// Returns `value` when it does not hold a `T`.
pub fn write_reference<T: 'static>(slot: &mut T, value: Value) -> Result<(), Value> {
    *slot = value.downcast()?;
    Ok(())
}

/// Store a value in an `Option<T>` field.
///
/// # Errors
///
/// Returns `value` when it does not hold a `T`.
pub fn write_nullable<T: 'static>(slot: &mut Option<T>, value: Value) -> Result<(), Value> {
    *slot = Some(value.downcast()?);
    Ok(())
}


#[cfg(test)]
mod tests {
    //! Unit tests for the slot helpers used by derived impls.

    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;

    #[rstest]
    fn boxed_read_reports_absent_for_none() {
        let slot: Option<i32> = None;
        assert!(read_boxed(slot.as_ref()).is_none());
    }

    #[rstest]
    fn primitive_value_crosses_into_boxed_slot() -> Result<()> {
        let source = 7_i64;
        let value = read_primitive(&source).ok_or_else(|| anyhow!("primitive read absent"))?;
        let mut slot: Option<i64> = None;
        write_boxed(&mut slot, value).map_err(|v| anyhow!("rejected {v:?}"))?;
        ensure!(slot == Some(7), "unexpected slot {slot:?}");
        Ok(())
    }

    #[rstest]
    fn boxed_value_crosses_into_primitive_slot() -> Result<()> {
        let source = Some('x');
        let value = read_boxed(source.as_ref()).ok_or_else(|| anyhow!("boxed read absent"))?;
        let mut slot = 'a';
        write_primitive(&mut slot, value).map_err(|v| anyhow!("rejected {v:?}"))?;
        ensure!(slot == 'x', "unexpected slot {slot:?}");
        Ok(())
    }

    #[rstest]
    fn primitive_write_rejects_other_kind() {
        let mut slot = 0_i32;
        let rejected = write_primitive(&mut slot, Value::Long(1));
        assert!(matches!(rejected, Err(Value::Long(1))));
        assert_eq!(slot, 0);
    }

    #[rstest]
    fn reference_round_trips_through_nullable_slot() -> Result<()> {
        let source = String::from("sarasa");
        let value = read_reference(&source).ok_or_else(|| anyhow!("reference read absent"))?;
        let mut slot: Option<String> = None;
        write_nullable(&mut slot, value).map_err(|v| anyhow!("rejected {v:?}"))?;
        ensure!(slot.as_deref() == Some("sarasa"), "unexpected slot {slot:?}");
        Ok(())
    }

    #[rstest]
    fn reference_write_returns_foreign_object() {
        let mut slot = String::from("kept");
        let rejected = write_reference(&mut slot, Value::object(42_u64));
        let Err(Value::Object(object)) = rejected else {
            panic!("expected the object to be handed back");
        };
        assert_eq!(object.downcast_ref::<u64>(), Some(&42));
        assert_eq!(slot, "kept");
    }

    #[rstest]
    fn generic_primitive_reads_as_primitive() {
        assert!(matches!(read_reference(&5_i32), Some(Value::Int(5))));
        assert!(matches!(read_nullable(Some(&'c')), Some(Value::Char('c'))));
    }

    #[rstest]
    fn generic_primitive_slots_accept_primitive_values() -> Result<()> {
        let mut bare = 0_i32;
        write_reference(&mut bare, Value::Int(5)).map_err(|v| anyhow!("rejected {v:?}"))?;
        ensure!(bare == 5, "unexpected slot {bare}");
        let mut optional: Option<i16> = None;
        write_nullable(&mut optional, Value::Short(3)).map_err(|v| anyhow!("rejected {v:?}"))?;
        ensure!(optional == Some(3), "unexpected slot {optional:?}");
        Ok(())
    }

    #[rstest]
    fn generic_primitive_slot_rejects_other_kind() {
        let mut slot = 0_i32;
        assert!(matches!(
            write_reference(&mut slot, Value::Long(5)),
            Err(Value::Long(5))
        ));
        assert_eq!(slot, 0);
    }

    #[rstest]
    fn reference_write_rejects_primitive() {
        let mut slot = String::from("kept");
        assert!(matches!(
            write_reference(&mut slot, Value::Bool(true)),
            Err(Value::Bool(true))
        ));
    }
}
