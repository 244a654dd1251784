//! Unit tests for values and the primitive trait.

use super::*;
use rstest::rstest;

#[rstest]
#[case::boolean(true.into_value(), PrimitiveKind::Boolean, "bool")]
#[case::byte(3_i8.into_value(), PrimitiveKind::Byte, "i8")]
#[case::char('z'.into_value(), PrimitiveKind::Char, "char")]
#[case::float(1.5_f32.into_value(), PrimitiveKind::Float, "f32")]
#[case::int(42_i32.into_value(), PrimitiveKind::Int, "i32")]
#[case::long(42_i64.into_value(), PrimitiveKind::Long, "i64")]
#[case::short(42_i16.into_value(), PrimitiveKind::Short, "i16")]
#[case::double(2.5_f64.into_value(), PrimitiveKind::Double, "f64")]
fn primitives_map_to_their_kind(
    #[case] value: Value,
    #[case] kind: PrimitiveKind,
    #[case] type_name: &str,
) {
    assert_eq!(value.kind(), Some(kind));
    assert_eq!(value.type_name(), type_name);
}

#[rstest]
fn primitive_kind_constants_agree_with_rust_types() {
    assert_eq!(<bool as Primitive>::KIND, PrimitiveKind::Boolean);
    assert_eq!(<f64 as Primitive>::KIND, PrimitiveKind::Double);
    for kind in PrimitiveKind::ALL {
        assert!(!kind.rust_type().is_empty());
    }
}

#[rstest]
fn object_reports_its_tag() {
    let value = Value::object(vec![1_u8, 2]);
    assert_eq!(value.kind(), None);
    assert_eq!(value.type_name(), std::any::type_name::<Vec<u8>>());
}

#[rstest]
fn opaque_downcast_keeps_tag_on_failure() {
    let opaque = OpaqueValue::new(String::from("hiMom"));
    let Err(returned) = opaque.downcast::<u32>() else {
        panic!("String must not downcast to u32");
    };
    assert_eq!(returned.tag(), TypeTag::of::<String>());
    assert_eq!(returned.downcast::<String>().ok().as_deref(), Some("hiMom"));
}

#[rstest]
fn from_value_hands_back_mismatched_kind() {
    assert!(matches!(i32::from_value(Value::Short(1)), Err(Value::Short(1))));
    assert!(matches!(i16::from_value(Value::Short(1)), Ok(1)));
}

#[rstest]
fn object_of_primitive_uses_primitive_variant() {
    assert!(matches!(Value::object(9_i16), Value::Short(9)));
    assert!(matches!(Value::object(true), Value::Bool(true)));
}

#[rstest]
#[case::primitive(Value::Int(4))]
#[case::object_of_primitive(Value::object(4_i32))]
fn downcast_reaches_primitive_payload(#[case] value: Value) {
    assert_eq!(value.downcast::<i32>().ok(), Some(4));
}

#[rstest]
fn downcast_hands_back_mismatched_value() {
    assert!(matches!(Value::Int(4).downcast::<i64>(), Err(Value::Int(4))));
    let Err(Value::Object(object)) = Value::object(String::from("x")).downcast::<i32>() else {
        panic!("String must not downcast to i32");
    };
    assert_eq!(object.tag(), TypeTag::of::<String>());
}
