//! Tests for type introspection helpers.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{Type, parse_quote};

#[rstest]
#[case(parse_quote!(Option<u32>))]
#[case(parse_quote!(std::option::Option<u32>))]
#[case(parse_quote!(core::option::Option<u32>))]
fn option_inner_matches_various_prefixes(#[case] ty: Type) -> Result<()> {
    let expected: Type = parse_quote!(u32);
    let inner = option_inner(&ty).ok_or_else(|| anyhow!("expected Option"))?;
    ensure!(inner == &expected, "expected {expected:?}, got {inner:?}");
    Ok(())
}

#[rstest]
#[case::bare(parse_quote!(i32), Some("i32"))]
#[case::core_path(parse_quote!(core::primitive::bool), Some("bool"))]
#[case::std_path(parse_quote!(std::primitive::f64), Some("f64"))]
#[case::unsigned(parse_quote!(u32), None)]
#[case::foreign_module(parse_quote!(my::i32), None)]
#[case::string(parse_quote!(String), None)]
#[case::reference(parse_quote!(&'static str), None)]
fn primitive_name_recognises_paired_scalars(
    #[case] ty: Type,
    #[case] expected: Option<&'static str>,
) -> Result<()> {
    let name = primitive_name(&ty);
    ensure!(name == expected, "expected {expected:?}, got {name:?}");
    Ok(())
}

#[rstest]
#[case::primitive(parse_quote!(char), FieldShape::Primitive(parse_quote!(char)))]
#[case::boxed(parse_quote!(Option<i16>), FieldShape::Boxed(parse_quote!(i16)))]
#[case::reference(parse_quote!(Vec<i32>), FieldShape::Reference(parse_quote!(Vec<i32>)))]
#[case::nullable(parse_quote!(Option<String>), FieldShape::Nullable(parse_quote!(String)))]
#[case::nested_option(
    parse_quote!(Option<Option<i32>>),
    FieldShape::Nullable(parse_quote!(Option<i32>)),
)]
#[case::unsigned(parse_quote!(Option<u8>), FieldShape::Nullable(parse_quote!(u8)))]
fn classify_sorts_field_shapes(#[case] ty: Type, #[case] expected: FieldShape) -> Result<()> {
    let shape = classify(&ty);
    ensure!(shape == expected, "expected {expected:?}, got {shape:?}");
    Ok(())
}
