use field_merge::{Introspect, merge};

/// Verifies that `#[introspect(crate = "field_merge")]` is accepted and the
/// generated code compiles. Uses the real crate name as a self-referential
/// alias so no workspace reconfiguration is needed.
#[derive(Introspect)]
#[introspect(crate = "field_merge")]
struct Aliased {
    pub value: Option<String>,
    pub count: i32,
}

fn main() {
    let source = Aliased {
        value: Some("hello".to_owned()),
        count: 1,
    };
    let mut destination = Aliased {
        value: None,
        count: 0,
    };
    merge(&source, &mut destination);
    assert_eq!(destination.value.as_deref(), Some("hello"));
    assert_eq!(destination.count, 1);
}
