use field_merge::{Access, Introspect, accessible_field_names, merge};

/// Raw identifiers are exposed under their unprefixed names.
#[derive(Introspect)]
struct Keywords {
    pub r#type: Option<String>,
    pub r#match: bool,
}

fn main() {
    let source = Keywords {
        r#type: Some("kind".to_owned()),
        r#match: true,
    };
    let mut destination = Keywords {
        r#type: None,
        r#match: false,
    };
    merge(&source, &mut destination);
    assert_eq!(
        accessible_field_names(&destination, Access::PublicOnly),
        ["type", "match"]
    );
    assert_eq!(destination.r#type.as_deref(), Some("kind"));
    assert!(destination.r#match);
}
