use field_merge::{Introspect, merge};

#[derive(Clone, Debug, PartialEq)]
struct Endpoint {
    host: String,
}

/// Generic parameters receive the bounds the generated accessors need.
#[derive(Introspect)]
struct Slot<T, U> {
    pub current: T,
    pub fallback: Option<U>,
    pub weight: Option<f64>,
}

fn main() {
    let source = Slot {
        current: Endpoint {
            host: "example.org".to_owned(),
        },
        fallback: Some(7_i64),
        weight: None,
    };
    let mut destination = Slot {
        current: Endpoint {
            host: String::new(),
        },
        fallback: None::<i64>,
        weight: Some(0.5),
    };
    merge(&source, &mut destination);
    assert_eq!(destination.current.host, "example.org");
    assert_eq!(destination.fallback, Some(7));
    assert_eq!(destination.weight, Some(0.5));
}
