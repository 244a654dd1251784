//! Merger options loaded from configuration and their effect on merges into
//! types that embed an ancestor.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use field_merge::{Access, FieldMerger, Introspect, MergeOptions, ShadowResolution};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Introspect)]
struct Service {
    pub name: Option<String>,
    pub port: i32,
    secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Introspect)]
struct HttpService {
    #[introspect(base)]
    service: Service,
    pub name: Option<String>,
    pub tls: bool,
}

#[derive(Debug, Clone, PartialEq, Introspect)]
struct Overrides {
    pub name: Option<String>,
    pub port: Option<i32>,
    pub tls: Option<bool>,
    secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Introspect)]
struct Labelled {
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Introspect)]
struct Flagged {
    #[introspect(base)]
    labelled: Labelled,
    pub flag: bool,
}

#[derive(Debug, Clone, PartialEq, Introspect)]
struct FlagPatch {
    pub flag: Option<bool>,
}

fn http() -> HttpService {
    HttpService {
        service: Service {
            name: Some("base".to_owned()),
            port: 80,
            secret: None,
        },
        name: Some("derived".to_owned()),
        tls: false,
    }
}

fn overrides() -> Overrides {
    Overrides {
        name: Some("patched".to_owned()),
        port: Some(8443),
        tls: Some(true),
        secret: Some("hunter2".to_owned()),
    }
}

fn load(json: &str) -> FieldMerger {
    FieldMerger::new(serde_json::from_str(json).expect("valid merger options"))
}

#[rstest]
#[case::empty("{}", MergeOptions::default())]
#[case::access(
    r#"{"access": "unrestricted"}"#,
    MergeOptions { access: Access::Unrestricted, shadowing: ShadowResolution::MostDerived }
)]
#[case::both(
    r#"{"access": "restricted", "shadowing": "least_derived"}"#,
    MergeOptions { access: Access::Restricted, shadowing: ShadowResolution::LeastDerived }
)]
fn options_deserialize_with_defaults(#[case] json: &str, #[case] expected: MergeOptions) {
    assert_eq!(load(json).options(), expected);
}

#[rstest]
#[case::unknown_access(r#"{"access": "everything"}"#)]
#[case::unknown_shadowing(r#"{"shadowing": "deepest"}"#)]
fn invalid_options_are_rejected(#[case] json: &str) {
    assert!(serde_json::from_str::<MergeOptions>(json).is_err());
}

#[rstest]
fn options_round_trip_through_json() {
    let options = MergeOptions {
        access: Access::Restricted,
        shadowing: ShadowResolution::LeastDerived,
    };
    let json = serde_json::to_string(&options).expect("serialize options");
    assert_eq!(
        serde_json::from_str::<MergeOptions>(&json).expect("deserialize options"),
        options
    );
}

#[rstest]
fn inherited_fields_are_not_matched() {
    let mut target = http();
    load("{}").merge(&overrides(), &mut target);
    assert_eq!(target.service.port, 80);
    assert!(target.tls);
}

#[rstest]
#[case::most_derived("most_derived", "base", "patched")]
#[case::least_derived("least_derived", "patched", "derived")]
fn shadowed_name_lands_on_selected_level(
    #[case] shadowing: &str,
    #[case] base_name: &str,
    #[case] own_name: &str,
) {
    let merger = load(&format!(r#"{{"shadowing": "{shadowing}"}}"#));
    let mut target = http();
    merger.merge(&overrides(), &mut target);
    assert_eq!(target.service.name.as_deref(), Some(base_name));
    assert_eq!(target.name.as_deref(), Some(own_name));
}

#[rstest]
fn private_fields_need_unrestricted_access() {
    let source = overrides();
    let mut target = Overrides {
        name: None,
        port: None,
        tls: None,
        secret: None,
    };
    load("{}").merge(&source, &mut target);
    assert_eq!(target.secret, None);
    load(r#"{"access": "unrestricted"}"#).merge(&source, &mut target);
    assert_eq!(target.secret.as_deref(), Some("hunter2"));
}

#[rstest]
fn base_chain_is_exposed() {
    let target = http();
    let base = target.base().expect("embedded service");
    let names: Vec<&str> = base
        .declared_fields()
        .iter()
        .map(|field| field.name())
        .collect();
    assert_eq!(names, ["name", "port", "secret"]);
    assert!(base.base().is_none());
}

#[rstest]
#[case::most_derived("most_derived")]
#[case::least_derived("least_derived")]
fn ancestor_of_another_type_is_passed_over(#[case] shadowing: &str) {
    let merger = load(&format!(r#"{{"shadowing": "{shadowing}"}}"#));
    let mut target = Flagged {
        labelled: Labelled {
            flag: "ancestor".to_owned(),
        },
        flag: false,
    };
    merger.merge(&FlagPatch { flag: Some(true) }, &mut target);
    assert!(target.flag);
    assert_eq!(target.labelled.flag, "ancestor");
}
