use super::*;

#[test]
fn conversions_pick_the_right_shape() {
    assert_eq!(OptionValue::from(true), OptionValue::Flag(true));
    assert_eq!(OptionValue::from(false), OptionValue::Flag(false));
    assert_eq!(OptionValue::from("x"), OptionValue::Scalar("x".into()));
    assert_eq!(OptionValue::from(12), OptionValue::Scalar("12".into()));
    assert_eq!(
        OptionValue::from(vec!["a", "b"]),
        OptionValue::Seq(vec!["a".into(), "b".into()])
    );
    assert_eq!(
        OptionValue::keyed([("session", "bla")]),
        OptionValue::Map(vec![(Some("session".into()), "bla".into())])
    );
}

#[test]
fn json_null_is_the_unset_sentinel() {
    let v: OptionValue = serde_json::from_str("null").unwrap();
    assert!(v.is_unset());
}

#[test]
fn json_scalars_normalize_to_strings() {
    let v: OptionValue = serde_json::from_str("12").unwrap();
    assert_eq!(v, OptionValue::Scalar("12".into()));

    let v: OptionValue = serde_json::from_str("1.5").unwrap();
    assert_eq!(v, OptionValue::Scalar("1.5".into()));

    let v: OptionValue = serde_json::from_str(r#""Landscape""#).unwrap();
    assert_eq!(v, OptionValue::Scalar("Landscape".into()));

    let v: OptionValue = serde_json::from_str("true").unwrap();
    assert_eq!(v, OptionValue::Flag(true));
}

#[test]
fn json_arrays_become_ordered_sequences() {
    let v: OptionValue = serde_json::from_str(r#"["/path1", "/path2", 3]"#).unwrap();
    assert_eq!(
        v,
        OptionValue::Seq(vec!["/path1".into(), "/path2".into(), "3".into()])
    );
}

#[test]
fn json_objects_become_keyed_maps_in_document_order() {
    let v: OptionValue = serde_json::from_str(r#"{"session": "bla", "phpsess": 12}"#).unwrap();
    assert_eq!(
        v,
        OptionValue::Map(vec![
            (Some("session".into()), "bla".into()),
            (Some("phpsess".into()), "12".into()),
        ])
    );
}

#[test]
fn nested_containers_are_rejected() {
    assert!(serde_json::from_str::<OptionValue>(r#"[["nested"]]"#).is_err());
    assert!(serde_json::from_str::<OptionValue>(r#"{"k": {"nested": 1}}"#).is_err());
}
