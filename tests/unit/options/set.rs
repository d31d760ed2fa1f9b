use super::*;

fn set_with(names: &[&str]) -> OptionSet {
    OptionSet::with_names(names.iter().copied())
}

#[test]
fn set_overwrites_recognized_options() {
    let mut options = set_with(&["foo"]);
    options.set("foo", "bar").unwrap();
    options.set("foo", "abc").unwrap();
    assert_eq!(options.get("foo"), Some(&OptionValue::Scalar("abc".into())));
}

#[test]
fn set_rejects_unknown_names_without_adding_them() {
    let mut options = set_with(&["foo"]);
    let err = options.set("bad", "def").unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::HtmlpressError::InvalidOption { ref name } if name == "bad"
    ));
    assert!(!options.contains("bad"));
    assert_eq!(options.len(), 1);
}

#[test]
fn set_many_applies_in_order_without_rollback() {
    let mut options = set_with(&["foo", "baz"]);
    let result = options.set_many([("foo", "abc"), ("bad", "ghi"), ("baz", "def")]);
    assert!(result.is_err());
    // The entry applied before the failure stays applied.
    assert_eq!(options.get("foo"), Some(&OptionValue::Scalar("abc".into())));
    assert_eq!(options.get("baz"), Some(&OptionValue::Unset));
}

#[test]
fn unset_is_a_value_not_a_removal() {
    let mut options = set_with(&["foo"]);
    options.set("foo", "bar").unwrap();
    options.set("foo", OptionValue::Unset).unwrap();
    assert_eq!(options.get("foo"), Some(&OptionValue::Unset));
    assert!(options.contains("foo"));
}

#[test]
fn merged_layers_overrides_without_mutating() {
    let mut options = set_with(&["foo", "baz"]);
    options.set_many([("foo", "bar"), ("baz", "bat")]).unwrap();

    let merged = options.merged([("foo", "ban")]).unwrap();
    assert_eq!(merged.get("foo"), Some(&OptionValue::Scalar("ban".into())));
    assert_eq!(merged.get("baz"), Some(&OptionValue::Scalar("bat".into())));

    // The instance is untouched, both on success and on rejection.
    assert_eq!(options.get("foo"), Some(&OptionValue::Scalar("bar".into())));
    assert!(options.merged([("bad", "bah")]).is_err());
    assert_eq!(options.get("foo"), Some(&OptionValue::Scalar("bar".into())));
}

#[test]
fn iteration_preserves_construction_order() {
    let mut options = set_with(&["b", "a", "c"]);
    options.set("c", "1").unwrap();
    options.set("a", "2").unwrap();

    let names: Vec<&str> = options.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn duplicate_names_collapse_onto_the_first() {
    let options = set_with(&["a", "b", "a"]);
    assert_eq!(options.len(), 2);
    let names: Vec<&str> = options.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["a", "b"]);
}
