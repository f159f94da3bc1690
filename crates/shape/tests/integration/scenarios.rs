//! End-to-end behaviour of the core combinators on small inputs.

use nebula_shape::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn string_array_accepts_strings() {
    let output = shapes::string()
        .array()
        .parse(&Value::array(["a", "b"]))
        .unwrap();
    assert_eq!(output, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn string_array_reports_failing_index() {
    let error = shapes::string()
        .array()
        .parse(&Value::array([Value::from(1), Value::from("b")]))
        .unwrap_err();

    let ValidationError::Indexed(entries) = error else {
        panic!("expected indexed error");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, 0);
    assert_eq!(entries[0].1.name(), Some("s.string"));
}

#[test]
fn array_length_eq_names_constraint() {
    let error = shapes::string()
        .array()
        .length_eq(2)
        .parse(&Value::array(["a", "b", "c"]))
        .unwrap_err();

    assert_eq!(error.code(), "constraint");
    assert_eq!(error.name(), Some("s.array(T).lengthEqual"));
}

#[test]
fn union_of_literals() {
    let one_or_two = shapes::union([shapes::literal(1).boxed(), shapes::literal(2).boxed()]);

    assert_eq!(one_or_two.parse(&Value::from(2)).unwrap(), Value::from(2));

    let ValidationError::Combined(errors) = one_or_two.parse(&Value::from(3)).unwrap_err() else {
        panic!("expected combined error");
    };
    assert_eq!(errors.len(), 2);
}

#[test]
fn string_set_reports_only_bad_member() {
    let error = shapes::string()
        .set()
        .parse(&Value::set([Value::from("x"), Value::from(1)]))
        .unwrap_err();

    let ValidationError::Combined(errors) = error else {
        panic!("expected combined error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].received(), Some(&Value::from(1)));
}

#[test]
fn unique_array_rejects_duplicates_before_elements() {
    // Elements would fail the length check too; the duplicate error wins.
    let error = shapes::string()
        .length_ge(5)
        .array()
        .unique()
        .parse(&Value::array(["a", "a"]))
        .unwrap_err();

    assert_eq!(error.code(), "constraint");
    assert_eq!(error.name(), Some("s.array(T).unique"));
}
