//! Arrays, sets, records and tuples.

use nebula_shape::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(3, true)]
#[case(4, false)]
fn array_length_range_inclusive(#[case] len: usize, #[case] passes: bool) {
    let validator = shapes::number().array().length_range_inclusive(1, 3);
    let input = Value::array(vec![Value::from(0); len]);
    assert_eq!(validator.is(&input), passes);
}

#[test]
fn unique_compares_structurally() {
    let validator = shapes::any().array().unique();
    let a = Value::record([("x", 1), ("y", 2)]);
    let b = Value::record([("y", 2), ("x", 1)]);
    assert!(!validator.is(&Value::array([a.clone(), b])));
    assert!(validator.is(&Value::array([a, Value::record([("x", 2)])])));
}

#[test]
fn unique_distinguishes_string_from_number() {
    let validator = shapes::any().array().unique();
    assert!(validator.is(&Value::array([Value::from("1"), Value::from(1)])));
}

#[test]
fn nested_arrays_keep_inner_positions() {
    let matrix = shapes::number().int().array().array();
    let input = Value::array([
        Value::array([Value::from(1), Value::from(2)]),
        Value::array([Value::from(3), Value::from(0.5)]),
    ]);

    let ValidationError::Indexed(outer) = matrix.parse(&input).unwrap_err() else {
        panic!("expected indexed error");
    };
    assert_eq!(outer.len(), 1);
    assert_eq!(outer[0].0, 1);

    let ValidationError::Indexed(inner) = &outer[0].1 else {
        panic!("expected nested indexed error");
    };
    assert_eq!(inner[0].0, 1);
    assert_eq!(inner[0].1.name(), Some("s.number.int"));
}

#[test]
fn set_collapses_after_transform() {
    let output = shapes::number()
        .abs()
        .set()
        .parse(&Value::set([-1, 1, 2]))
        .unwrap();
    assert_eq!(output.into_vec(), vec![1.0, 2.0]);
}

#[test]
fn set_rejects_arrays() {
    let error = shapes::string().set().parse(&Value::array(["x"])).unwrap_err();
    assert_eq!(error.name(), Some("s.set(T)"));
}

#[test]
fn record_labels_failures_with_keys() {
    let input = Value::record([("a", Value::from(1)), ("b", Value::from(-1))]);
    let error = shapes::number().positive().record().parse(&input).unwrap_err();

    let ValidationError::Keyed(entries) = error else {
        panic!("expected keyed error");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "b");
}

#[test]
fn record_output_preserves_order() {
    let input = Value::record([("z", 1), ("a", 2)]);
    let output = shapes::number().record().parse(&input).unwrap();
    assert_eq!(output.keys().map(String::as_str).collect::<Vec<_>>(), ["z", "a"]);
}

#[test]
fn tuple_checks_each_position() {
    let pair = shapes::tuple([shapes::string().erased(), shapes::boolean().erased()]);
    assert!(pair.is(&Value::array([Value::from("a"), Value::Bool(true)])));
    assert!(!pair.is(&Value::array([Value::Bool(true), Value::from("a")])));
    assert!(!pair.is(&Value::array([Value::from("a")])));
}
