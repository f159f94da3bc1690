//! Error rendering and inspection.

use nebula_shape::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn type_mismatch_display() {
    let error = shapes::string().parse(&Value::from(1)).unwrap_err();
    insta::assert_snapshot!(error, @"s.string: Expected a string primitive (received 1)");
}

#[test]
fn constraint_display() {
    let error = shapes::string()
        .array()
        .length_eq(2)
        .parse(&Value::array(["a", "b", "c"]))
        .unwrap_err();
    insta::assert_snapshot!(
        error,
        @r#"s.array(T).lengthEqual: Invalid Array length (expected.length === 2, received ["a", "b", "c"])"#
    );
}

#[test]
fn aggregate_display() {
    let error = shapes::string()
        .array()
        .parse(&Value::array([Value::from(1), Value::from(2)]))
        .unwrap_err();
    insta::assert_snapshot!(error, @"Received one or more errors (2 at indexed positions)");
}

#[test]
fn missing_property_display() {
    let error = shapes::object()
        .field("id", &shapes::number())
        .parse(&Value::record(Vec::<(String, Value)>::new()))
        .unwrap_err();
    let ValidationError::Keyed(entries) = error else {
        panic!("expected keyed error");
    };
    insta::assert_snapshot!(entries[0].1.to_string(), @"A required property is missing: id");
}

#[test]
fn counts_and_flattening() {
    let validator = shapes::number().int().array().record();
    let input = Value::record([
        ("a", Value::array([Value::from(0.5), Value::from(1.5)])),
        ("b", Value::array([Value::from(1)])),
    ]);
    let error = validator.parse(&input).unwrap_err();

    // keyed -> indexed -> two leaves
    assert_eq!(error.total_error_count(), 4);
    let leaves: Vec<_> = error
        .flatten()
        .into_iter()
        .filter(|e| !e.is_aggregate())
        .filter_map(ValidationError::name)
        .collect();
    assert_eq!(leaves, ["s.number.int", "s.number.int"]);
}

#[test]
fn json_report_nests_aggregates() {
    let error = shapes::string()
        .array()
        .parse(&Value::array([Value::from("ok"), Value::Null]))
        .unwrap_err();

    assert_eq!(
        error.to_json_value(),
        json!({
            "code": "indexed",
            "errors": [{
                "index": 1,
                "error": {
                    "code": "type_mismatch",
                    "validator": "s.string",
                    "message": "Expected a string primitive",
                    "received": null,
                },
            }],
        })
    );
}

#[test]
fn errors_are_plain_values() {
    let error = shapes::boolean().is_true().parse(&Value::Bool(false)).unwrap_err();
    let copy = error.clone();
    assert_eq!(error, copy);
    assert_eq!(copy.received(), Some(&Value::Bool(false)));
}
