//! Object shapes, literals and enums.

use chrono::{TimeZone, Utc};
use nebula_shape::prelude::*;
use pretty_assertions::assert_eq;

fn user() -> ObjectValidator {
    shapes::object()
        .field("name", &shapes::string().length_ge(1))
        .field("role", &shapes::enum_of(["admin", "user"]).default_value(Value::from("user")))
        .field("tags", &shapes::string().array().unique().optional())
}

#[test]
fn object_fills_defaults_and_omits_optionals() {
    let output = user().parse(&Value::record([("name", "ada")])).unwrap();
    assert_eq!(
        Value::from(output),
        Value::record([("name", "ada"), ("role", "user")])
    );
}

#[test]
fn object_reports_every_bad_key() {
    let input = Value::record([
        ("role", Value::from("root")),
        ("tags", Value::array(["x", "x"])),
    ]);
    let error = user().parse(&input).unwrap_err();

    let ValidationError::Keyed(entries) = error else {
        panic!("expected keyed error");
    };
    let codes: Vec<(&str, &str)> = entries.iter().map(|(k, e)| (k.as_str(), e.code())).collect();
    assert_eq!(
        codes,
        [
            ("name", "missing_property"),
            ("role", "combined"),
            ("tags", "constraint"),
        ]
    );
}

#[test]
fn nested_objects_validate_recursively() {
    let team = shapes::object()
        .field("lead", &user())
        .field("members", &user().array());

    let input = Value::record([
        ("lead", Value::record([("name", "ada")])),
        (
            "members",
            Value::array([Value::record([("name", "")])]),
        ),
    ]);

    let error = team.parse(&input).unwrap_err();
    assert_eq!(
        error.flatten().last().and_then(|e| e.name()),
        Some("s.string.lengthGreaterThanOrEqual")
    );
}

#[test]
fn native_enum_maps_names_to_values() {
    let level = shapes::native_enum([("Low", 1), ("High", 10)]);
    assert_eq!(level.parse(&Value::from("High")).unwrap(), Value::from(10));
    assert_eq!(level.parse(&Value::from(1)).unwrap(), Value::from(1));
    assert_eq!(level.parse(&Value::from("Mid")).unwrap_err().code(), "wrong_enum_input");
}

#[test]
fn nan_literal_matches_nan() {
    assert!(shapes::literal(f64::NAN).is(&Value::from(f64::NAN)));
}

#[test]
fn date_literal_compares_instants() {
    let instant = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let validator = shapes::literal(instant);

    assert!(validator.is(&Value::from(instant)));

    let error = validator
        .parse(&Value::from(instant + chrono::Duration::seconds(1)))
        .unwrap_err();
    assert_eq!(error.name(), Some("s.date.eq"));
}
