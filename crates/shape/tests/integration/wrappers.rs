//! Transform, optional, default and the constraint switch.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nebula_shape::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn builders_never_mutate_the_base() {
    let base = shapes::number();
    let bounded = base.lt(10.0);
    let _ = bounded.gt(0.0);

    assert!(base.is(&Value::from(100)));
    assert!(!bounded.is(&Value::from(100)));
    assert_eq!(base.constraints().len(), 0);
    assert_eq!(bounded.constraints().len(), 1);
}

#[test]
fn constraints_run_in_order_and_stop_at_first_failure() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let validator = shapes::number()
        .lt(0.0)
        .refine("count", move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n
        });

    assert!(!validator.is(&Value::from(5)));
    assert_eq!(seen.load(Ordering::SeqCst), 0);
    assert!(validator.is(&Value::from(-5)));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn type_check_short_circuits_constraints() {
    let error = shapes::number().lt(0.0).parse(&Value::from("x")).unwrap_err();
    assert_eq!(error.code(), "type_mismatch");
}

#[test]
fn transform_changes_output_type() {
    let lengths = shapes::string()
        .transform(|s: String| s.chars().count() as f64)
        .array();
    assert_eq!(lengths.parse(&Value::array(["ab", "cde"])).unwrap(), vec![2.0, 3.0]);
}

#[test]
fn custom_constraint_reports_its_name() {
    let even = shapes::number().add_constraint(predicate(
        "even",
        "Expected an even number",
        "n % 2 === 0",
        |n: &f64| n % 2.0 == 0.0,
    ));
    assert!(even.is(&Value::from(4)));
    assert_eq!(even.parse(&Value::from(3)).unwrap_err().name(), Some("even"));
}

#[rstest]
#[case(Value::Undefined, 5.0)]
#[case(Value::from(7), 7.0)]
#[case(Value::from(-7), -7.0)]
fn default_round_trip(#[case] input: Value, #[case] expected: f64) {
    let validator = shapes::number().default_value(5.0);
    assert_eq!(validator.parse(&input).unwrap(), expected);
}

#[test]
fn nullish_accepts_both_sentinels() {
    let validator = shapes::string().nullish();
    assert_eq!(validator.parse(&Value::Null).unwrap(), Maybe::Null);
    assert_eq!(validator.parse(&Value::Undefined).unwrap(), Maybe::Undefined);
    assert_eq!(validator.parse(&Value::from("x")).unwrap().into_option(), Some("x".to_owned()));
}

#[test]
fn instance_switch_skips_constraints_only() {
    let relaxed = shapes::string().length_ge(5).set_validation_enabled(false);
    assert!(relaxed.is(&Value::from("a")));
    assert!(!relaxed.is(&Value::from(1)));

    let unique = shapes::string().array().unique().set_validation_enabled(false);
    assert!(unique.is(&Value::array(["a", "a"])));
}
