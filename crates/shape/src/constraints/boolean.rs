//! Boolean constraints

use crate::foundation::{SharedConstraint, predicate};

pub fn boolean_true() -> SharedConstraint<bool> {
    predicate("s.boolean.true", "Invalid boolean value", "true", |b: &bool| *b)
}

pub fn boolean_false() -> SharedConstraint<bool> {
    predicate("s.boolean.false", "Invalid boolean value", "false", |b: &bool| !*b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;

    #[test]
    fn checks_exact_value() {
        assert!(boolean_true().run(true).is_success());
        assert!(boolean_true().run(false).is_failure());
        assert!(boolean_false().run(false).is_success());
        assert_eq!(
            boolean_false().run(true).into_error().name(),
            Some("s.boolean.false")
        );
    }
}
