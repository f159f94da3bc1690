//! Literal validator
//!
//! Accepts exactly one value. Equality is [`Value::same_value`], so a `NaN`
//! literal accepts `NaN`. A date literal delegates to
//! [`DateValidator::eq`] and reports through its constraint instead.

use chrono::{DateTime, Utc};

use crate::foundation::{Constraints, Outcome, ValidationError, Validator, Value};
use crate::validators::DateValidator;

#[derive(Debug, Clone)]
enum Expected {
    Exact(Value),
    Date {
        date: DateTime<Utc>,
        validator: DateValidator,
    },
}

/// Validates that the input equals a fixed value.
#[derive(Debug, Clone)]
pub struct LiteralValidator {
    expected: Expected,
    constraints: Constraints<Value>,
}

impl LiteralValidator {
    pub fn new(expected: impl Into<Value>) -> Self {
        let expected = match expected.into() {
            Value::Date(date) => Expected::Date {
                date,
                validator: DateValidator::new().eq(date),
            },
            other => Expected::Exact(other),
        };
        Self {
            expected,
            constraints: Constraints::new(),
        }
    }

    /// The value this literal accepts.
    #[must_use]
    pub fn expected(&self) -> Value {
        match &self.expected {
            Expected::Exact(value) => value.clone(),
            Expected::Date { date, .. } => Value::Date(*date),
        }
    }
}

impl Validator for LiteralValidator {
    type Output = Value;

    fn handle(&self, input: &Value) -> Outcome<Value> {
        match &self.expected {
            Expected::Exact(expected) if expected.same_value(input) => {
                Outcome::Success(input.clone())
            }
            Expected::Exact(expected) => Outcome::Failure(ValidationError::expected_value(
                "s.literal(V)",
                "Expected values to be equals",
                input.clone(),
                expected.clone(),
            )),
            Expected::Date { validator, .. } => validator.validate(input).map(Value::Date),
        }
    }

    fn constraints(&self) -> &Constraints<Value> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Value> {
        &mut self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn exact_match_only() {
        let validator = LiteralValidator::new("sapphire");
        assert_eq!(
            validator.parse(&Value::from("sapphire")).unwrap(),
            Value::from("sapphire")
        );

        let error = validator.parse(&Value::from("ruby")).unwrap_err();
        assert_eq!(error.code(), "expected_value");
        assert_eq!(error.name(), Some("s.literal(V)"));
    }

    #[test]
    fn nan_literal_accepts_nan() {
        assert!(LiteralValidator::new(f64::NAN).is(&Value::from(f64::NAN)));
        assert!(!LiteralValidator::new(f64::NAN).is(&Value::from(0)));
    }

    #[test]
    fn number_literal_rejects_numeric_string() {
        assert!(!LiteralValidator::new(1).is(&Value::from("1")));
    }

    #[test]
    fn date_literal_uses_date_constraint() {
        let date = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let validator = LiteralValidator::new(date);
        assert_eq!(validator.expected(), Value::Date(date));
        assert!(validator.is(&Value::Date(date)));

        let other = Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();
        let error = validator.parse(&Value::Date(other)).unwrap_err();
        assert_eq!(error.name(), Some("s.date.eq"));

        let error = validator.parse(&Value::from("2022-01-01")).unwrap_err();
        assert_eq!(error.name(), Some("s.date"));
    }
}
