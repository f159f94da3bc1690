//! Validators that accept everything, nothing, or only the null sentinels

use crate::foundation::{Constraints, Outcome, ValidationError, Validator, Value};

/// Accepts any input unchanged. Backs both `any()` and `unknown()`.
#[derive(Debug, Clone, Default)]
pub struct PassthroughValidator {
    constraints: Constraints<Value>,
}

impl PassthroughValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for PassthroughValidator {
    type Output = Value;

    fn handle(&self, input: &Value) -> Outcome<Value> {
        Outcome::Success(input.clone())
    }

    fn constraints(&self) -> &Constraints<Value> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Value> {
        &mut self.constraints
    }
}

/// Rejects every input.
#[derive(Debug, Clone, Default)]
pub struct NeverValidator {
    constraints: Constraints<Value>,
}

impl NeverValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for NeverValidator {
    type Output = Value;

    fn handle(&self, input: &Value) -> Outcome<Value> {
        Outcome::Failure(ValidationError::type_mismatch(
            "s.never",
            "Expected a value to not be passed",
            input.clone(),
        ))
    }

    fn constraints(&self) -> &Constraints<Value> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Value> {
        &mut self.constraints
    }
}

primitive_validator! {
    /// Accepts `Null` and `Undefined`, returning them unchanged.
    pub NullishValidator => Value;
    label = "s.nullish", message = "Expected undefined or null";
    match value @ (Value::Null | Value::Undefined) => value.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Undefined)]
    #[case(Value::from("x"))]
    #[case(Value::array([1, 2]))]
    fn passthrough_keeps_input(#[case] input: Value) {
        assert_eq!(PassthroughValidator::new().parse(&input).unwrap(), input);
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Undefined)]
    #[case(Value::from(0))]
    fn never_rejects(#[case] input: Value) {
        let error = NeverValidator::new().parse(&input).unwrap_err();
        assert_eq!(error.name(), Some("s.never"));
    }

    #[rstest]
    #[case(Value::Null, true)]
    #[case(Value::Undefined, true)]
    #[case(Value::from(123), false)]
    #[case(Value::from("hello"), false)]
    fn nullish(#[case] input: Value, #[case] passes: bool) {
        assert_eq!(NullishValidator::new().is(&input), passes);
    }
}
