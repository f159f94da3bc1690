//! TUPLE combinator - fixed-length positional arrays

use crate::foundation::{
    BoxedValidator, Constraints, Outcome, ValidationError, Validator, ValidatorExt, Value,
};

/// Validates arrays of exactly `items.len()` elements, each against the
/// validator at the same position.
#[derive(Debug, Clone, Default)]
pub struct TupleValidator {
    items: Vec<BoxedValidator<Value>>,
    constraints: Constraints<Vec<Value>>,
}

impl TupleValidator {
    pub fn new(items: impl IntoIterator<Item = BoxedValidator<Value>>) -> Self {
        Self {
            items: items.into_iter().collect(),
            constraints: Constraints::new(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[BoxedValidator<Value>] {
        &self.items
    }

    /// Returns a copy with one more trailing position.
    #[must_use]
    pub fn item<V: Validator>(&self, validator: &V) -> Self {
        let mut next = self.clone();
        next.items.push(validator.erased());
        next
    }
}

impl Validator for TupleValidator {
    type Output = Vec<Value>;

    fn handle(&self, input: &Value) -> Outcome<Vec<Value>> {
        let Value::Array(elements) = input else {
            return Outcome::Failure(ValidationError::type_mismatch(
                "s.tuple(T)",
                "Expected an array",
                input.clone(),
            ));
        };

        if elements.len() != self.items.len() {
            return Outcome::Failure(ValidationError::type_mismatch(
                "s.tuple(T)",
                format!("Expected an array of length {}", self.items.len()),
                input.clone(),
            ));
        }

        let mut errors = Vec::new();
        let mut output = Vec::with_capacity(elements.len());
        for (index, (validator, element)) in self.items.iter().zip(elements).enumerate() {
            match validator.validate(element) {
                Outcome::Success(value) => output.push(value),
                Outcome::Failure(error) => errors.push((index, error)),
            }
        }

        if errors.is_empty() {
            Outcome::Success(output)
        } else {
            tracing::debug!(
                failed = errors.len(),
                arity = self.items.len(),
                "tuple positions rejected"
            );
            Outcome::Failure(ValidationError::Indexed(errors))
        }
    }

    fn constraints(&self) -> &Constraints<Vec<Value>> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Vec<Value>> {
        &mut self.constraints
    }
}
