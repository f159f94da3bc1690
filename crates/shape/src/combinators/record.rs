//! RECORD combinator - validates every value of a keyed record

use indexmap::IndexMap;

use crate::foundation::{Constraints, Outcome, ValidationError, Validator, Value};

/// Validates records whose values all satisfy one child validator.
///
/// Every entry is checked; each failure is reported under its key. The
/// output is a new map with the same keys in the same order.
#[derive(Debug, Clone)]
pub struct RecordValidator<V: Validator> {
    value: V,
    constraints: Constraints<IndexMap<String, V::Output>>,
}

impl<V: Validator> RecordValidator<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            constraints: Constraints::new(),
        }
    }

    pub fn value_validator(&self) -> &V {
        &self.value
    }
}

impl<V: Validator> Validator for RecordValidator<V> {
    type Output = IndexMap<String, V::Output>;

    fn handle(&self, input: &Value) -> Outcome<Self::Output> {
        let entries = match input {
            Value::Record(entries) => entries,
            Value::Null => {
                return Outcome::Failure(ValidationError::type_mismatch(
                    "s.record(T)",
                    "Expected the value to not be null",
                    Value::Null,
                ));
            }
            other => {
                return Outcome::Failure(ValidationError::type_mismatch(
                    "s.record(T)",
                    "Expected a record",
                    other.clone(),
                ));
            }
        };

        let mut errors = Vec::new();
        let mut output = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            match self.value.validate(value) {
                Outcome::Success(validated) => {
                    output.insert(key.clone(), validated);
                }
                Outcome::Failure(error) => errors.push((key.clone(), error)),
            }
        }

        if errors.is_empty() {
            Outcome::Success(output)
        } else {
            tracing::debug!(
                failed = errors.len(),
                total = entries.len(),
                "record entries rejected"
            );
            Outcome::Failure(ValidationError::Keyed(errors))
        }
    }

    fn constraints(&self) -> &Constraints<Self::Output> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Self::Output> {
        &mut self.constraints
    }
}
