//! Native enum validator
//!
//! Models a host-language enum as ordered `(member name, member value)`
//! pairs. Input may be either a member name or a member value; the result is
//! always the member value.

use crate::foundation::{Constraints, Outcome, ValidationError, Validator, Value};

#[derive(Debug, Clone)]
pub struct NativeEnumValidator {
    pairs: Vec<(String, Value)>,
    constraints: Constraints<Value>,
}

impl NativeEnumValidator {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            constraints: Constraints::new(),
        }
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, Value)] {
        &self.pairs
    }

    fn wrong_input(&self, input: &Value) -> ValidationError {
        ValidationError::WrongEnumInput {
            received: input.clone(),
            pairs: self.pairs.clone(),
        }
    }
}

impl Validator for NativeEnumValidator {
    type Output = Value;

    fn handle(&self, input: &Value) -> Outcome<Value> {
        match input {
            Value::String(name) => {
                if let Some((_, value)) = self.pairs.iter().find(|(key, _)| key == name) {
                    return Outcome::Success(value.clone());
                }
            }
            Value::Number(_) => {}
            other => {
                return Outcome::Failure(ValidationError::type_mismatch(
                    "s.nativeEnum(T)",
                    "Expected the value to be a string or number",
                    other.clone(),
                ));
            }
        }

        match self.pairs.iter().find(|(_, value)| value.same_value(input)) {
            Some((_, value)) => Outcome::Success(value.clone()),
            None => Outcome::Failure(self.wrong_input(input)),
        }
    }

    fn constraints(&self) -> &Constraints<Value> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Value> {
        &mut self.constraints
    }
}
