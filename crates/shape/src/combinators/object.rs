//! OBJECT combinator - per-key shape over records
//!
//! Each declared key carries its own type-erased validator. Keys missing
//! from the input are validated as `Undefined`, so optional and defaulted
//! fields behave naturally. How undeclared keys are treated depends on the
//! [`ObjectStrategy`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_shape::prelude::*;
//!
//! let user = shapes::object()
//!     .field("name", &shapes::string().length_ge(1))
//!     .field("age", &shapes::number().int().optional())
//!     .strict();
//!
//! let ok = user.parse(&Value::record([("name", "ada")])).unwrap();
//! assert_eq!(ok.len(), 1);
//! ```

use indexmap::IndexMap;

use crate::foundation::{
    BoxedValidator, Constraints, Outcome, ValidationError, Validator, ValidatorExt, Value,
};

/// What happens to input keys that the shape does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectStrategy {
    /// Undeclared keys are dropped from the output.
    #[default]
    Ignore,
    /// Undeclared keys are reported as `UnknownProperty`.
    Strict,
    /// Undeclared keys are copied to the output unchanged.
    Passthrough,
}

#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    shape: IndexMap<String, BoxedValidator<Value>>,
    strategy: ObjectStrategy,
    constraints: Constraints<IndexMap<String, Value>>,
}

impl ObjectValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an object from pre-erased field validators.
    pub fn from_shape<K, I>(shape: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, BoxedValidator<Value>)>,
    {
        Self {
            shape: shape.into_iter().map(|(key, v)| (key.into(), v)).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn shape(&self) -> &IndexMap<String, BoxedValidator<Value>> {
        &self.shape
    }

    #[must_use]
    pub const fn strategy(&self) -> ObjectStrategy {
        self.strategy
    }

    /// Returns a copy with `key` validated by `validator`, replacing any
    /// existing declaration of that key.
    #[must_use]
    pub fn field<V: Validator>(&self, key: impl Into<String>, validator: &V) -> Self {
        let mut next = self.clone();
        next.shape.insert(key.into(), validator.erased());
        next
    }

    /// Returns a copy with every field of `other` added; `other` wins on clashes.
    #[must_use]
    pub fn extend(&self, other: &Self) -> Self {
        let mut next = self.clone();
        next.shape
            .extend(other.shape.iter().map(|(k, v)| (k.clone(), v.clone())));
        next
    }

    /// Returns a copy keeping only the named fields.
    #[must_use]
    pub fn pick<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let keys: Vec<&str> = keys.into_iter().collect();
        let mut next = self.clone();
        next.shape.retain(|key, _| keys.contains(&key.as_str()));
        next
    }

    /// Returns a copy without the named fields.
    #[must_use]
    pub fn omit<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let keys: Vec<&str> = keys.into_iter().collect();
        let mut next = self.clone();
        next.shape.retain(|key, _| !keys.contains(&key.as_str()));
        next
    }

    /// Returns a copy where every field also accepts `Undefined`.
    #[must_use]
    pub fn partial(&self) -> Self {
        let mut next = self.clone();
        for validator in next.shape.values_mut() {
            *validator = validator.optional().erased();
        }
        next
    }

    #[must_use]
    pub fn strict(&self) -> Self {
        self.with_strategy(ObjectStrategy::Strict)
    }

    #[must_use]
    pub fn passthrough(&self) -> Self {
        self.with_strategy(ObjectStrategy::Passthrough)
    }

    #[must_use]
    pub fn ignore(&self) -> Self {
        self.with_strategy(ObjectStrategy::Ignore)
    }

    fn with_strategy(&self, strategy: ObjectStrategy) -> Self {
        let mut next = self.clone();
        next.strategy = strategy;
        next
    }
}

impl Validator for ObjectValidator {
    type Output = IndexMap<String, Value>;

    fn handle(&self, input: &Value) -> Outcome<Self::Output> {
        let entries = match input {
            Value::Record(entries) => entries,
            Value::Null => {
                return Outcome::Failure(ValidationError::type_mismatch(
                    "s.object(T)",
                    "Expected the value to not be null",
                    Value::Null,
                ));
            }
            other => {
                return Outcome::Failure(ValidationError::type_mismatch(
                    "s.object(T)",
                    "Expected the value to be an object",
                    other.clone(),
                ));
            }
        };

        let mut errors = Vec::new();
        let mut output = IndexMap::with_capacity(self.shape.len());

        for (key, validator) in &self.shape {
            match entries.get(key) {
                Some(value) => match validator.validate(value) {
                    Outcome::Success(validated) => {
                        output.insert(key.clone(), validated);
                    }
                    Outcome::Failure(error) => errors.push((key.clone(), error)),
                },
                None => match validator.validate(&Value::Undefined) {
                    Outcome::Success(Value::Undefined) => {}
                    Outcome::Success(validated) => {
                        output.insert(key.clone(), validated);
                    }
                    Outcome::Failure(_) => {
                        errors.push((key.clone(), ValidationError::missing_property(key.clone())));
                    }
                },
            }
        }

        for (key, value) in entries {
            if self.shape.contains_key(key) {
                continue;
            }
            match self.strategy {
                ObjectStrategy::Ignore => {}
                ObjectStrategy::Strict => {
                    let error = ValidationError::unknown_property(key.clone(), value.clone());
                    errors.push((key.clone(), error));
                }
                ObjectStrategy::Passthrough => {
                    output.insert(key.clone(), value.clone());
                }
            }
        }

        if errors.is_empty() {
            Outcome::Success(output)
        } else {
            tracing::debug!(
                failed = errors.len(),
                declared = self.shape.len(),
                strategy = ?self.strategy,
                "object properties rejected"
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
