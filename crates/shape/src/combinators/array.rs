//! ARRAY combinator - validates every element of an array
//!
//! Element validation is exhaustive: every element is checked and each
//! failure is reported with its index. The optional uniqueness check runs
//! first, on the raw elements, and short-circuits element validation. When
//! constraints are switched off, uniqueness is skipped and elements are only
//! converted, without their own constraint chains.

use std::collections::HashSet;

use crate::constraints::array::{
    array_length_eq, array_length_ge, array_length_gt, array_length_le, array_length_lt,
    array_length_ne, array_length_range, array_length_range_exclusive,
    array_length_range_inclusive,
};
use crate::foundation::{
    Constraints, Outcome, ValidationError, Validator, ValidatorExt, Value, stringify,
};

// ============================================================================
// ARRAY COMBINATOR
// ============================================================================

/// Validates arrays whose elements all satisfy one child validator.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_shape::prelude::*;
///
/// let tags = shapes::string().array();
/// assert_eq!(tags.parse(&Value::array(["a", "b"])).unwrap(), ["a", "b"]);
///
/// let error = tags.parse(&Value::array([Value::from(1), Value::from("b")])).unwrap_err();
/// let ValidationError::Indexed(entries) = error else { unreachable!() };
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].0, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator<V: Validator> {
    element: V,
    unique: bool,
    constraints: Constraints<Vec<V::Output>>,
}

impl<V: Validator> ArrayValidator<V> {
    pub fn new(element: V) -> Self {
        Self {
            element,
            unique: false,
            constraints: Constraints::new(),
        }
    }

    /// The validator applied to each element.
    pub fn element(&self) -> &V {
        &self.element
    }

    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns a copy that rejects arrays with structurally equal elements.
    #[must_use]
    pub fn unique(&self) -> Self {
        Self {
            unique: true,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn length_lt(&self, length: usize) -> Self {
        self.add_constraint(array_length_lt(length))
    }

    #[must_use]
    pub fn length_le(&self, length: usize) -> Self {
        self.add_constraint(array_length_le(length))
    }

    #[must_use]
    pub fn length_gt(&self, length: usize) -> Self {
        self.add_constraint(array_length_gt(length))
    }

    #[must_use]
    pub fn length_ge(&self, length: usize) -> Self {
        self.add_constraint(array_length_ge(length))
    }

    #[must_use]
    pub fn length_eq(&self, length: usize) -> Self {
        self.add_constraint(array_length_eq(length))
    }

    #[must_use]
    pub fn length_ne(&self, length: usize) -> Self {
        self.add_constraint(array_length_ne(length))
    }

    /// `start <= len < end_before`.
    #[must_use]
    pub fn length_range(&self, start: usize, end_before: usize) -> Self {
        self.add_constraint(array_length_range(start, end_before))
    }

    /// `start_at <= len <= end_at`.
    #[must_use]
    pub fn length_range_inclusive(&self, start_at: usize, end_at: usize) -> Self {
        self.add_constraint(array_length_range_inclusive(start_at, end_at))
    }

    /// `start_after < len < end_before`.
    #[must_use]
    pub fn length_range_exclusive(&self, start_after: usize, end_before: usize) -> Self {
        self.add_constraint(array_length_range_exclusive(start_after, end_before))
    }
}

fn all_unique(items: &[Value]) -> bool {
    if items.len() < 2 {
        return true;
    }
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(stringify(item)))
}

impl<V: Validator> Validator for ArrayValidator<V> {
    type Output = Vec<V::Output>;

    fn handle(&self, input: &Value) -> Outcome<Self::Output> {
        let Value::Array(items) = input else {
            return Outcome::Failure(ValidationError::type_mismatch(
                "s.array(T)",
                "Expected an array",
                input.clone(),
            ));
        };

        let run_constraints = self.constraints.should_run();
        if self.unique && run_constraints && !all_unique(items) {
            return Outcome::Failure(ValidationError::constraint(
                "s.array(T).unique",
                "Array values are not unique",
                input.clone(),
                "expected all values to be unique",
            ));
        }

        let mut errors = Vec::new();
        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            // With constraints off, elements are only converted.
            let outcome = if run_constraints {
                self.element.validate(item)
            } else {
                self.element.handle(item)
            };
            match outcome {
                Outcome::Success(value) => output.push(value),
                Outcome::Failure(error) => errors.push((index, error)),
            }
        }

        if errors.is_empty() {
            Outcome::Success(output)
        } else {
            tracing::debug!(
                failed = errors.len(),
                total = items.len(),
                "array elements rejected"
            );
            Outcome::Failure(ValidationError::Indexed(errors))
        }
    }

    fn constraints(&self) -> &Constraints<Self::Output> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Self::Output> {
        &mut self.constraints
    }
}

// ============================================================================
// TESTS
// ============================================================================
