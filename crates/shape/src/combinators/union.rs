//! UNION combinator - first matching alternative wins
//!
//! Alternatives are tried in declaration order. The first success is
//! returned as-is (including any transform that alternative applied) and the
//! remaining alternatives never run, so narrower alternatives should come
//! before broader ones. When every alternative fails, the error lists each
//! failure in declaration order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_shape::prelude::*;
//!
//! let one_or_two = shapes::union([shapes::literal(1).boxed(), shapes::literal(2).boxed()]);
//! assert!(one_or_two.is(&Value::from(2)));
//!
//! let ValidationError::Combined(errors) = one_or_two.parse(&Value::from(3)).unwrap_err() else {
//!     unreachable!()
//! };
//! assert_eq!(errors.len(), 2);
//! ```

use std::fmt;

use crate::foundation::{
    BoxedValidator, Constraints, Outcome, ToValue, ValidationError, Validator, ValidatorExt, Value,
};

/// Ordered alternatives sharing one output type.
pub struct Union<T> {
    alternatives: Vec<BoxedValidator<T>>,
    constraints: Constraints<T>,
}

impl<T> Union<T>
where
    T: Clone + ToValue + Send + Sync + 'static,
{
    pub fn new(alternatives: impl IntoIterator<Item = BoxedValidator<T>>) -> Self {
        Self {
            alternatives: alternatives.into_iter().collect(),
            constraints: Constraints::new(),
        }
    }

    #[must_use]
    pub fn alternatives(&self) -> &[BoxedValidator<T>] {
        &self.alternatives
    }

    /// Returns a copy with `other` appended as the last alternative.
    #[must_use]
    pub fn or<V>(&self, other: &V) -> Self
    where
        V: Validator<Output = T>,
    {
        let mut next = self.clone();
        next.alternatives.push(other.boxed());
        next
    }
}

impl<T> Clone for Union<T> {
    fn clone(&self) -> Self {
        Self {
            alternatives: self.alternatives.clone(),
            constraints: self.constraints.clone(),
        }
    }
}

impl<T> fmt::Debug for Union<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("alternatives", &self.alternatives.len())
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl<T> Validator for Union<T>
where
    T: Clone + ToValue + Send + Sync + 'static,
{
    type Output = T;

    fn handle(&self, input: &Value) -> Outcome<T> {
        let mut errors = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.validate(input) {
                Outcome::Success(value) => return Outcome::Success(value),
                Outcome::Failure(error) => errors.push(error),
            }
        }

        tracing::debug!(alternatives = errors.len(), "no union alternative matched");
        Outcome::Failure(ValidationError::Combined(errors))
    }

    fn constraints(&self) -> &Constraints<T> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<T> {
        &mut self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{LiteralValidator, NumberValidator, StringValidator};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn one_or_two() -> Union<Value> {
        Union::new([
            LiteralValidator::new(1).boxed(),
            LiteralValidator::new(2).boxed(),
        ])
    }

    #[test]
    fn first_success_wins() {
        assert_eq!(one_or_two().parse(&Value::from(2)).unwrap(), Value::from(2));
    }

    #[test]
    fn all_failures_in_declaration_order() {
        let error = one_or_two().parse(&Value::from(3)).unwrap_err();
        let ValidationError::Combined(errors) = error else {
            panic!("expected combined error");
        };
        let expected: Vec<_> = errors
            .iter()
            .map(|e| match e {
                ValidationError::ExpectedValue { expected, .. } => expected.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(expected, [Value::from(1), Value::from(2)]);
    }

    #[test]
    fn later_alternatives_do_not_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = NumberValidator::new().refine("count", move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n
        });

        let union = NumberValidator::new().abs().or(&counted);
        assert_eq!(union.parse(&Value::from(-3)).unwrap(), 3.0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn or_appends_without_mutating() {
        let base = Union::new([StringValidator::new().erased()]);
        let wider = base.or(&NumberValidator::new().erased());
        assert_eq!(base.alternatives().len(), 1);
        assert_eq!(wider.alternatives().len(), 2);
        assert!(!base.is(&Value::from(1)));
        assert!(wider.is(&Value::from(1)));
    }
}
