//! Core traits for the validation system
//!
//! [`Validator`] is the contract every shape implements: an intrinsic type
//! check ([`Validator::handle`]) plus an ordered constraint chain. The
//! provided [`Validator::validate`] runs them in that order.
//!
//! [`ValidatorExt`] is blanket-implemented for every validator and carries
//! the copy-on-write builder surface. Every method takes `&self` and returns
//! a new validator, so a configured base can be shared and specialised
//! freely without ever being mutated.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::combinators::{
    ArrayValidator, Defaulted, Optional, RecordValidator, SetValidator, Transform, Union,
};
use crate::foundation::constraint::refinement;
use crate::foundation::{Constraints, Outcome, SharedConstraint, ToValue, ValidationError, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A composable runtime validator.
///
/// Implementors provide the type check and access to their constraint chain;
/// everything else is derived.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_shape::prelude::*;
///
/// let name = shapes::string().length_ge(1);
/// assert_eq!(name.parse(&Value::from("ada")).unwrap(), "ada");
/// assert!(name.validate(&Value::from("")).is_failure());
/// ```
pub trait Validator: Clone + Send + Sync + 'static {
    /// The typed result of a successful validation.
    type Output: Clone + ToValue + Send + Sync + 'static;

    /// Intrinsic type check. Structural validators recurse into children here.
    fn handle(&self, input: &Value) -> Outcome<Self::Output>;

    fn constraints(&self) -> &Constraints<Self::Output>;

    fn constraints_mut(&mut self) -> &mut Constraints<Self::Output>;

    /// Type check, then the constraint chain left to right.
    ///
    /// Never panics: every failure path is a [`Outcome::Failure`].
    fn validate(&self, input: &Value) -> Outcome<Self::Output> {
        let checked = match self.handle(input) {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                tracing::trace!(code = error.code(), received = %input.kind(), "type check failed");
                return Outcome::Failure(error);
            }
        };

        let chain = self.constraints();
        if chain.is_empty() || !chain.should_run() {
            return Outcome::Success(checked);
        }
        chain.apply(checked)
    }

    /// Validates and surfaces the failure as `Err`.
    fn parse(&self, input: &Value) -> Result<Self::Output, ValidationError> {
        self.validate(input).into_result()
    }

    /// `true` if `input` validates.
    fn is(&self, input: &Value) -> bool {
        self.validate(input).is_success()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Copy-on-write builder methods available on every [`Validator`].
pub trait ValidatorExt: Validator {
    /// Returns a copy with `constraint` appended to the chain.
    #[must_use]
    fn add_constraint(&self, constraint: SharedConstraint<Self::Output>) -> Self {
        let mut next = self.clone();
        next.constraints_mut().push(constraint);
        next
    }

    /// Returns a copy that maps the output through `map` after the existing chain.
    #[must_use]
    fn refine<F>(&self, name: impl Into<Cow<'static, str>>, map: F) -> Self
    where
        F: Fn(Self::Output) -> Self::Output + Send + Sync + 'static,
    {
        self.add_constraint(refinement(name, map))
    }

    /// Returns a copy that overrides the global "run constraints" switch.
    #[must_use]
    fn set_validation_enabled(&self, enabled: bool) -> Self {
        let mut next = self.clone();
        next.constraints_mut().set_enabled(enabled);
        next
    }

    /// Wraps the validator so `map` runs after all of its constraints pass.
    fn transform<U, F>(&self, map: F) -> Transform<Self, U>
    where
        U: Clone + ToValue + Send + Sync + 'static,
        F: Fn(Self::Output) -> U + Send + Sync + 'static,
    {
        Transform::new(self.clone(), map)
    }

    /// Passes `Undefined` through as [`Maybe::Undefined`].
    fn optional(&self) -> Optional<Self> {
        Optional::optional(self.clone())
    }

    /// Passes `Null` through as [`Maybe::Null`].
    fn nullable(&self) -> Optional<Self> {
        Optional::nullable(self.clone())
    }

    /// Passes both `Null` and `Undefined` through unchanged.
    fn nullish(&self) -> Optional<Self> {
        Optional::nullish(self.clone())
    }

    /// Substitutes `value` when the input is `Undefined`.
    fn default_value(&self, value: Self::Output) -> Defaulted<Self> {
        Defaulted::with_value(self.clone(), value)
    }

    /// Substitutes the result of `make` when the input is `Undefined`.
    fn default_with<F>(&self, make: F) -> Defaulted<Self>
    where
        F: Fn() -> Self::Output + Send + Sync + 'static,
    {
        Defaulted::with_fn(self.clone(), make)
    }

    /// An array whose elements all validate against `self`.
    fn array(&self) -> ArrayValidator<Self> {
        ArrayValidator::new(self.clone())
    }

    /// A set whose members all validate against `self`.
    fn set(&self) -> SetValidator<Self> {
        SetValidator::new(self.clone())
    }

    /// A record whose values all validate against `self`.
    fn record(&self) -> RecordValidator<Self> {
        RecordValidator::new(self.clone())
    }

    /// A union trying `self` first, then `other`.
    fn or<V>(&self, other: &V) -> Union<Self::Output>
    where
        V: Validator<Output = Self::Output>,
    {
        Union::new([self.boxed(), other.boxed()])
    }

    /// Type-erases the validator.
    fn boxed(&self) -> BoxedValidator<Self::Output> {
        BoxedValidator::new(self.clone())
    }

    /// Type-erases the validator and its output, for heterogeneous containers.
    fn erased(&self) -> BoxedValidator<Value> {
        self.transform(|output: Self::Output| output.to_value()).boxed()
    }
}

impl<V: Validator> ValidatorExt for V {}

// ============================================================================
// TYPE ERASURE
// ============================================================================

/// Object-safe view of a [`Validator`].
pub trait DynValidator<T>: Send + Sync {
    fn validate_dyn(&self, input: &Value) -> Outcome<T>;
}

impl<V: Validator> DynValidator<V::Output> for V {
    fn validate_dyn(&self, input: &Value) -> Outcome<V::Output> {
        self.validate(input)
    }
}

/// A type-erased validator with its own constraint chain.
pub struct BoxedValidator<T> {
    inner: Arc<dyn DynValidator<T>>,
    constraints: Constraints<T>,
}

impl<T> BoxedValidator<T> {
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator<Output = T>,
    {
        Self {
            inner: Arc::new(validator),
            constraints: Constraints::new(),
        }
    }
}

impl<T> Clone for BoxedValidator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            constraints: self.constraints.clone(),
        }
    }
}

impl<T> fmt::Debug for BoxedValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedValidator")
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}

impl<T> Validator for BoxedValidator<T>
where
    T: Clone + ToValue + Send + Sync + 'static,
{
    type Output = T;

    fn handle(&self, input: &Value) -> Outcome<T> {
        self.inner.validate_dyn(input)
    }

    fn constraints(&self) -> &Constraints<T> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<T> {
        &mut self.constraints
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::predicate;

    /// Accepts any string; just enough to exercise the provided methods.
    #[derive(Clone, Default)]
    struct Text {
        constraints: Constraints<String>,
    }

    impl Validator for Text {
        type Output = String;

        fn handle(&self, input: &Value) -> Outcome<String> {
            match input {
                Value::String(s) => Outcome::Success(s.clone()),
                other => Outcome::Failure(ValidationError::type_mismatch(
                    "text",
                    "Expected text",
                    other.clone(),
                )),
            }
        }

        fn constraints(&self) -> &Constraints<String> {
            &self.constraints
        }

        fn constraints_mut(&mut self) -> &mut Constraints<String> {
            &mut self.constraints
        }
    }

    fn non_empty() -> SharedConstraint<String> {
        predicate("text.non_empty", "Empty", "expected non-empty", |s: &String| {
            !s.is_empty()
        })
    }

    #[test]
    fn type_check_runs_before_constraints() {
        let validator = Text::default().add_constraint(non_empty());
        let error = validator.validate(&Value::from(1)).into_error();
        assert_eq!(error.code(), "type_mismatch");
    }

    #[test]
    fn add_constraint_leaves_receiver_untouched() {
        let base = Text::default();
        let strict = base.add_constraint(non_empty());
        assert!(base.is(&Value::from("")));
        assert!(!strict.is(&Value::from("")));
    }

    #[test]
    fn refine_maps_after_existing_chain() {
        let validator = Text::default()
            .add_constraint(non_empty())
            .refine("upper", |s: String| s.to_uppercase());
        assert_eq!(validator.parse(&Value::from("ab")).unwrap(), "AB");
        assert!(validator.parse(&Value::from("")).is_err());
    }

    #[test]
    fn instance_override_skips_constraints() {
        let validator = Text::default()
            .add_constraint(non_empty())
            .set_validation_enabled(false);
        assert!(validator.is(&Value::from("")));
        assert!(!validator.is(&Value::Null));
    }

    #[test]
    fn boxed_validator_keeps_behaviour() {
        let boxed = Text::default().add_constraint(non_empty()).boxed();
        assert!(boxed.is(&Value::from("x")));
        assert!(!boxed.is(&Value::from("")));

        let short = predicate("short", "Too long", "expected < 2", |s: &String| s.len() < 2);
        let boxed = boxed.add_constraint(short);
        assert!(!boxed.is(&Value::from("xyz")));
    }

    #[test]
    fn erased_outputs_value() {
        let erased = Text::default().erased();
        assert_eq!(erased.parse(&Value::from("x")).unwrap(), Value::from("x"));
    }
}
