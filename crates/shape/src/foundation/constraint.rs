//! Constraint contract and the per-validator constraint chain
//!
//! A [`Constraint`] is a named, pure check over a value that already passed
//! its validator's type check. It may hand back a modified value, which is
//! how same-type transforms (`abs`, `floor`, ...) ride the same chain.
//!
//! [`Constraints`] is the ordered, append-only list a validator owns.
//! Constraints themselves are shared (`Arc`) and stateless, so copying a
//! chain is cheap and never aliases mutable state.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::config;
use crate::foundation::{Outcome, ToValue, ValidationError};

// ============================================================================
// CONSTRAINT TRAIT
// ============================================================================

/// A named check applied to a type-correct value.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_shape::foundation::{constraint, Outcome, ValidationError, Value};
///
/// let even = constraint("even", |n: f64| {
///     if n % 2.0 == 0.0 {
///         Outcome::success(n)
///     } else {
///         Outcome::failure(ValidationError::constraint("even", "Odd", Value::from(n), "even"))
///     }
/// });
/// ```
pub trait Constraint<T>: Send + Sync {
    /// Stable name used in diagnostics and error matching.
    fn name(&self) -> &str;

    /// Checks `input`, passing it (or a refined version of it) through.
    fn run(&self, input: T) -> Outcome<T>;
}

/// A constraint shared between validator instances.
pub type SharedConstraint<T> = Arc<dyn Constraint<T>>;

/// Closure-backed [`Constraint`].
pub struct FnConstraint<T, F> {
    name: Cow<'static, str>,
    check: F,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, F> Constraint<T> for FnConstraint<T, F>
where
    F: Fn(T) -> Outcome<T> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, input: T) -> Outcome<T> {
        (self.check)(input)
    }
}

/// Creates a constraint from a closure.
pub fn constraint<T, F>(name: impl Into<Cow<'static, str>>, check: F) -> SharedConstraint<T>
where
    T: 'static,
    F: Fn(T) -> Outcome<T> + Send + Sync + 'static,
{
    Arc::new(FnConstraint {
        name: name.into(),
        check,
        _marker: PhantomData,
    })
}

/// Creates a constraint from a boolean rule, failing with a
/// [`ValidationError::Constraint`] carrying `message` and `expected`.
pub fn predicate<T, F>(
    name: &'static str,
    message: &'static str,
    expected: impl Into<Cow<'static, str>>,
    rule: F,
) -> SharedConstraint<T>
where
    T: ToValue + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let expected = expected.into();
    constraint(name, move |input: T| {
        if rule(&input) {
            Outcome::Success(input)
        } else {
            Outcome::Failure(ValidationError::constraint(
                name,
                message,
                input.to_value(),
                expected.clone(),
            ))
        }
    })
}

/// Creates a constraint that always passes, replacing the value with `map(value)`.
pub fn refinement<T, F>(name: impl Into<Cow<'static, str>>, map: F) -> SharedConstraint<T>
where
    T: 'static,
    F: Fn(T) -> T + Send + Sync + 'static,
{
    constraint(name, move |input: T| Outcome::Success(map(input)))
}

// ============================================================================
// CONSTRAINT CHAIN
// ============================================================================

/// Ordered constraint chain owned by one validator instance.
///
/// Insertion order is evaluation order. The chain also carries the
/// instance's override of the global "run constraints" switch.
pub struct Constraints<T> {
    items: SmallVec<[SharedConstraint<T>; 4]>,
    enabled: Option<bool>,
}

impl<T> Constraints<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
            enabled: None,
        }
    }

    /// Appends a constraint. Only ever called on a fresh copy of a chain.
    pub(crate) fn push(&mut self, constraint: SharedConstraint<T>) {
        self.items.push(constraint);
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = Some(enabled);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Constraint names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|c| c.name())
    }

    /// Whether constraints should run, honoring the instance override first.
    #[must_use]
    pub fn should_run(&self) -> bool {
        self.enabled
            .unwrap_or_else(config::global_validation_enabled)
    }

    /// Folds `value` through the chain; the first failure stops the fold.
    pub fn apply(&self, value: T) -> Outcome<T> {
        let mut current = value;
        for constraint in &self.items {
            match constraint.run(current) {
                Outcome::Success(next) => current = next,
                Outcome::Failure(error) => {
                    tracing::trace!(constraint = constraint.name(), "constraint rejected value");
                    return Outcome::Failure(error);
                }
            }
        }
        Outcome::Success(current)
    }
}

impl<T> Default for Constraints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Constraints<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            enabled: self.enabled,
        }
    }
}

impl<T> fmt::Debug for Constraints<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraints")
            .field("names", &self.names().collect::<Vec<_>>())
            .field("enabled", &self.enabled)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
