//! Success/failure result algebra
//!
//! Every validation step returns an [`Outcome`]. It is deliberately separate
//! from [`Result`] so that internal composition never reaches for `?` across
//! component boundaries; conversion to `Result` happens once, at
//! [`Validator::parse`](crate::foundation::Validator::parse).

use crate::foundation::ValidationError;

/// Result of a validation step: a value or a single error.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "validation outcomes must be inspected"]
pub enum Outcome<T, E = ValidationError> {
    /// Validation passed and produced a value.
    Success(T),
    /// Validation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. Reading the wrong variant is a
    /// programming error, not a validation error.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::value()` on a `Failure`"),
        }
    }

    /// Returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("called `Outcome::error()` on a `Success`"),
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::into_value()` on a `Failure`"),
        }
    }

    /// Consumes the outcome and returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("called `Outcome::into_error()` on a `Success`"),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Surfaces the contained error as `Err` for boundary callers.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
