//! Leaf constraint factories
//!
//! Each factory closes over its parameters and returns a
//! [`SharedConstraint`]. Names follow the `s.<kind>.<check>` convention and
//! are stable: callers match on them.
//!
//! # Categories
//!
//! - [`number`]: comparisons, integer/finite checks, divisibility, rounding
//! - [`bigint`]: comparisons, divisibility, wrapping to a bit width
//! - [`string`]: length, regex, email, URL, UUID, IP
//! - [`boolean`]: `true` / `false`
//! - [`date`]: comparisons against an instant
//! - [`array`]: length comparisons and ranges

pub mod array;
pub mod bigint;
pub mod boolean;
pub mod date;
pub mod number;
pub mod string;

use std::borrow::Cow;

use crate::foundation::{Outcome, SharedConstraint, ToValue, ValidationError, constraint};

// ============================================================================
// COMPARATORS
// ============================================================================

pub(crate) type Comparator<T> = fn(&T, &T) -> bool;

pub(crate) fn lt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

pub(crate) fn le<T: PartialOrd>(a: &T, b: &T) -> bool {
    a <= b
}

pub(crate) fn gt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

pub(crate) fn ge<T: PartialOrd>(a: &T, b: &T) -> bool {
    a >= b
}

pub(crate) fn eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

pub(crate) fn ne<T: PartialEq>(a: &T, b: &T) -> bool {
    a != b
}

/// Builds a constraint comparing the input against a fixed bound.
pub(crate) fn comparator<T>(
    name: &'static str,
    message: &'static str,
    expected: impl Into<Cow<'static, str>>,
    bound: T,
    compare: Comparator<T>,
) -> SharedConstraint<T>
where
    T: ToValue + Send + Sync + 'static,
{
    let expected = expected.into();
    constraint(name, move |input: T| {
        if compare(&input, &bound) {
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
