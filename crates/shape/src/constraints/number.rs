//! Number (`f64`) constraints and same-type transforms

use crate::constraints::{comparator, eq, ge, gt, le, lt, ne};
use crate::foundation::stringify::format_number;
use crate::foundation::{SharedConstraint, predicate, refinement};

const MESSAGE: &str = "Invalid number value";

/// Largest integer exactly representable in an `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn number_lt(value: f64) -> SharedConstraint<f64> {
    comparator("s.number.lt", MESSAGE, format!("expected < {}", format_number(value)), value, lt)
}

pub fn number_le(value: f64) -> SharedConstraint<f64> {
    comparator("s.number.le", MESSAGE, format!("expected <= {}", format_number(value)), value, le)
}

pub fn number_gt(value: f64) -> SharedConstraint<f64> {
    comparator("s.number.gt", MESSAGE, format!("expected > {}", format_number(value)), value, gt)
}

pub fn number_ge(value: f64) -> SharedConstraint<f64> {
    comparator("s.number.ge", MESSAGE, format!("expected >= {}", format_number(value)), value, ge)
}

/// Equality; `NaN` delegates to [`number_nan`] since `NaN != NaN`.
pub fn number_eq(value: f64) -> SharedConstraint<f64> {
    if value.is_nan() {
        return number_nan();
    }
    comparator("s.number.eq", MESSAGE, format!("expected === {}", format_number(value)), value, eq)
}

/// Inequality; `NaN` delegates to [`number_ne_nan`].
pub fn number_ne(value: f64) -> SharedConstraint<f64> {
    if value.is_nan() {
        return number_ne_nan();
    }
    comparator("s.number.ne", MESSAGE, format!("expected !== {}", format_number(value)), value, ne)
}

pub fn number_nan() -> SharedConstraint<f64> {
    predicate("s.number.eq(NaN)", MESSAGE, "expected === NaN", |n: &f64| n.is_nan())
}

pub fn number_ne_nan() -> SharedConstraint<f64> {
    predicate("s.number.ne(NaN)", MESSAGE, "expected !== NaN", |n: &f64| !n.is_nan())
}

pub fn number_int() -> SharedConstraint<f64> {
    predicate(
        "s.number.int",
        "Given value is not an integer",
        "expected an integer",
        |n: &f64| n.is_finite() && n.fract() == 0.0,
    )
}

pub fn number_safe_int() -> SharedConstraint<f64> {
    predicate(
        "s.number.safeInt",
        "Given value is not a safe integer",
        "expected a safe integer",
        |n: &f64| n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER,
    )
}

pub fn number_finite() -> SharedConstraint<f64> {
    predicate(
        "s.number.finite",
        "Given value is not finite",
        "expected a finite number",
        |n: &f64| n.is_finite(),
    )
}

/// Passes when `input % divider == 0`; never passes for non-finite input.
pub fn number_divisible_by(divider: f64) -> SharedConstraint<f64> {
    predicate(
        "s.number.divisibleBy",
        "Number is not divisible",
        format!("expected % {} === 0", format_number(divider)),
        move |n: &f64| (n % divider) == 0.0,
    )
}

// ============================================================================
// TRANSFORMS
// ============================================================================

pub fn number_abs() -> SharedConstraint<f64> {
    refinement("s.number.abs", f64::abs)
}

/// `-1`, `0` or `1`; zero and `NaN` keep their value.
pub fn number_sign() -> SharedConstraint<f64> {
    refinement("s.number.sign", |n: f64| {
        if n == 0.0 || n.is_nan() { n } else { n.signum() }
    })
}

pub fn number_trunc() -> SharedConstraint<f64> {
    refinement("s.number.trunc", f64::trunc)
}

pub fn number_floor() -> SharedConstraint<f64> {
    refinement("s.number.floor", f64::floor)
}

/// Rounds to the nearest single-precision value.
#[allow(clippy::cast_possible_truncation)]
pub fn number_fround() -> SharedConstraint<f64> {
    refinement("s.number.fround", |n: f64| f64::from(n as f32))
}

/// Rounds half-way cases toward positive infinity.
pub fn number_round() -> SharedConstraint<f64> {
    refinement("s.number.round", |n: f64| {
        let floor = n.floor();
        if n - floor >= 0.5 { floor + 1.0 } else { floor }
    })
}

pub fn number_ceil() -> SharedConstraint<f64> {
    refinement("s.number.ceil", f64::ceil)
}
