//! Big integer (`i128`) constraints and wrapping transforms

use crate::constraints::{comparator, eq, ge, gt, le, lt, ne};
use crate::foundation::{SharedConstraint, predicate, refinement};

const MESSAGE: &str = "Invalid bigint value";

pub fn bigint_lt(value: i128) -> SharedConstraint<i128> {
    comparator("s.bigint.lt", MESSAGE, format!("expected < {value}n"), value, lt)
}

pub fn bigint_le(value: i128) -> SharedConstraint<i128> {
    comparator("s.bigint.le", MESSAGE, format!("expected <= {value}n"), value, le)
}

pub fn bigint_gt(value: i128) -> SharedConstraint<i128> {
    comparator("s.bigint.gt", MESSAGE, format!("expected > {value}n"), value, gt)
}

pub fn bigint_ge(value: i128) -> SharedConstraint<i128> {
    comparator("s.bigint.ge", MESSAGE, format!("expected >= {value}n"), value, ge)
}

pub fn bigint_eq(value: i128) -> SharedConstraint<i128> {
    comparator("s.bigint.eq", MESSAGE, format!("expected === {value}n"), value, eq)
}

pub fn bigint_ne(value: i128) -> SharedConstraint<i128> {
    comparator("s.bigint.ne", MESSAGE, format!("expected !== {value}n"), value, ne)
}

/// Passes when `input % divider == 0`. A zero divider never passes; `-1`
/// divides everything, including `i128::MIN`.
pub fn bigint_divisible_by(divider: i128) -> SharedConstraint<i128> {
    predicate(
        "s.bigint.divisibleBy",
        "BigInt is not divisible",
        format!("expected % {divider}n === 0n"),
        move |n: &i128| match divider {
            0 => false,
            -1 => true,
            _ => n % divider == 0,
        },
    )
}

// ============================================================================
// TRANSFORMS
// ============================================================================

/// Absolute value, saturating at `i128::MAX`.
pub fn bigint_abs() -> SharedConstraint<i128> {
    refinement("s.bigint.abs", i128::saturating_abs)
}

/// Wraps the value into a signed integer of `bits` width.
///
/// Widths are clamped to `0..=128`; a zero width always yields `0`.
pub fn bigint_int_n(bits: u32) -> SharedConstraint<i128> {
    let bits = bits.min(128);
    refinement("s.bigint.intN", move |n: i128| as_int_n(bits, n))
}

/// Wraps the value into an unsigned integer of `bits` width.
///
/// Widths are clamped to `0..=127` so the result stays representable.
pub fn bigint_uint_n(bits: u32) -> SharedConstraint<i128> {
    let bits = bits.min(127);
    refinement("s.bigint.uintN", move |n: i128| as_uint_n(bits, n))
}

fn as_uint_n(bits: u32, n: i128) -> i128 {
    if bits == 0 {
        return 0;
    }
    n & (i128::MAX >> (127 - bits))
}

fn as_int_n(bits: u32, n: i128) -> i128 {
    if bits == 0 {
        return 0;
    }
    if bits >= 128 {
        return n;
    }
    let shift = 128 - bits;
    (n << shift) >> shift
}
