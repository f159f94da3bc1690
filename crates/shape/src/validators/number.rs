//! Number validator

use crate::constraints::number::{
    number_abs, number_ceil, number_divisible_by, number_eq, number_finite, number_floor,
    number_fround, number_ge, number_gt, number_int, number_le, number_lt, number_ne,
    number_round, number_safe_int, number_sign, number_trunc,
};
use crate::foundation::{ValidatorExt, Value};

primitive_validator! {
    /// Validates `f64` numbers, including `NaN` and the infinities.
    pub NumberValidator => f64;
    label = "s.number", message = "Expected a number primitive";
    match Value::Number(n) => *n;
}

impl NumberValidator {
    #[must_use]
    pub fn lt(&self, value: f64) -> Self {
        self.add_constraint(number_lt(value))
    }

    #[must_use]
    pub fn le(&self, value: f64) -> Self {
        self.add_constraint(number_le(value))
    }

    #[must_use]
    pub fn gt(&self, value: f64) -> Self {
        self.add_constraint(number_gt(value))
    }

    #[must_use]
    pub fn ge(&self, value: f64) -> Self {
        self.add_constraint(number_ge(value))
    }

    /// `eq(f64::NAN)` accepts exactly `NaN`.
    #[must_use]
    pub fn eq(&self, value: f64) -> Self {
        self.add_constraint(number_eq(value))
    }

    /// `ne(f64::NAN)` rejects exactly `NaN`.
    #[must_use]
    pub fn ne(&self, value: f64) -> Self {
        self.add_constraint(number_ne(value))
    }

    #[must_use]
    pub fn int(&self) -> Self {
        self.add_constraint(number_int())
    }

    #[must_use]
    pub fn safe_int(&self) -> Self {
        self.add_constraint(number_safe_int())
    }

    #[must_use]
    pub fn finite(&self) -> Self {
        self.add_constraint(number_finite())
    }

    /// Same as `ge(0.0)`.
    #[must_use]
    pub fn positive(&self) -> Self {
        self.ge(0.0)
    }

    /// Same as `lt(0.0)`.
    #[must_use]
    pub fn negative(&self) -> Self {
        self.lt(0.0)
    }

    #[must_use]
    pub fn divisible_by(&self, divider: f64) -> Self {
        self.add_constraint(number_divisible_by(divider))
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        self.add_constraint(number_abs())
    }

    #[must_use]
    pub fn sign(&self) -> Self {
        self.add_constraint(number_sign())
    }

    #[must_use]
    pub fn trunc(&self) -> Self {
        self.add_constraint(number_trunc())
    }

    #[must_use]
    pub fn floor(&self) -> Self {
        self.add_constraint(number_floor())
    }

    #[must_use]
    pub fn fround(&self) -> Self {
        self.add_constraint(number_fround())
    }

    #[must_use]
    pub fn round(&self) -> Self {
        self.add_constraint(number_round())
    }

    #[must_use]
    pub fn ceil(&self) -> Self {
        self.add_constraint(number_ceil())
    }
}
