//! Big integer validator

use crate::constraints::bigint::{
    bigint_abs, bigint_divisible_by, bigint_eq, bigint_ge, bigint_gt, bigint_int_n, bigint_le,
    bigint_lt, bigint_ne, bigint_uint_n,
};
use crate::foundation::{ValidatorExt, Value};

primitive_validator! {
    /// Validates big integers. Plain numbers are rejected, even when integral.
    pub BigIntValidator => i128;
    label = "s.bigint", message = "Expected a bigint primitive";
    match Value::BigInt(n) => *n;
}

impl BigIntValidator {
    #[must_use]
    pub fn lt(&self, value: i128) -> Self {
        self.add_constraint(bigint_lt(value))
    }

    #[must_use]
    pub fn le(&self, value: i128) -> Self {
        self.add_constraint(bigint_le(value))
    }

    #[must_use]
    pub fn gt(&self, value: i128) -> Self {
        self.add_constraint(bigint_gt(value))
    }

    #[must_use]
    pub fn ge(&self, value: i128) -> Self {
        self.add_constraint(bigint_ge(value))
    }

    #[must_use]
    pub fn eq(&self, value: i128) -> Self {
        self.add_constraint(bigint_eq(value))
    }

    #[must_use]
    pub fn ne(&self, value: i128) -> Self {
        self.add_constraint(bigint_ne(value))
    }

    #[must_use]
    pub fn positive(&self) -> Self {
        self.ge(0)
    }

    #[must_use]
    pub fn negative(&self) -> Self {
        self.lt(0)
    }

    #[must_use]
    pub fn divisible_by(&self, divider: i128) -> Self {
        self.add_constraint(bigint_divisible_by(divider))
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        self.add_constraint(bigint_abs())
    }

    #[must_use]
    pub fn int_n(&self, bits: u32) -> Self {
        self.add_constraint(bigint_int_n(bits))
    }

    #[must_use]
    pub fn uint_n(&self, bits: u32) -> Self {
        self.add_constraint(bigint_uint_n(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validator;

    #[test]
    fn rejects_plain_numbers() {
        let validator = BigIntValidator::new();
        assert_eq!(validator.parse(&Value::BigInt(42)).unwrap(), 42);
        assert!(validator.parse(&Value::from(42)).is_err());
    }

    #[test]
    fn uint_n_wraps_after_bounds() {
        let validator = BigIntValidator::new().lt(0).uint_n(8);
        assert_eq!(validator.parse(&Value::BigInt(-1)).unwrap(), 255);
        assert!(validator.parse(&Value::BigInt(1)).is_err());
    }
}
