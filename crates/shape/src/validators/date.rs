//! Date validator

use chrono::{DateTime, Utc};

use crate::constraints::date::{date_eq, date_ge, date_gt, date_le, date_lt, date_ne};
use crate::foundation::{ValidatorExt, Value};

primitive_validator! {
    /// Validates dates. Strings are not parsed.
    pub DateValidator => DateTime<Utc>;
    label = "s.date", message = "Expected a Date";
    match Value::Date(d) => *d;
}

impl DateValidator {
    #[must_use]
    pub fn lt(&self, value: DateTime<Utc>) -> Self {
        self.add_constraint(date_lt(value))
    }

    #[must_use]
    pub fn le(&self, value: DateTime<Utc>) -> Self {
        self.add_constraint(date_le(value))
    }

    #[must_use]
    pub fn gt(&self, value: DateTime<Utc>) -> Self {
        self.add_constraint(date_gt(value))
    }

    #[must_use]
    pub fn ge(&self, value: DateTime<Utc>) -> Self {
        self.add_constraint(date_ge(value))
    }

    #[must_use]
    pub fn eq(&self, value: DateTime<Utc>) -> Self {
        self.add_constraint(date_eq(value))
    }

    #[must_use]
    pub fn ne(&self, value: DateTime<Utc>) -> Self {
        self.add_constraint(date_ne(value))
    }
}
