//! OPTIONAL combinator - lets the null sentinels through unchanged

use crate::foundation::{Constraints, Outcome, ToValue, Validator, Value};

/// Which inputs count as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// `Undefined` only.
    Undefined,
    /// `Null` only.
    Null,
    /// Both `Null` and `Undefined`.
    Nullish,
}

impl Absence {
    #[must_use]
    pub const fn matches(self, input: &Value) -> bool {
        match self {
            Self::Undefined => input.is_undefined(),
            Self::Null => input.is_null(),
            Self::Nullish => input.is_nullish(),
        }
    }
}

/// Output of [`Optional`]: the sentinel that was accepted, or the inner output.
///
/// Converts back to the same sentinel, so `Null` stays `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Maybe<T> {
    Undefined,
    Null,
    Present(T),
}

impl<T> Maybe<T> {
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Undefined | Self::Null => None,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Undefined | Self::Null => None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: ToValue> ToValue for Maybe<T> {
    fn to_value(&self) -> Value {
        match self {
            Self::Undefined => Value::Undefined,
            Self::Null => Value::Null,
            Self::Present(value) => value.to_value(),
        }
    }
}

/// Wraps a validator so absent inputs pass through as [`Maybe`] sentinels.
///
/// Absent inputs short-circuit: the inner validator and its constraints
/// never see them.
#[derive(Debug, Clone)]
pub struct Optional<V: Validator> {
    inner: V,
    absence: Absence,
    constraints: Constraints<Maybe<V::Output>>,
}

impl<V: Validator> Optional<V> {
    pub fn new(inner: V, absence: Absence) -> Self {
        Self {
            inner,
            absence,
            constraints: Constraints::new(),
        }
    }

    pub fn optional(inner: V) -> Self {
        Self::new(inner, Absence::Undefined)
    }

    pub fn nullable(inner: V) -> Self {
        Self::new(inner, Absence::Null)
    }

    pub fn nullish(inner: V) -> Self {
        Self::new(inner, Absence::Nullish)
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub const fn absence(&self) -> Absence {
        self.absence
    }
}

impl<V: Validator> Validator for Optional<V> {
    type Output = Maybe<V::Output>;

    fn handle(&self, input: &Value) -> Outcome<Self::Output> {
        match input {
            Value::Undefined if self.absence.matches(input) => Outcome::Success(Maybe::Undefined),
            Value::Null if self.absence.matches(input) => Outcome::Success(Maybe::Null),
            _ => self.inner.validate(input).map(Maybe::Present),
        }
    }

    fn constraints(&self) -> &Constraints<Self::Output> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<Self::Output> {
        &mut self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidatorExt;
    use crate::validators::StringValidator;
    use rstest::rstest;

    #[rstest]
    #[case(Absence::Undefined, Value::Undefined, true)]
    #[case(Absence::Undefined, Value::Null, false)]
    #[case(Absence::Null, Value::Null, true)]
    #[case(Absence::Null, Value::Undefined, false)]
    #[case(Absence::Nullish, Value::Null, true)]
    #[case(Absence::Nullish, Value::Undefined, true)]
    fn absent_inputs(#[case] absence: Absence, #[case] input: Value, #[case] passes: bool) {
        let validator = Optional::new(StringValidator::new(), absence);
        let outcome = validator.validate(&input);
        assert_eq!(outcome.is_success(), passes);
        if passes {
            assert_eq!(outcome.into_value().to_value(), input);
        }
    }

    #[test]
    fn present_values_use_inner() {
        let validator = StringValidator::new().length_ge(3).nullable();
        assert_eq!(
            validator.parse(&Value::from("Hello There")).unwrap(),
            Maybe::Present("Hello There".to_owned())
        );
        assert!(validator.parse(&Value::from("hi")).is_err());
    }

    #[test]
    fn absent_input_skips_inner_constraints() {
        let validator = StringValidator::new().length_ge(3).optional();
        assert_eq!(validator.parse(&Value::Undefined).unwrap(), Maybe::Undefined);
    }

    #[test]
    fn nullable_output_revalidates() {
        let validator = StringValidator::new().nullable();
        let output = validator.parse(&Value::Null).unwrap();
        assert_eq!(output.to_value(), Value::Null);
        assert_eq!(validator.parse(&output.to_value()), Ok(Maybe::Null));
        assert_eq!(output.into_option(), None);
    }
}
