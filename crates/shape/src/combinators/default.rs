//! DEFAULT combinator - substitutes a fallback for `Undefined`

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Constraints, Outcome, Validator, Value};

/// Where the fallback comes from.
pub enum DefaultSource<T> {
    Value(T),
    Fn(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T: Clone> DefaultSource<T> {
    fn produce(&self) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Fn(make) => make(),
        }
    }
}

impl<T: Clone> Clone for DefaultSource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Fn(make) => Self::Fn(Arc::clone(make)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Wraps a validator so `Undefined` yields a fallback value.
///
/// The fallback is returned without running the inner validator. Any other
/// input goes through the inner validator's full `validate`.
pub struct Defaulted<V: Validator> {
    inner: V,
    fallback: DefaultSource<V::Output>,
    constraints: Constraints<V::Output>,
}

impl<V: Validator> Defaulted<V> {
    pub fn with_value(inner: V, value: V::Output) -> Self {
        Self {
            inner,
            fallback: DefaultSource::Value(value),
            constraints: Constraints::new(),
        }
    }

    pub fn with_fn<F>(inner: V, make: F) -> Self
    where
        F: Fn() -> V::Output + Send + Sync + 'static,
    {
        Self {
            inner,
            fallback: DefaultSource::Fn(Arc::new(make)),
            constraints: Constraints::new(),
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator> Clone for Defaulted<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            fallback: self.fallback.clone(),
            constraints: self.constraints.clone(),
        }
    }
}

impl<V> fmt::Debug for Defaulted<V>
where
    V: Validator + fmt::Debug,
    V::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaulted")
            .field("inner", &self.inner)
            .field("fallback", &self.fallback)
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl<V: Validator> Validator for Defaulted<V> {
    type Output = V::Output;

    fn handle(&self, input: &Value) -> Outcome<V::Output> {
        if input.is_undefined() {
            Outcome::Success(self.fallback.produce())
        } else {
            self.inner.validate(input)
        }
    }

    fn constraints(&self) -> &Constraints<V::Output> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<V::Output> {
        &mut self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidatorExt;
    use crate::validators::{NumberValidator, StringValidator};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fallback_is_not_validated() {
        let validator = StringValidator::new().length_ge(10).default_value("x".to_owned());
        assert_eq!(validator.parse(&Value::Undefined).unwrap(), "x");
        assert!(validator.parse(&Value::from("short")).is_err());
    }

    #[test]
    fn thunk_runs_per_call() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let validator = NumberValidator::new().default_with(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            5.0
        });
        assert_eq!(validator.parse(&Value::Undefined).unwrap(), 5.0);
        assert_eq!(validator.parse(&Value::Undefined).unwrap(), 5.0);
        assert_eq!(validator.parse(&Value::from(1)).unwrap(), 1.0);
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn defined_input_keeps_inner_transforms() {
        let validator = NumberValidator::new().abs().default_value(5.0);
        assert_eq!(validator.parse(&Value::from(-2)).unwrap(), 2.0);
    }
}
