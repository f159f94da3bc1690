//! TRANSFORM combinator - maps the output into another type

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Constraints, Outcome, ToValue, Validator, Value};

/// Runs `map` on the inner validator's output once all of its constraints
/// have passed. Has its own constraint chain over the mapped type.
///
/// ```rust,ignore
/// use nebula_shape::prelude::*;
///
/// let len = shapes::string().length_ge(1).transform(|s| s.len() as f64);
/// assert_eq!(len.parse(&Value::from("abc")).unwrap(), 3.0);
/// ```
pub struct Transform<V: Validator, U> {
    inner: V,
    map: Arc<dyn Fn(V::Output) -> U + Send + Sync>,
    constraints: Constraints<U>,
}

impl<V: Validator, U> Transform<V, U> {
    pub fn new<F>(inner: V, map: F) -> Self
    where
        F: Fn(V::Output) -> U + Send + Sync + 'static,
    {
        Self {
            inner,
            map: Arc::new(map),
            constraints: Constraints::new(),
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator, U> Clone for Transform<V, U> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            map: Arc::clone(&self.map),
            constraints: self.constraints.clone(),
        }
    }
}

impl<V: Validator + fmt::Debug, U> fmt::Debug for Transform<V, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("inner", &self.inner)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}

impl<V, U> Validator for Transform<V, U>
where
    V: Validator,
    U: Clone + ToValue + Send + Sync + 'static,
{
    type Output = U;

    fn handle(&self, input: &Value) -> Outcome<U> {
        self.inner.validate(input).map(|value| (self.map)(value))
    }

    fn constraints(&self) -> &Constraints<U> {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Constraints<U> {
        &mut self.constraints
    }
}
