//! SET combinator - validates every member of a set

use std::collections::HashSet;

use crate::foundation::{
    Constraints, Outcome, ToValue, ValidationError, Validator, Value, stringify,
};

/// Members of a validated set, in iteration order and canonically distinct.
///
/// Converts back to [`Value::Set`], so a set's output validates against the
/// same set validator.
#[derive(Debug, Clone, PartialEq)]
pub struct SetOutput<T> {
    members: Vec<T>,
}

impl<T> SetOutput<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.members
    }
}

impl<T> IntoIterator for SetOutput<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SetOutput<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<T: ToValue> ToValue for SetOutput<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.members.iter().map(ToValue::to_value).collect())
    }
}

/// Validates sets whose members all satisfy one child validator.
///
/// Failures are collected without positions, in iteration order. The output
/// keeps iteration order; members that a child transform maps onto the same
/// value are collapsed so the result is still a set.
#[derive(Debug, Clone)]
pub struct SetValidator<V: Validator> {
    member: V,
    constraints: Constraints<SetOutput<V::Output>>,
}

impl<V: Validator> SetValidator<V> {
    pub fn new(member: V) -> Self {
        Self {
            member,
            constraints: Constraints::new(),
        }
    }

    pub fn member(&self) -> &V {
        &self.member
    }
}

impl<V: Validator> Validator for SetValidator<V> {
    type Output = SetOutput<V::Output>;

    fn handle(&self, input: &Value) -> Outcome<Self::Output> {
        let Value::Set(members) = input else {
            return Outcome::Failure(ValidationError::type_mismatch(
                "s.set(T)",
                "Expected a set",
                input.clone(),
            ));
        };

        let mut errors = Vec::new();
        let mut seen = HashSet::with_capacity(members.len());
        let mut output = Vec::with_capacity(members.len());
        for member in members {
            match self.member.validate(member) {
                Outcome::Success(value) => {
                    if seen.insert(stringify(&value.to_value())) {
                        output.push(value);
                    }
                }
                Outcome::Failure(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Outcome::Success(SetOutput { members: output })
        } else {
            tracing::debug!(
                failed = errors.len(),
                total = members.len(),
                "set members rejected"
            );
            Outcome::Failure(ValidationError::Combined(errors))
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
    use crate::validators::{NumberValidator, StringValidator};
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(123))]
    #[case(Value::from("foo"))]
    #[case(Value::array(Vec::<Value>::new()))]
    #[case(Value::record(Vec::<(String, Value)>::new()))]
    fn rejects_non_sets(#[case] input: Value) {
        let error = StringValidator::new().set().parse(&input).unwrap_err();
        assert_eq!(error.name(), Some("s.set(T)"));
    }

    #[test]
    fn returns_members_in_order() {
        let output = StringValidator::new()
            .set()
            .parse(&Value::set(["b", "a"]))
            .unwrap();
        assert_eq!(output.as_slice(), ["b", "a"]);
    }

    #[test]
    fn one_error_per_failing_member() {
        let input = Value::set([Value::from("x"), Value::from(1)]);
        let error = StringValidator::new().set().parse(&input).unwrap_err();
        let ValidationError::Combined(errors) = error else {
            panic!("expected combined error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].received(), Some(&Value::from(1)));
    }

    #[test]
    fn collapses_members_equal_after_transform() {
        let output = NumberValidator::new()
            .abs()
            .set()
            .parse(&Value::set([-1, 1, 2]))
            .unwrap();
        assert_eq!(output.into_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn output_revalidates_as_set() {
        let validator = StringValidator::new().set();
        let first = validator.parse(&Value::set(["a", "b"])).unwrap();
        assert!(matches!(first.to_value(), Value::Set(_)));
        assert_eq!(validator.parse(&first.to_value()), Ok(first));
    }
}
