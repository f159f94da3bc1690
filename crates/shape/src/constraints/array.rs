//! Array length constraints
//!
//! All checks look at `len()` only; the received value in the error is the
//! whole (already validated) array.

use std::borrow::Cow;
use std::ops::Range;

use crate::constraints::{Comparator, eq, ge, gt, le, lt, ne};
use crate::foundation::{Outcome, SharedConstraint, ToValue, ValidationError, constraint};

const MESSAGE: &str = "Invalid Array length";

fn length_check<T, F>(
    name: &'static str,
    expected: impl Into<Cow<'static, str>>,
    rule: F,
) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
    F: Fn(usize) -> bool + Send + Sync + 'static,
{
    let expected = expected.into();
    constraint(name, move |input: Vec<T>| {
        if rule(input.len()) {
            Outcome::Success(input)
        } else {
            Outcome::Failure(ValidationError::constraint(
                name,
                MESSAGE,
                input.to_value(),
                expected.clone(),
            ))
        }
    })
}

fn length_comparator<T>(
    name: &'static str,
    symbol: &str,
    length: usize,
    compare: Comparator<usize>,
) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
{
    length_check(
        name,
        format!("expected.length {symbol} {length}"),
        move |len| compare(&len, &length),
    )
}

pub fn array_length_lt<T>(length: usize) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
{
    length_comparator("s.array(T).lengthLessThan", "<", length, lt)
}

pub fn array_length_le<T>(length: usize) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
{
    length_comparator("s.array(T).lengthLessThanOrEqual", "<=", length, le)
}

pub fn array_length_gt<T>(length: usize) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
{
    length_comparator("s.array(T).lengthGreaterThan", ">", length, gt)
}

pub fn array_length_ge<T>(length: usize) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
{
    length_comparator("s.array(T).lengthGreaterThanOrEqual", ">=", length, ge)
}

pub fn array_length_eq<T>(length: usize) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
{
    length_comparator("s.array(T).lengthEqual", "===", length, eq)
}

pub fn array_length_ne<T>(length: usize) -> SharedConstraint<Vec<T>>
where
    T: ToValue + Send + Sync + 'static,
{
    length_comparator("s.array(T).lengthNotEqual", "!==", length, ne)
}

/// `start <= len < end_before`.
pub fn array_length_range<T: ToValue + Send + Sync + 'static>(
    start: usize,
    end_before: usize,
) -> SharedConstraint<Vec<T>> {
    let range: Range<usize> = start..end_before;
    length_check(
        "s.array(T).lengthRange",
        format!("expected.length >= {start} && expected.length < {end_before}"),
        move |len| range.contains(&len),
    )
}

/// `start_at <= len <= end_at`.
pub fn array_length_range_inclusive<T: ToValue + Send + Sync + 'static>(
    start_at: usize,
    end_at: usize,
) -> SharedConstraint<Vec<T>> {
    length_check(
        "s.array(T).lengthRangeInclusive",
        format!("expected.length >= {start_at} && expected.length <= {end_at}"),
        move |len| (start_at..=end_at).contains(&len),
    )
}

/// `start_after < len < end_before`.
pub fn array_length_range_exclusive<T: ToValue + Send + Sync + 'static>(
    start_after: usize,
    end_before: usize,
) -> SharedConstraint<Vec<T>> {
    length_check(
        "s.array(T).lengthRangeExclusive",
        format!("expected.length > {start_after} && expected.length < {end_before}"),
        move |len| len > start_after && len < end_before,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Constraint, Value};
    use rstest::rstest;

    fn strings(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn eq_reports_whole_array() {
        let error = array_length_eq::<String>(2).run(strings(3)).into_error();
        assert_eq!(error.name(), Some("s.array(T).lengthEqual"));
        assert_eq!(error.received(), Some(&Value::array(["0", "1", "2"])));
    }

    #[rstest]
    #[case(1, true)]
    #[case(2, true)]
    #[case(4, false)]
    #[case(0, false)]
    fn range_is_half_open(#[case] len: usize, #[case] passes: bool) {
        assert_eq!(
            array_length_range::<String>(1, 4).run(strings(len)).is_success(),
            passes
        );
    }

    #[rstest]
    #[case(1, true)]
    #[case(4, true)]
    #[case(5, false)]
    fn range_inclusive(#[case] len: usize, #[case] passes: bool) {
        assert_eq!(
            array_length_range_inclusive::<String>(1, 4).run(strings(len)).is_success(),
            passes
        );
    }

    #[rstest]
    #[case(1, false)]
    #[case(2, true)]
    #[case(4, false)]
    fn range_exclusive(#[case] len: usize, #[case] passes: bool) {
        assert_eq!(
            array_length_range_exclusive::<String>(1, 4).run(strings(len)).is_success(),
            passes
        );
    }

    #[test]
    fn comparators() {
        assert!(array_length_lt::<String>(2).run(strings(1)).is_success());
        assert!(array_length_le::<String>(2).run(strings(3)).is_failure());
        assert!(array_length_gt::<String>(2).run(strings(3)).is_success());
        assert!(array_length_ge::<String>(2).run(strings(1)).is_failure());
        assert!(array_length_ne::<String>(2).run(strings(2)).is_failure());
    }
}
