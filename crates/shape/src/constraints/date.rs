//! Date constraints, compared by instant

use chrono::{DateTime, SecondsFormat, Utc};

use crate::constraints::{comparator, eq, ge, gt, le, lt, ne};
use crate::foundation::SharedConstraint;

const MESSAGE: &str = "Invalid Date value";

fn iso(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn date_lt(value: DateTime<Utc>) -> SharedConstraint<DateTime<Utc>> {
    comparator("s.date.lt", MESSAGE, format!("expected < {}", iso(&value)), value, lt)
}

pub fn date_le(value: DateTime<Utc>) -> SharedConstraint<DateTime<Utc>> {
    comparator("s.date.le", MESSAGE, format!("expected <= {}", iso(&value)), value, le)
}

pub fn date_gt(value: DateTime<Utc>) -> SharedConstraint<DateTime<Utc>> {
    comparator("s.date.gt", MESSAGE, format!("expected > {}", iso(&value)), value, gt)
}

pub fn date_ge(value: DateTime<Utc>) -> SharedConstraint<DateTime<Utc>> {
    comparator("s.date.ge", MESSAGE, format!("expected >= {}", iso(&value)), value, ge)
}

pub fn date_eq(value: DateTime<Utc>) -> SharedConstraint<DateTime<Utc>> {
    comparator("s.date.eq", MESSAGE, format!("expected === {}", iso(&value)), value, eq)
}

pub fn date_ne(value: DateTime<Utc>) -> SharedConstraint<DateTime<Utc>> {
    comparator("s.date.ne", MESSAGE, format!("expected !== {}", iso(&value)), value, ne)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn compares_instants() {
        let pivot = day(2022, 2, 1);
        assert!(date_lt(pivot).run(day(2022, 1, 1)).is_success());
        assert!(date_lt(pivot).run(day(2022, 3, 1)).is_failure());
        assert!(date_le(pivot).run(pivot).is_success());
        assert!(date_gt(pivot).run(day(2023, 1, 1)).is_success());
        assert!(date_ge(pivot).run(day(2020, 1, 1)).is_failure());
        assert!(date_eq(pivot).run(day(2022, 2, 1)).is_success());
        assert!(date_ne(pivot).run(pivot).is_failure());
    }

    #[test]
    fn error_renders_iso_bound() {
        let error = date_lt(day(2022, 2, 1)).run(day(2022, 3, 1)).into_error();
        assert_eq!(error.name(), Some("s.date.lt"));
        assert!(error.to_string().contains("expected < 2022-02-01T00:00:00.000Z"));
    }
}
