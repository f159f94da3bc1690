//! Canonical serialization for structural equality
//!
//! Two values that are deeply equal produce the same string regardless of the
//! order in which record keys or set members were inserted. Array uniqueness
//! and set de-duplication compare values through this form.

use chrono::SecondsFormat;

use crate::foundation::Value;

/// Returns the canonical string of `value`.
///
/// Strings are JSON-quoted so `"1"` and `1` never collide, big integers carry
/// an `n` suffix, record keys are sorted and set members are sorted by their
/// own canonical form.
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::BigInt(n) => {
            out.push_str(&n.to_string());
            out.push('n');
        }
        Value::String(s) => out.push_str(&quote(s)),
        Value::Date(d) => {
            out.push_str("Date(");
            out.push_str(&d.to_rfc3339_opts(SecondsFormat::Nanos, true));
            out.push(')');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Set(members) => {
            let mut parts: Vec<String> = members.iter().map(stringify).collect();
            parts.sort_unstable();
            out.push_str("Set[");
            out.push_str(&parts.join(","));
            out.push(']');
        }
        Value::Record(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&quote(key));
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Formats a number the way a dynamic runtime prints it: integral values
/// without a fractional part, `-0` as `0`, and named non-finite values.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        n.to_string()
    }
}
