//! String constraints
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::constraints::{Comparator, eq, ge, gt, le, lt, ne};
use crate::foundation::{
    Outcome, SharedConstraint, ToValue, ValidationError, constraint, predicate,
};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .unwrap()
});

// ============================================================================
// LENGTH
// ============================================================================

fn length_comparator(
    name: &'static str,
    symbol: &str,
    length: usize,
    compare: Comparator<usize>,
) -> SharedConstraint<String> {
    predicate(
        name,
        "Invalid string length",
        format!("expected.length {symbol} {length}"),
        move |s: &String| compare(&s.chars().count(), &length),
    )
}

pub fn string_length_lt(length: usize) -> SharedConstraint<String> {
    length_comparator("s.string.lengthLessThan", "<", length, lt)
}

pub fn string_length_le(length: usize) -> SharedConstraint<String> {
    length_comparator("s.string.lengthLessThanOrEqual", "<=", length, le)
}

pub fn string_length_gt(length: usize) -> SharedConstraint<String> {
    length_comparator("s.string.lengthGreaterThan", ">", length, gt)
}

pub fn string_length_ge(length: usize) -> SharedConstraint<String> {
    length_comparator("s.string.lengthGreaterThanOrEqual", ">=", length, ge)
}

pub fn string_length_eq(length: usize) -> SharedConstraint<String> {
    length_comparator("s.string.lengthEqual", "===", length, eq)
}

pub fn string_length_ne(length: usize) -> SharedConstraint<String> {
    length_comparator("s.string.lengthNotEqual", "!==", length, ne)
}

// ============================================================================
// PATTERNS
// ============================================================================

/// Matches a caller-supplied regular expression.
pub fn string_regex(regex: Regex) -> SharedConstraint<String> {
    let expected = format!("expected {} to match", regex.as_str());
    predicate("s.string.regex", "Invalid string format", expected, move |s: &String| {
        regex.is_match(s)
    })
}

pub fn string_email() -> SharedConstraint<String> {
    predicate(
        "s.string.email",
        "Invalid email address",
        "expected to be an email address",
        |s: &String| EMAIL_REGEX.is_match(s),
    )
}

/// UUID versions accepted by [`string_uuid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UuidVersion {
    /// Exactly this version digit.
    Exact(u8),
    /// Any version digit in the inclusive range.
    Range(u8, u8),
    /// Versions 1 to 5.
    #[default]
    Any,
}

impl UuidVersion {
    fn accepts(self, digit: u8) -> bool {
        match self {
            Self::Exact(v) => digit == v,
            Self::Range(start, end) => (start.min(end)..=start.max(end)).contains(&digit),
            Self::Any => (1..=5).contains(&digit),
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Exact(v) => format!("v{v}"),
            Self::Range(start, end) => format!("v{start}-v{end}"),
            Self::Any => "v1-v5".to_owned(),
        }
    }
}

const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

fn is_uuid(input: &str, version: UuidVersion) -> bool {
    if input == NIL_UUID {
        return true;
    }
    let bytes = input.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => *b == b'-',
        _ => b.is_ascii_hexdigit(),
    });
    if !shape_ok {
        return false;
    }
    let version_digit = bytes[14].wrapping_sub(b'0');
    let variant = bytes[19].to_ascii_lowercase();
    version.accepts(version_digit) && matches!(variant, b'8' | b'9' | b'a' | b'b')
}

/// Matches a canonical hyphenated UUID of `version`, or the nil UUID.
pub fn string_uuid(version: UuidVersion) -> SharedConstraint<String> {
    predicate(
        "s.string.uuid",
        "Invalid string format",
        format!("expected a {} UUID", version.describe()),
        move |s: &String| is_uuid(s, version),
    )
}

// ============================================================================
// URL
// ============================================================================

/// Restrictions for [`string_url`]. Empty lists allow everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOptions {
    /// Allowed schemes with the trailing colon, e.g. `https:`.
    pub allowed_protocols: Vec<String>,
    /// Allowed host names.
    pub allowed_domains: Vec<String>,
}

impl UrlOptions {
    #[must_use]
    pub fn protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_protocols = protocols.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = domains.into_iter().map(Into::into).collect();
        self
    }
}

pub fn string_url(options: UrlOptions) -> SharedConstraint<String> {
    constraint("s.string.url", move |input: String| {
        let Ok(url) = Url::parse(&input) else {
            return Outcome::Failure(ValidationError::constraint(
                "s.string.url",
                "Invalid URL",
                input.to_value(),
                "expected to match a URL",
            ));
        };

        let protocol = format!("{}:", url.scheme());
        if !options.allowed_protocols.is_empty() && !options.allowed_protocols.contains(&protocol)
        {
            return Outcome::Failure(ValidationError::constraint(
                "s.string.url",
                "Invalid URL protocol",
                input.to_value(),
                format!(
                    "expected {protocol} to be one of: {}",
                    options.allowed_protocols.join(", ")
                ),
            ));
        }

        let host = url.host_str().unwrap_or_default();
        if !options.allowed_domains.is_empty() && !options.allowed_domains.iter().any(|d| d == host)
        {
            return Outcome::Failure(ValidationError::constraint(
                "s.string.url",
                "Invalid URL domain",
                input.to_value(),
                format!(
                    "expected {host} to be one of: {}",
                    options.allowed_domains.join(", ")
                ),
            ));
        }

        Outcome::Success(input)
    })
}

// ============================================================================
// IP
// ============================================================================

/// Which IP families [`string_ip`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IpVersion {
    V4,
    V6,
    #[default]
    Any,
}

pub fn string_ip(version: IpVersion) -> SharedConstraint<String> {
    match version {
        IpVersion::V4 => predicate(
            "s.string.ipv4",
            "Invalid IPv4 address",
            "expected an IPv4 address",
            |s: &String| s.parse::<Ipv4Addr>().is_ok(),
        ),
        IpVersion::V6 => predicate(
            "s.string.ipv6",
            "Invalid IPv6 address",
            "expected an IPv6 address",
            |s: &String| s.parse::<Ipv6Addr>().is_ok(),
        ),
        IpVersion::Any => predicate(
            "s.string.ip",
            "Invalid IP address",
            "expected an IP address",
            |s: &String| s.parse::<IpAddr>().is_ok(),
        ),
    }
}
