//! Error types for validation failures
//!
//! [`ValidationError`] is a small closed taxonomy. Leaf kinds describe one
//! rejected value (wrong intrinsic type, a failed constraint, a literal
//! mismatch); aggregate kinds wrap the sub-errors collected by structural
//! validators, addressed by index, by key, or not at all.
//!
//! All label and message fields use `Cow<'static, str>` so the common case of
//! static labels never allocates.

use std::borrow::Cow;

use serde_json::json;

use crate::foundation::Value;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_shape::prelude::*;
///
/// let err = shapes::string().array().validate(&Value::array([Value::from(1)])).into_error();
/// let ValidationError::Indexed(entries) = err else { unreachable!() };
/// assert_eq!(entries[0].0, 0);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The input failed the validator's intrinsic type check.
    #[error("{validator}: {message} (received {received})")]
    TypeMismatch {
        /// Label of the validator that rejected the input, e.g. `s.string`.
        validator: Cow<'static, str>,
        message: Cow<'static, str>,
        received: Value,
    },

    /// The input did not equal the single value the validator expects.
    #[error("{validator}: {message} (expected {expected}, received {received})")]
    ExpectedValue {
        validator: Cow<'static, str>,
        message: Cow<'static, str>,
        received: Value,
        expected: Value,
    },

    /// A named constraint rejected an otherwise type-correct value.
    #[error("{constraint}: {message} ({expected}, received {received})")]
    Constraint {
        /// Stable constraint name, e.g. `s.number.lt`.
        constraint: Cow<'static, str>,
        message: Cow<'static, str>,
        received: Value,
        /// Human-readable description of what was expected.
        expected: Cow<'static, str>,
    },

    /// Positioned sub-failures, one per failing element.
    #[error("Received one or more errors ({} at indexed positions)", .0.len())]
    Indexed(Vec<(usize, ValidationError)>),

    /// Unpositioned sub-failures, one per failing member or alternative.
    #[error("Received one or more errors ({})", .0.len())]
    Combined(Vec<ValidationError>),

    /// Keyed sub-failures, one per failing record entry.
    #[error("Failed to validate at least one entry ({})", .0.len())]
    Keyed(Vec<(String, ValidationError)>),

    /// A property required by an object shape was absent.
    #[error("A required property is missing: {property}")]
    MissingProperty { property: String },

    /// A strict object shape received a property it does not declare.
    #[error("Unknown property received: {property}")]
    UnknownProperty { property: String, received: Value },

    /// The input matched neither a member name nor a member value of an enum.
    #[error("Expected the value to be one of the following enum values: {}", format_pairs(.pairs))]
    WrongEnumInput {
        received: Value,
        pairs: Vec<(String, Value)>,
    },
}

fn format_pairs(pairs: &[(String, Value)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name} or {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a type-mismatch error.
    pub fn type_mismatch(
        validator: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        received: Value,
    ) -> Self {
        Self::TypeMismatch {
            validator: validator.into(),
            message: message.into(),
            received,
        }
    }

    /// Creates a literal-mismatch error.
    pub fn expected_value(
        validator: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        received: Value,
        expected: Value,
    ) -> Self {
        Self::ExpectedValue {
            validator: validator.into(),
            message: message.into(),
            received,
            expected,
        }
    }

    /// Creates a constraint-violation error.
    pub fn constraint(
        constraint: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        received: Value,
        expected: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Constraint {
            constraint: constraint.into(),
            message: message.into(),
            received,
            expected: expected.into(),
        }
    }

    pub fn missing_property(property: impl Into<String>) -> Self {
        Self::MissingProperty {
            property: property.into(),
        }
    }

    pub fn unknown_property(property: impl Into<String>, received: Value) -> Self {
        Self::UnknownProperty {
            property: property.into(),
            received,
        }
    }
}

// ============================================================================
// INSPECTION
// ============================================================================

impl ValidationError {
    /// Stable code of the error kind, for programmatic matching.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::ExpectedValue { .. } => "expected_value",
            Self::Constraint { .. } => "constraint",
            Self::Indexed(_) => "indexed",
            Self::Combined(_) => "combined",
            Self::Keyed(_) => "keyed",
            Self::MissingProperty { .. } => "missing_property",
            Self::UnknownProperty { .. } => "unknown_property",
            Self::WrongEnumInput { .. } => "wrong_enum_input",
        }
    }

    /// The validator or constraint label that produced a leaf error.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { validator, .. } | Self::ExpectedValue { validator, .. } => {
                Some(validator.as_ref())
            }
            Self::Constraint { constraint, .. } => Some(constraint.as_ref()),
            _ => None,
        }
    }

    /// The value that was rejected, when the error describes a single value.
    #[must_use]
    pub const fn received(&self) -> Option<&Value> {
        match self {
            Self::TypeMismatch { received, .. }
            | Self::ExpectedValue { received, .. }
            | Self::Constraint { received, .. }
            | Self::UnknownProperty { received, .. }
            | Self::WrongEnumInput { received, .. } => Some(received),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::Indexed(_) | Self::Combined(_) | Self::Keyed(_))
    }

    /// Direct sub-errors of an aggregate, in reporting order.
    #[must_use]
    pub fn children(&self) -> Vec<&ValidationError> {
        match self {
            Self::Indexed(entries) => entries.iter().map(|(_, e)| e).collect(),
            Self::Combined(errors) => errors.iter().collect(),
            Self::Keyed(entries) => entries.iter().map(|(_, e)| e).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the number of errors (including nested).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens all errors into a single list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for child in self.children() {
            result.extend(child.flatten());
        }
        result
    }

    /// Converts the error to a JSON structure, nesting aggregates.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::TypeMismatch {
                validator,
                message,
                received,
            } => json!({
                "code": self.code(),
                "validator": validator,
                "message": message,
                "received": received,
            }),
            Self::ExpectedValue {
                validator,
                message,
                received,
                expected,
            } => json!({
                "code": self.code(),
                "validator": validator,
                "message": message,
                "received": received,
                "expected": expected,
            }),
            Self::Constraint {
                constraint,
                message,
                received,
                expected,
            } => json!({
                "code": self.code(),
                "constraint": constraint,
                "message": message,
                "received": received,
                "expected": expected,
            }),
            Self::Indexed(entries) => json!({
                "code": self.code(),
                "errors": entries
                    .iter()
                    .map(|(index, e)| json!({ "index": index, "error": e.to_json_value() }))
                    .collect::<Vec<_>>(),
            }),
            Self::Combined(errors) => json!({
                "code": self.code(),
                "errors": errors.iter().map(Self::to_json_value).collect::<Vec<_>>(),
            }),
            Self::Keyed(entries) => json!({
                "code": self.code(),
                "errors": entries
                    .iter()
                    .map(|(key, e)| json!({ "key": key, "error": e.to_json_value() }))
                    .collect::<Vec<_>>(),
            }),
            Self::MissingProperty { property } => json!({
                "code": self.code(),
                "property": property,
            }),
            Self::UnknownProperty { property, received } => json!({
                "code": self.code(),
                "property": property,
                "received": received,
            }),
            Self::WrongEnumInput { received, pairs } => json!({
                "code": self.code(),
                "received": received,
                "pairs": pairs
                    .iter()
                    .map(|(name, value)| json!([name, value]))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
