//! Entry points for building validators.
//!
//! Every function returns a fresh validator with an empty constraint chain.
//!
//! ```rust,ignore
//! use nebula_shape::prelude::*;
//!
//! let port = shapes::number().int().ge(1.0).le(65535.0);
//! let hosts = shapes::string().length_ge(1).array().unique();
//! let mode = shapes::enum_of(["fast", "safe"]);
//! ```

use crate::combinators::{
    ArrayValidator, ObjectValidator, RecordValidator, SetValidator, TupleValidator, Union,
};
use crate::foundation::{BoxedValidator, ToValue, Validator, ValidatorExt, Value};
use crate::validators::{
    BigIntValidator, BooleanValidator, DateValidator, LiteralValidator, NativeEnumValidator,
    NeverValidator, NullishValidator, NumberValidator, PassthroughValidator, StringValidator,
};

#[must_use]
pub fn string() -> StringValidator {
    StringValidator::new()
}

#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

#[must_use]
pub fn bigint() -> BigIntValidator {
    BigIntValidator::new()
}

#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

#[must_use]
pub fn date() -> DateValidator {
    DateValidator::new()
}

/// Accepts only `Undefined`.
#[must_use]
pub fn undefined() -> LiteralValidator {
    LiteralValidator::new(Value::Undefined)
}

/// Accepts only `Null`.
#[must_use]
pub fn null() -> LiteralValidator {
    LiteralValidator::new(Value::Null)
}

#[must_use]
pub fn nullish() -> NullishValidator {
    NullishValidator::new()
}

#[must_use]
pub fn any() -> PassthroughValidator {
    PassthroughValidator::new()
}

#[must_use]
pub fn unknown() -> PassthroughValidator {
    PassthroughValidator::new()
}

#[must_use]
pub fn never() -> NeverValidator {
    NeverValidator::new()
}

pub fn literal(value: impl Into<Value>) -> LiteralValidator {
    LiteralValidator::new(value)
}

/// A union of literals, tried in the given order.
pub fn enum_of<I>(values: I) -> Union<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Union::new(values.into_iter().map(|value| literal(value).boxed()))
}

/// Accepts a member name or a member value of `(name, value)` pairs.
pub fn native_enum<I, K, V>(pairs: I) -> NativeEnumValidator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    NativeEnumValidator::new(pairs)
}

pub fn array<V: Validator>(element: &V) -> ArrayValidator<V> {
    element.array()
}

pub fn set<V: Validator>(member: &V) -> SetValidator<V> {
    member.set()
}

pub fn record<V: Validator>(value: &V) -> RecordValidator<V> {
    value.record()
}

pub fn union<T, I>(alternatives: I) -> Union<T>
where
    T: Clone + ToValue + Send + Sync + 'static,
    I: IntoIterator<Item = BoxedValidator<T>>,
{
    Union::new(alternatives)
}

/// An object with no declared fields; add them with
/// [`ObjectValidator::field`].
#[must_use]
pub fn object() -> ObjectValidator {
    ObjectValidator::new()
}

pub fn tuple<I>(items: I) -> TupleValidator
where
    I: IntoIterator<Item = BoxedValidator<Value>>,
{
    TupleValidator::new(items)
}
