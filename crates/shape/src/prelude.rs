//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use nebula_shape::prelude::*;
//!
//! let user = shapes::object()
//!     .field("name", &shapes::string().length_ge(1))
//!     .field("tags", &shapes::string().array().unique());
//! ```

pub use crate::foundation::{
    BoxedValidator, Constraint, Constraints, Outcome, SharedConstraint, ToValue,
    ValidationError, ValidationResult, Validator, ValidatorExt, Value, ValueKind, constraint,
    predicate, refinement, stringify,
};

pub use crate::combinators::{
    ArrayValidator, Defaulted, Maybe, ObjectStrategy, ObjectValidator, Optional,
    RecordValidator, SetOutput, SetValidator, Transform, TupleValidator, Union,
};

pub use crate::constraints::string::{IpVersion, UrlOptions, UuidVersion};

pub use crate::validators::{
    BigIntValidator, BooleanValidator, DateValidator, LiteralValidator, NativeEnumValidator,
    NeverValidator, NullishValidator, NumberValidator, PassthroughValidator, StringValidator,
};

pub use crate::config::{ValidationConfig, global_validation_enabled, set_global_validation_enabled};

pub use crate::shapes;
