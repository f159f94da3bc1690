//! Core validation types and traits
//!
//! The building blocks everything else is made of:
//!
//! - **Input**: [`Value`], [`ValueKind`], [`ToValue`]
//! - **Results**: [`Outcome`], [`ValidationError`]
//! - **Checks**: [`Constraint`], [`Constraints`]
//! - **Traits**: [`Validator`], [`ValidatorExt`], [`BoxedValidator`]
//! - **Equality**: [`stringify`], the canonical form used for uniqueness
//!
//! # Example
//!
//! ```rust,ignore
//! use nebula_shape::foundation::{Validator, Value};
//! use nebula_shape::shapes;
//!
//! let tags = shapes::string().array().unique();
//! assert!(tags.validate(&Value::array(["a", "b"])).is_success());
//! assert!(tags.validate(&Value::array(["a", "a"])).is_failure());
//! ```

pub mod constraint;
pub mod error;
pub mod outcome;
pub mod stringify;
pub mod traits;
pub mod value;

pub use constraint::{
    Constraint, Constraints, FnConstraint, SharedConstraint, constraint, predicate, refinement,
};
pub use error::ValidationError;
pub use outcome::Outcome;
pub use stringify::stringify;
pub use traits::{BoxedValidator, DynValidator, Validator, ValidatorExt};
pub use value::{ToValue, Value, ValueKind};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
