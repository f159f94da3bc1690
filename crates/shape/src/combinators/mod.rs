//! Combinators
//!
//! Validators built from other validators.
//!
//! # Categories
//!
//! - **Wrappers**: [`Transform`], [`Optional`], [`Defaulted`]
//! - **Collections**: [`ArrayValidator`], [`SetValidator`], [`RecordValidator`]
//! - **Shapes**: [`ObjectValidator`], [`TupleValidator`]
//! - **Alternatives**: [`Union`]
//!
//! Collection and shape combinators validate every child and aggregate the
//! failures; [`Union`] stops at the first alternative that succeeds.

pub mod array;
pub mod default;
pub mod object;
pub mod optional;
pub mod record;
pub mod set;
pub mod transform;
pub mod tuple;
pub mod union;

pub use array::ArrayValidator;
pub use default::{DefaultSource, Defaulted};
pub use object::{ObjectStrategy, ObjectValidator};
pub use optional::{Absence, Maybe, Optional};
pub use record::RecordValidator;
pub use set::{SetOutput, SetValidator};
pub use transform::Transform;
pub use tuple::TupleValidator;
pub use union::Union;
