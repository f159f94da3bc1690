//! # nebula-shape
//!
//! Composable runtime validation of dynamically typed values.
//!
//! Validators check a [`Value`](foundation::Value) against an expected
//! shape and produce a typed, possibly transformed, output. Every builder
//! method returns a new validator; the receiver is never modified.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_shape::prelude::*;
//!
//! let tags = shapes::string().length_ge(1).array().unique().length_le(10);
//! assert!(tags.is(&Value::array(["a", "b"])));
//!
//! let error = tags.parse(&Value::array(["a", ""])).unwrap_err();
//! assert_eq!(error.total_error_count(), 1);
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: [`Value`](foundation::Value), [`Outcome`](foundation::Outcome),
//!   [`ValidationError`](foundation::ValidationError), constraints and the
//!   [`Validator`](foundation::Validator) traits
//! - [`constraints`]: named constraint factories per value kind
//! - [`validators`]: leaf validators (string, number, literal, ...)
//! - [`combinators`]: array, set, record, object, tuple, union and the
//!   optional/default/transform wrappers
//! - [`shapes`]: constructor functions for all of the above
//! - [`config`]: the process-wide "run constraints" switch
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber: `trace`
//! when a value is rejected, `debug` when a structural validator aggregates
//! child failures.

// Structural validators are generic over their children, so the composed
// types grow with nesting depth.
#![allow(clippy::type_complexity)]

#[macro_use]
mod macros;

pub mod combinators;
pub mod config;
pub mod constraints;
pub mod foundation;
pub mod prelude;
pub mod shapes;
pub mod validators;
