//! Leaf validators
//!
//! Each validator type checks one kind of [`Value`](crate::foundation::Value)
//! and exposes copy-on-write builder methods that append constraints from
//! [`crate::constraints`].
//!
//! # Categories
//!
//! - **Primitives**: [`StringValidator`], [`NumberValidator`],
//!   [`BigIntValidator`], [`BooleanValidator`], [`DateValidator`]
//! - **Exact values**: [`LiteralValidator`], [`NativeEnumValidator`]
//! - **Catch-alls**: [`PassthroughValidator`], [`NeverValidator`],
//!   [`NullishValidator`]

pub mod bigint;
pub mod boolean;
pub mod date;
pub mod literal;
pub mod native_enum;
pub mod number;
pub mod passthrough;
pub mod string;

pub use bigint::BigIntValidator;
pub use boolean::BooleanValidator;
pub use date::DateValidator;
pub use literal::LiteralValidator;
pub use native_enum::NativeEnumValidator;
pub use number::NumberValidator;
pub use passthrough::{NeverValidator, NullishValidator, PassthroughValidator};
pub use string::StringValidator;
