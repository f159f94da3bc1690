//! Macros for declaring leaf validators with minimal boilerplate.
//!
//! A leaf validator is a struct holding only its constraint chain, whose type
//! check is a single pattern match on [`Value`](crate::foundation::Value).
//!
//! ```rust,ignore
//! primitive_validator! {
//!     /// Validates string primitives.
//!     pub StringValidator => String;
//!     label = "s.string", message = "Expected a string primitive";
//!     match Value::String(s) => s.clone();
//! }
//! ```

/// Creates a leaf validator: struct definition, constructor and
/// [`Validator`](crate::foundation::Validator) implementation.
///
/// `#[derive(Debug, Clone, Default)]` is always applied. Inputs that do not
/// match the pattern fail with a type mismatch carrying `label` and `message`.
macro_rules! primitive_validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $output:ty;
        label = $label:literal, message = $message:literal;
        match $pat:pat => $convert:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            constraints: $crate::foundation::Constraints<$output>,
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::foundation::Validator for $name {
            type Output = $output;

            fn handle(
                &self,
                input: &$crate::foundation::Value,
            ) -> $crate::foundation::Outcome<$output> {
                match input {
                    $pat => $crate::foundation::Outcome::Success($convert),
                    other => $crate::foundation::Outcome::Failure(
                        $crate::foundation::ValidationError::type_mismatch(
                            $label,
                            $message,
                            other.clone(),
                        ),
                    ),
                }
            }

            fn constraints(&self) -> &$crate::foundation::Constraints<$output> {
                &self.constraints
            }

            fn constraints_mut(&mut self) -> &mut $crate::foundation::Constraints<$output> {
                &mut self.constraints
            }
        }
    };
}
