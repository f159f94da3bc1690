//! Boolean validator

use crate::constraints::boolean::{boolean_false, boolean_true};
use crate::foundation::{ValidatorExt, Value};

primitive_validator! {
    /// Validates booleans.
    pub BooleanValidator => bool;
    label = "s.boolean", message = "Expected a boolean primitive";
    match Value::Bool(b) => *b;
}

impl BooleanValidator {
    #[must_use]
    pub fn is_true(&self) -> Self {
        self.add_constraint(boolean_true())
    }

    #[must_use]
    pub fn is_false(&self) -> Self {
        self.add_constraint(boolean_false())
    }
}
