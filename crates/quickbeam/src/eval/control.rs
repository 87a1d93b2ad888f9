//! Control flow mechanism for return

use crate::Value;

/// Control flow signal for non-local jumps.
///
/// When `return` is evaluated, it doesn't produce a normal `Ok(value)`.
/// Instead, it returns an `Err(EvalError::ControlFlow(...))` that propagates
/// through every enclosing block until caught by the nearest function
/// application or by the program itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    /// Return from a function with a value.
    Return {
        /// Value to return from the function
        value: Value,
    },
}

impl ControlFlow {
    /// Create a return.
    pub fn return_value(value: Value) -> Self {
        ControlFlow::Return { value }
    }

    /// Take the carried value.
    pub fn into_value(self) -> Value {
        match self {
            ControlFlow::Return { value } => value,
        }
    }
}
