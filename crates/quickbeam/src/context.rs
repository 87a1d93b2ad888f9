//! Evaluation context configuration

use std::cell::Cell;

use crate::error::EvalError;

/// Default limit on nested function applications.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls and bounds how deeply
/// function applications may nest. Runaway recursion fails with
/// [`EvalError::StackOverflow`] instead of exhausting the host stack.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum call depth (stack overflow protection)
    pub max_call_depth: usize,

    call_depth: Cell<usize>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            call_depth: Cell::new(0),
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Current number of active function applications.
    pub fn call_depth(&self) -> usize {
        self.call_depth.get()
    }

    /// Record entry into a function application.
    pub(crate) fn enter_call(&self) -> Result<(), EvalError> {
        let depth = self.call_depth.get();
        if depth >= self.max_call_depth {
            return Err(EvalError::StackOverflow {
                max: self.max_call_depth,
            });
        }
        self.call_depth.set(depth + 1);
        Ok(())
    }

    /// Record exit from a function application.
    pub(crate) fn exit_call(&self) {
        self.call_depth.set(self.call_depth.get().saturating_sub(1));
    }
}
