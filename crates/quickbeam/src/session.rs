//! A persistent interpreter session
//!
//! A [`Session`] owns one root environment and one [`EvalContext`]. Each call
//! to [`Session::run`] parses and evaluates a chunk of source against that
//! environment, so bindings made by one line are visible to the next. This
//! is what the REPL is built on.

use crate::eval::stmt::eval_program_visible;
use crate::{parse, Environment, Error, EvalContext, Value};

/// Interpreter state carried across inputs.
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
    ctx: EvalContext,
}

impl Session {
    /// Create a session with an empty global scope and default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom evaluation context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            env: Environment::new(),
            ctx,
        }
    }

    /// The session's global scope.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse and evaluate `source` in the session's global scope.
    ///
    /// Returns `Ok(None)` when there is nothing to show: the input had no
    /// statements, or the last statement it ran was a `let`. A top-level
    /// `return` always shows its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with every diagnostic if the source is
    /// malformed; nothing is evaluated in that case. Returns [`Error::Eval`]
    /// for the first runtime error. Bindings made before a runtime error
    /// are kept.
    pub fn run(&self, source: &str) -> Result<Option<Value>, Error> {
        let (program, errors) = parse(source);
        if !errors.is_empty() {
            return Err(Error::Parse(errors));
        }

        Ok(eval_program_visible(&program, &self.env, &self.ctx)?)
    }
}
