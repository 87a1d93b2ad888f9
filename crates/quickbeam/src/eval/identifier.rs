//! Identifier resolution

use crate::builtins;
use crate::error::Result;
use crate::{Environment, EvalError, Value};

/// Resolve a name: the environment chain first, then the builtin table.
pub fn eval_identifier(name: &str, env: &Environment) -> Result<Value> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }

    builtins::lookup(name)
        .map(Value::Builtin)
        .ok_or_else(|| EvalError::UndefinedIdentifier {
            name: name.to_string(),
        })
}
