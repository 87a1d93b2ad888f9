//! Function application

use crate::error::Result;
use crate::eval::control::ControlFlow;
use crate::{BuiltinFn, Environment, EvalContext, EvalError, FunctionValue, Value};

use super::Evaluate;

/// Call a Value as a function.
///
/// # Errors
///
/// Returns `NotCallable` if the value is not a function or builtin.
/// Returns `ArityMismatch` if the argument count doesn't match.
/// Returns `StackOverflow` once nested calls exceed the context limit.
pub fn apply_function(
    func: Value,
    args: Vec<Value>,
    ctx: &EvalContext,
) -> Result<Value> {
    match func {
        Value::Function(f) => call_function(&f, args, ctx),
        Value::Builtin(b) => call_builtin(b, &args),
        other => Err(EvalError::NotCallable {
            got: other.type_name(),
        }),
    }
}

/// Call a user-defined function.
fn call_function(
    func: &FunctionValue,
    args: Vec<Value>,
    ctx: &EvalContext,
) -> Result<Value> {
    check_arity(func.arity(), args.len())?;

    // Track call depth (stack overflow protection)
    ctx.enter_call()?;
    tracing::debug!(
        params = ?func.params,
        depth = ctx.call_depth(),
        "apply function"
    );

    // Fresh scope enclosed by the captured environment, not the caller's
    let scope = Environment::enclosed(&func.env);
    for (param, arg) in func.params.iter().zip(args) {
        scope.define(param.as_str(), arg);
    }

    let result = func.body.eval(&scope, ctx);
    ctx.exit_call();

    // A return stops here; it never leaks into the caller
    match result {
        Err(EvalError::ControlFlow(ControlFlow::Return { value })) => Ok(value),
        other => other,
    }
}

/// Call a built-in function.
fn call_builtin(func: &'static BuiltinFn, args: &[Value]) -> Result<Value> {
    if let Some(arity) = func.arity {
        check_arity(arity, args.len())?;
    }

    (func.func)(args).map_err(|message| EvalError::BuiltinError {
        name: func.name,
        message,
    })
}

fn check_arity(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(EvalError::ArityMismatch { expected, got })
    }
}
