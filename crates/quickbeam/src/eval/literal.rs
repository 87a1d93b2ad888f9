//! Literal evaluation: arrays and function literals

use std::rc::Rc;

use crate::ast::{BlockStatement, Expression};
use crate::error::Result;
use crate::{Environment, EvalContext, FunctionValue, Value};

use super::eval_expressions;

/// Evaluate `[a, b, ...]` left to right.
pub fn eval_array(
    elements: &[Expression],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value> {
    eval_expressions(elements, env, ctx).map(Value::array)
}

/// Build a closure over the current environment.
///
/// The environment handle is shared, so a function bound with `let` can see
/// itself and recurse.
pub fn eval_function_literal(
    parameters: &[String],
    body: &Rc<BlockStatement>,
    env: &Environment,
) -> Value {
    Value::function(FunctionValue::new(
        parameters.to_vec(),
        Rc::clone(body),
        env.clone(),
    ))
}
