//! If expression evaluation

use super::Evaluate;
use crate::ast::{BlockStatement, Expression};
use crate::error::Result;
use crate::{Environment, EvalContext, Value, NULL};

/// Evaluate `if (condition) { consequence } else { alternative }`.
///
/// Any truthy condition selects the consequence. With no `else` branch a
/// falsy condition yields `NULL`.
pub fn eval_if(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value> {
    match select_branch(condition, consequence, alternative, env, ctx)? {
        Some(branch) => branch.eval(env, ctx),
        None => Ok(NULL),
    }
}

/// Evaluate the condition and pick the branch to run, if any.
pub(crate) fn select_branch<'a>(
    condition: &Expression,
    consequence: &'a BlockStatement,
    alternative: Option<&'a BlockStatement>,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Option<&'a BlockStatement>> {
    if condition.eval(env, ctx)?.is_truthy() {
        Ok(Some(consequence))
    } else {
        Ok(alternative)
    }
}
