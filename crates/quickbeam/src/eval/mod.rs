//! Tree-walking evaluation
//!
//! Every node evaluates to a `Result<Value>` whose error side is
//! [`EvalError`](crate::EvalError). Runtime faults travel on the `Err` side and are propagated with `?` as soon as they appear, so
//! the first failure in a statement list stops it. `return` uses the same
//! channel as [`ControlFlow::Return`] and is caught at the function boundary
//! (or at the top of the program).

pub mod binary;
pub mod call;
pub mod control;
pub mod identifier;
pub mod if_expr;
pub mod index;
pub mod literal;
pub mod stmt;
pub mod unary;

use crate::ast::{Expression, Program};
use crate::error::Result;
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalContext, Value};

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter.
/// Each syntax tree node type implements this trait.
pub trait Evaluate {
    /// Evaluate this AST node in the given environment.
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expression {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value> {
        ensure_sufficient_stack(|| match self {
            Expression::IntegerLiteral(n) => Ok(Value::Integer(*n)),
            Expression::StringLiteral(s) => Ok(Value::string(s)),
            Expression::BooleanLiteral(b) => Ok(Value::from(*b)),
            Expression::ArrayLiteral(elements) => literal::eval_array(elements, env, ctx),
            Expression::FunctionLiteral { parameters, body } => {
                Ok(literal::eval_function_literal(parameters, body, env))
            }

            Expression::Identifier(name) => identifier::eval_identifier(name, env),

            Expression::Prefix { operator, right } => {
                let right = right.eval(env, ctx)?;
                unary::eval_prefix(*operator, right)
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let left = left.eval(env, ctx)?;
                let right = right.eval(env, ctx)?;
                binary::eval_infix(*operator, left, right)
            }

            Expression::If {
                condition,
                consequence,
                alternative,
            } => if_expr::eval_if(condition, consequence, alternative.as_ref(), env, ctx),

            Expression::Call {
                function,
                arguments,
            } => {
                let callee = function.eval(env, ctx)?;
                let args = eval_expressions(arguments, env, ctx)?;
                call::apply_function(callee, args, ctx)
            }

            Expression::Index { left, index } => {
                let left = left.eval(env, ctx)?;
                let index = index.eval(env, ctx)?;
                index::eval_index(left, index)
            }
        })
    }
}

/// Evaluate expressions left to right, stopping at the first error.
pub(crate) fn eval_expressions(
    exprs: &[Expression],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Vec<Value>> {
    exprs.iter().map(|expr| expr.eval(env, ctx)).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a whole program with the default [`EvalContext`].
///
/// # Errors
///
/// Returns the first runtime error raised by any statement.
pub fn eval_program(program: &Program, env: &Environment) -> Result<Value> {
    program.eval(env, &EvalContext::default())
}

// Re-export for use by other modules
pub use call::apply_function;
pub use control::ControlFlow;
