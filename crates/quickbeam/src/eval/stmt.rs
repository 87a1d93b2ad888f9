//! Statement evaluation

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::error::Result;
use crate::eval::control::ControlFlow;
use crate::eval::if_expr::select_branch;
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalContext, EvalError, Value, NULL};

use super::Evaluate;

impl Evaluate for Statement {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value> {
        ensure_sufficient_stack(|| match self {
            Statement::Let { name, value } => {
                let value = value.eval(env, ctx)?;
                env.define(name.as_str(), value);
                Ok(NULL)
            }

            Statement::Return(expr) => {
                let value = expr.eval(env, ctx)?;
                Err(EvalError::ControlFlow(ControlFlow::return_value(value)))
            }

            Statement::Expression(expr) => expr.eval(env, ctx),

            Statement::Block(block) => block.eval(env, ctx),
        })
    }
}

/// Blocks share the scope they appear in; only function application opens a
/// new one. A `return` inside passes through untouched.
impl Evaluate for BlockStatement {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value> {
        eval_statements(&self.statements, env, ctx)
    }
}

impl Evaluate for Program {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value> {
        eval_program_visible(self, env, ctx).map(|value| value.unwrap_or(NULL))
    }
}

/// Evaluate statements in order, yielding the last value (`NULL` if empty).
pub fn eval_statements(
    stmts: &[Statement],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value> {
    let mut last_value = NULL;

    for stmt in stmts {
        last_value = stmt.eval(env, ctx)?;
    }

    Ok(last_value)
}

/// Evaluate a program, reporting `None` when it produced nothing to show.
///
/// A program produces nothing when it is empty or when the last statement
/// it ran was a `let`, including one reached through a block or a taken
/// `if` branch. A top-level `return` always produces its value.
pub(crate) fn eval_program_visible(
    program: &Program,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Option<Value>> {
    match eval_statements_visible(&program.statements, env, ctx) {
        Err(EvalError::ControlFlow(cf)) => Ok(Some(cf.into_value())),
        other => other,
    }
}

fn eval_statements_visible(
    stmts: &[Statement],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Option<Value>> {
    let mut last = None;

    for stmt in stmts {
        last = eval_statement_visible(stmt, env, ctx)?;
    }

    Ok(last)
}

fn eval_statement_visible(
    stmt: &Statement,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Option<Value>> {
    ensure_sufficient_stack(|| match stmt {
        Statement::Let { .. } => stmt.eval(env, ctx).map(|_| None),

        Statement::Block(block) => eval_statements_visible(&block.statements, env, ctx),

        Statement::Expression(Expression::If {
            condition,
            consequence,
            alternative,
        }) => match select_branch(condition, consequence, alternative.as_ref(), env, ctx)? {
            Some(branch) => eval_statements_visible(&branch.statements, env, ctx),
            None => Ok(Some(NULL)),
        },

        _ => stmt.eval(env, ctx).map(Some),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn run(src: &str) -> Result<Value> {
        let (program, errors) = parse(src);
        assert!(errors.is_empty(), "parse errors: {:?}", errors);
        program.eval(&Environment::new(), &EvalContext::default())
    }

    #[test]
    fn test_let_yields_null_and_binds() {
        let env = Environment::new();
        let (program, _) = parse("let a = 5;");
        assert_eq!(program.eval(&env, &EvalContext::default()), Ok(NULL));
        assert_eq!(env.get("a"), Some(Value::Integer(5)));
    }

    #[test]
    fn test_empty_program_is_null() {
        assert_eq!(run(""), Ok(NULL));
    }

    #[test]
    fn test_top_level_return_unwraps() {
        assert_eq!(run("9; return 2 * 5; 9;"), Ok(Value::Integer(10)));
    }

    #[test]
    fn test_nested_block_return_passes_through() {
        let src = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
        assert_eq!(run(src), Ok(Value::Integer(10)));
    }

    #[test]
    fn test_visibility_follows_evaluation() {
        let visible = |src: &str| {
            let (program, _) = parse(src);
            eval_program_visible(&program, &Environment::new(), &EvalContext::default())
        };
        assert_eq!(visible(""), Ok(None));
        assert_eq!(visible("1; let a = 2;"), Ok(None));
        assert_eq!(visible("return 5; let a = 2;"), Ok(Some(Value::Integer(5))));
        assert_eq!(visible("{ 1; { let a = 2; } }"), Ok(None));
        assert_eq!(visible("{ }"), Ok(None));
        assert_eq!(visible("let a = 2; a"), Ok(Some(Value::Integer(2))));
    }

    #[test]
    fn test_block_statement_shares_scope() {
        assert_eq!(run("{ let x = 3; } x"), Ok(Value::Integer(3)));
    }
}
