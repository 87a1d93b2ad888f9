//! Syntax tree produced by the parser and walked by the evaluator
//!
//! Nodes are immutable once built. Function bodies are held behind `Rc` so a
//! runtime function value can share its body with the tree instead of
//! copying it.
//!
//! Every node implements `Display` with a canonical, fully parenthesised
//! rendering, which is what the precedence tests compare against:
//!
//! ```
//! let (program, errors) = quickbeam::parse("1 + 2 * 3");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "(1 + (2 * 3))");
//! ```

use serde::Serialize;
use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::stack::ensure_sufficient_stack;

/// A whole parsed program.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

/// A `{ ... }` sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockStatement {
    /// Statements in source order
    pub statements: Vec<Statement>,
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// Bound name
        name: String,
        /// Initializer
        value: Expression,
    },

    /// `return <value>;`
    Return(Expression),

    /// A bare expression used as a statement
    Expression(Expression),

    /// A nested block
    Block(BlockStatement),
}

/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrefixOperator {
    /// `!x`
    Bang,
    /// `-x`
    Minus,
}

/// Binary infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InfixOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// A name reference
    Identifier(String),

    /// `42`
    IntegerLiteral(i64),

    /// `"text"`
    StringLiteral(String),

    /// `true` / `false`
    BooleanLiteral(bool),

    /// `[a, b, c]`
    ArrayLiteral(Vec<Expression>),

    /// `!x`, `-x`
    Prefix {
        /// The operator
        operator: PrefixOperator,
        /// Operand
        right: Box<Expression>,
    },

    /// `a + b` and friends
    Infix {
        /// The operator
        operator: InfixOperator,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
    },

    /// `if (cond) { ... } else { ... }`
    If {
        /// Condition
        condition: Box<Expression>,
        /// Taken when the condition is truthy
        consequence: BlockStatement,
        /// Optional `else` branch
        alternative: Option<BlockStatement>,
    },

    /// `fn(a, b) { ... }`
    FunctionLiteral {
        /// Parameter names
        parameters: Vec<String>,
        /// Body, shared with every closure created from this literal
        body: Rc<BlockStatement>,
    },

    /// `callee(args...)`
    Call {
        /// Expression producing the callee
        function: Box<Expression>,
        /// Argument expressions, evaluated left to right
        arguments: Vec<Expression>,
    },

    /// `left[index]`
    Index {
        /// Indexed expression
        left: Box<Expression>,
        /// Index expression
        index: Box<Expression>,
    },
}

// ═══════════════════════════════════════════════════════════════════════
// Drop
// ═══════════════════════════════════════════════════════════════════════

// Dropping a tree recurses once per nesting level, like parsing it did.
// Children are moved out and dropped under the same stack guard.

impl Drop for Expression {
    fn drop(&mut self) {
        match self {
            Expression::Prefix { right, .. } => drop_nested(right),
            Expression::Infix { left, right, .. } | Expression::Index { left, index: right } => {
                drop_nested(left);
                drop_nested(right);
            }
            Expression::If { condition, .. } => drop_nested(condition),
            Expression::Call {
                function,
                arguments,
            } => {
                drop_nested(function);
                drop_guarded(mem::take(arguments));
            }
            Expression::ArrayLiteral(elements) => drop_guarded(mem::take(elements)),
            _ => {}
        }
    }
}

impl Drop for BlockStatement {
    fn drop(&mut self) {
        drop_guarded(mem::take(&mut self.statements));
    }
}

fn drop_nested(expr: &mut Expression) {
    drop_guarded(mem::replace(expr, Expression::BooleanLiteral(false)));
}

fn drop_guarded<T>(value: T) {
    ensure_sufficient_stack(move || drop(value));
}

// ═══════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return(value) => write!(f, "return {};", value),
            Statement::Expression(expr) => write!(f, "{}", expr),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOperator::Bang => f.write_str("!"),
            PrefixOperator::Minus => f.write_str("-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => f.write_str(name),
            Expression::IntegerLiteral(n) => write!(f, "{}", n),
            Expression::StringLiteral(s) => f.write_str(s),
            Expression::BooleanLiteral(b) => write!(f, "{}", b),
            Expression::ArrayLiteral(elements) => {
                write!(f, "[")?;
                write_comma_separated(f, elements)?;
                write!(f, "]")
            }
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {}", parameters.join(", "), body)
            }
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{}(", function)?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            }
            Expression::Index { left, index } => write!(f, "({}[{}])", left, index),
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_let_statement_display() {
        let program = Program {
            statements: vec![Statement::Let {
                name: "myVar".to_string(),
                value: Expression::Identifier("anotherVar".to_string()),
            }],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn test_nested_infix_display() {
        let expr = Expression::Infix {
            operator: InfixOperator::Plus,
            left: Box::new(Expression::IntegerLiteral(1)),
            right: Box::new(Expression::Prefix {
                operator: PrefixOperator::Minus,
                right: Box::new(Expression::Identifier("a".to_string())),
            }),
        };
        assert_eq!(expr.to_string(), "(1 + (-a))");
    }

    #[test]
    fn test_call_and_index_display() {
        let call = Expression::Call {
            function: Box::new(Expression::Identifier("add".to_string())),
            arguments: vec![Expression::IntegerLiteral(1), Expression::IntegerLiteral(2)],
        };
        assert_eq!(call.to_string(), "add(1, 2)");

        let index = Expression::Index {
            left: Box::new(Expression::Identifier("xs".to_string())),
            index: Box::new(Expression::IntegerLiteral(0)),
        };
        assert_eq!(index.to_string(), "(xs[0])");
    }

    fn on_small_stack(f: impl FnOnce() + Send + 'static) {
        let handle = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(f)
            .unwrap();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn test_deep_expression_drops() {
        on_small_stack(|| {
            let mut expr = Expression::IntegerLiteral(1);
            for _ in 0..100_000 {
                expr = Expression::Prefix {
                    operator: PrefixOperator::Minus,
                    right: Box::new(expr),
                };
            }
            drop(expr);
        });
    }

    #[test]
    fn test_deep_block_drops() {
        on_small_stack(|| {
            let mut block = BlockStatement::default();
            for _ in 0..100_000 {
                block = BlockStatement {
                    statements: vec![Statement::Block(block)],
                };
            }
            drop(block);
        });
    }
}
