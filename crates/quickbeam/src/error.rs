//! Error types for parsing and evaluation

use thiserror::Error;

use crate::ast::{InfixOperator, PrefixOperator};
use crate::eval::ControlFlow;
use crate::token::TokenKind;

/// A syntax diagnostic recorded by the parser.
///
/// Diagnostics accumulate; the parser never stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The peek token was not the one the grammar requires
    #[error("expected next token to be {expected}, got {got}")]
    UnexpectedToken {
        /// Required kind
        expected: TokenKind,
        /// Kind actually found
        got: TokenKind,
    },

    /// No expression can start with this token
    #[error("no prefix parse function for {0} found")]
    NoPrefixParser(TokenKind),

    /// An integer literal that does not fit in 64 bits
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

/// Runtime error produced while evaluating a program.
///
/// Runtime faults travel on the `Err` side of every evaluation call, so the
/// first error halts the enclosing statement list and bubbles up unchanged.
/// `ControlFlow` is not a fault: it carries `return` out to the nearest
/// function boundary and is never visible to callers of the public API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Infix operator applied to operands of different types
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// The operator
        op: InfixOperator,
        /// Left operand type
        left: &'static str,
        /// Right operand type
        right: &'static str,
    },

    /// Prefix operator not defined for the operand type
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator
        op: PrefixOperator,
        /// Operand type
        operand: &'static str,
    },

    /// Infix operator not defined for these (same-typed) operands
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// The operator
        op: InfixOperator,
        /// Left operand type
        left: &'static str,
        /// Right operand type
        right: &'static str,
    },

    /// Name not bound in any scope nor in the builtin table
    #[error("identifier not found: {name}")]
    UndefinedIdentifier {
        /// The missing name
        name: String,
    },

    /// Call applied to something that is not a function
    #[error("not a function: {got}")]
    NotCallable {
        /// Type of the callee
        got: &'static str,
    },

    /// Argument count does not match the callee's parameter count
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch {
        /// Parameter count
        expected: usize,
        /// Argument count
        got: usize,
    },

    /// Integer division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// 64-bit signed arithmetic overflowed
    #[error("integer overflow: {expr}")]
    IntegerOverflow {
        /// The offending operation, rendered with its operand values
        expr: String,
    },

    /// Index operator applied to unsupported operand types
    #[error("index operator not supported: {left}[{index}]")]
    UnsupportedIndex {
        /// Indexed value type
        left: &'static str,
        /// Index value type
        index: &'static str,
    },

    /// A builtin rejected its arguments
    #[error("{name}: {message}")]
    BuiltinError {
        /// Builtin name
        name: &'static str,
        /// What went wrong
        message: String,
    },

    /// Too many nested function applications
    #[error("stack overflow: call depth exceeded {max}")]
    StackOverflow {
        /// Maximum allowed depth
        max: usize,
    },

    /// Non-local control flow in transit (not an error)
    #[error("control flow escaped its function: {0:?}")]
    ControlFlow(ControlFlow),
}

impl EvalError {
    /// Shorthand for an overflow error on a binary integer operation.
    pub(crate) fn overflow(left: i64, op: InfixOperator, right: i64) -> Self {
        EvalError::IntegerOverflow {
            expr: format!("{} {} {}", left, op, right),
        }
    }
}

/// Top-level error for running source text end to end.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The source had syntax errors; nothing was evaluated
    #[error("{}", render_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Evaluation failed
    #[error(transparent)]
    Eval(#[from] EvalError),
}

fn render_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
