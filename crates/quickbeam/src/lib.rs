//! # Quickbeam
//!
//! A tree-walking interpreter for a small, dynamically typed, expression
//! oriented scripting language with first-class closures.
//!
//! Source text flows through three stages:
//!
//! - **Lexer**: characters to [`Token`]s
//! - **Parser**: a Pratt parser producing a [`Program`] plus every
//!   [`ParseError`] it found along the way
//! - **Evaluator**: walks the tree against an [`Environment`] chain,
//!   producing a [`Value`] or the first [`EvalError`]
//!
//! [`Session`] ties them together and keeps bindings alive between inputs:
//!
//! ```
//! use quickbeam::{Session, Value};
//!
//! let session = Session::new();
//! session.run("let add = fn(a, b) { a + b };").unwrap();
//! let result = session.run("add(2, 3)").unwrap();
//! assert_eq!(result, Some(Value::Integer(5)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod builtins;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod session;
pub mod token;
pub mod value;

mod stack;

// Re-export main types
pub use ast::{BlockStatement, Expression, InfixOperator, PrefixOperator, Program, Statement};
pub use context::EvalContext;
pub use environment::Environment;
pub use error::{Error, EvalError, ParseError, Result};
pub use eval::{apply_function, eval_program, ControlFlow, Evaluate};
pub use lexer::Lexer;
pub use parser::{parse, Parser, Precedence};
pub use session::Session;
pub use token::{Token, TokenKind};
pub use value::{BuiltinFn, BuiltinFnPtr, FunctionValue, Value, FALSE, NULL, TRUE};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
