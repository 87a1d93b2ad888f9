//! Value representation for runtime values

mod callable;
mod display;
mod impls;

pub use callable::{BuiltinFn, BuiltinFnPtr, FunctionValue};

use std::rc::Rc;

/// Runtime value produced by the evaluator.
///
/// Scalars are inline; strings, arrays and functions are reference counted
/// so cloning a `Value` never copies payload. Values are single-threaded
/// (`Rc`), matching the one-session-per-thread model of the interpreter.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// Immutable string
    String(Rc<str>),

    /// `true` / `false`
    Boolean(bool),

    /// The absence of a value
    Null,

    /// Immutable array; builtins return new arrays rather than mutating
    Array(Rc<Vec<Value>>),

    /// User-defined function closing over its defining environment
    Function(Rc<FunctionValue>),

    /// Native function from the builtin registry
    Builtin(&'static BuiltinFn),
}

/// The `true` singleton
pub const TRUE: Value = Value::Boolean(true);

/// The `false` singleton
pub const FALSE: Value = Value::Boolean(false);

/// The `null` singleton
pub const NULL: Value = Value::Null;
