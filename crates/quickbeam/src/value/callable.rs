//! Callable value types: closures and builtins

use std::rc::Rc;

use super::Value;
use crate::ast::BlockStatement;
use crate::environment::Environment;

/// Signature of a native builtin.
///
/// Builtins report failures as a plain message; the dispatcher wraps it in
/// `EvalError::BuiltinError` together with the builtin's name.
pub type BuiltinFnPtr = fn(&[Value]) -> Result<Value, String>;

/// A user-defined function together with the environment it was created in.
///
/// The environment is shared, not copied: bindings added to that scope after
/// the function was created are still visible when it runs.
#[derive(Clone)]
pub struct FunctionValue {
    /// Parameter names, bound positionally on each call
    pub params: Vec<String>,

    /// The function body, shared with the syntax tree
    pub body: Rc<BlockStatement>,

    /// The defining (captured) environment
    pub env: Environment,
}

impl FunctionValue {
    /// Create a new closure
    pub fn new(params: Vec<String>, body: Rc<BlockStatement>, env: Environment) -> Self {
        Self { params, body, env }
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl std::fmt::Debug for FunctionValue {
    // The captured environment may contain this very function, so it is
    // deliberately left out.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FunctionValue(fn({}))", self.params.join(", "))
    }
}

/// A built-in native function.
pub struct BuiltinFn {
    /// Function name, as resolved by identifier lookup
    pub name: &'static str,

    /// Exact argument count, or `None` if the builtin checks its own
    pub arity: Option<usize>,

    /// The native implementation
    pub func: BuiltinFnPtr,
}

impl std::fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}
