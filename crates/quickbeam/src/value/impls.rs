//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::rc::Rc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Rc::from(s.as_ref()))
    }

    /// Create an array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(items))
    }

    /// Create a function value
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(Rc::new(func))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Tag
    // ═══════════════════════════════════════════════════════════════════

    /// The value's type tag, as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::String(_) => "STRING",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Array(_) => "ARRAY",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// `null` and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is callable (function or builtin)
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Builtin(_))
    }

    /// Identity comparison used by `==`/`!=` outside the integer and
    /// string cases.
    ///
    /// Booleans and null have no identity beyond their value, so they
    /// compare by value; heap values compare by pointer.
    pub fn same_object(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Get the integer payload, if any
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the array elements, if any
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            TRUE
        } else {
            FALSE
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq (structural, for tests and host code)
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}
