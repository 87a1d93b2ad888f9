//! Runtime environment managing variable bindings

mod frame;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use frame::Frame;

use crate::value::Value;

/// A handle to a lexical scope and, through it, the whole scope chain.
///
/// Cloning the handle is cheap and shares the scope: this is how closures
/// capture the environment they were defined in. Bindings are only ever
/// added to the innermost scope; there is no assignment into an enclosing
/// scope, only shadowing.
///
/// # Example
///
/// ```
/// use quickbeam::{Environment, Value};
///
/// let global = Environment::new();
/// global.define("x", Value::Integer(1));
///
/// // Enter a new scope
/// let local = Environment::enclosed(&global);
/// local.define("y", Value::Integer(2));
/// local.define("x", Value::Integer(10)); // Shadows outer x
///
/// assert_eq!(local.get("x"), Some(Value::Integer(10)));
/// assert_eq!(local.get("y"), Some(Value::Integer(2)));
///
/// // The outer scope is untouched
/// assert_eq!(global.get("x"), Some(Value::Integer(1)));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Clone, Default)]
pub struct Environment {
    frame: Rc<RefCell<Frame>>,
}

impl Environment {
    /// Create a new root environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child scope whose parent is `parent`.
    pub fn enclosed(parent: &Environment) -> Self {
        Self {
            frame: Rc::new(RefCell::new(Frame::enclosed(parent.clone()))),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` in this (innermost) scope, replacing any binding of the
    /// same name in this scope.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::trace!(%name, "define");
        self.frame.borrow_mut().bindings.insert(name, value);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up `name`, searching outward through enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let frame = current.frame.borrow();
                if let Some(value) = frame.bindings.get(name) {
                    return Some(value.clone());
                }
                frame.parent.clone()
            };
            current = parent?;
        }
    }

    /// Check if a binding is visible from this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check if a binding exists in this scope only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.frame.borrow().bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Names bound in this scope, in definition order.
    pub fn names_in_current_scope(&self) -> Vec<String> {
        self.frame.borrow().bindings.keys().cloned().collect()
    }

    /// The enclosing scope, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.frame.borrow().parent.clone()
    }

    /// Number of scopes in the chain, counting this one.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    /// Check if this is a root scope.
    pub fn is_global_scope(&self) -> bool {
        self.frame.borrow().parent.is_none()
    }

    /// Number of bindings in this scope.
    pub fn len(&self) -> usize {
        self.frame.borrow().bindings.len()
    }

    /// Check if this scope has no bindings.
    pub fn is_empty(&self) -> bool {
        self.frame.borrow().bindings.is_empty()
    }

    /// Check if two handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.frame, &other.frame)
    }
}

impl fmt::Debug for Environment {
    // Values are left out: a closure stored here would print its own scope.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names_in_current_scope())
            .field("depth", &self.depth())
            .finish()
    }
}
