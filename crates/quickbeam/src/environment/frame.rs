//! A single scope in the environment chain

use indexmap::IndexMap;

use super::Environment;
use crate::value::Value;

/// One lexical scope: its own bindings plus a link to the enclosing scope.
///
/// Bindings keep definition order so the REPL can list them predictably.
#[derive(Default)]
pub(crate) struct Frame {
    pub(crate) bindings: IndexMap<String, Value>,
    pub(crate) parent: Option<Environment>,
}

impl Frame {
    pub(crate) fn enclosed(parent: Environment) -> Self {
        Self {
            bindings: IndexMap::new(),
            parent: Some(parent),
        }
    }
}
