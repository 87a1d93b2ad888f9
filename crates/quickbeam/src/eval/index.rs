//! Index expression evaluation

use crate::error::Result;
use crate::{EvalError, Value, NULL};

/// Evaluate `left[index]`.
///
/// Out-of-range indices, negative ones included, yield `NULL` rather than
/// an error.
pub fn eval_index(left: Value, index: Value) -> Result<Value> {
    match (&left, &index) {
        (Value::Array(items), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(NULL)),
        _ => Err(EvalError::UnsupportedIndex {
            left: left.type_name(),
            index: index.type_name(),
        }),
    }
}
