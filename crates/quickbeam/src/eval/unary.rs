//! Prefix operator evaluation

use crate::ast::PrefixOperator;
use crate::error::Result;
use crate::{EvalError, Value};

/// Apply a prefix operator to an already evaluated operand.
///
/// # Errors
///
/// `-` on anything but an integer is an unknown operator; `-i64::MIN`
/// overflows.
pub fn eval_prefix(op: PrefixOperator, operand: Value) -> Result<Value> {
    match op {
        PrefixOperator::Bang => Ok(Value::from(!operand.is_truthy())),
        PrefixOperator::Minus => match operand {
            Value::Integer(n) => n
                .checked_neg()
                .map(Value::Integer)
                .ok_or_else(|| EvalError::IntegerOverflow {
                    expr: format!("-{}", n),
                }),
            other => Err(EvalError::UnknownPrefixOperator {
                op,
                operand: other.type_name(),
            }),
        },
    }
}
