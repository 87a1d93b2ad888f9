//! Infix operation evaluation

use crate::ast::InfixOperator;
use crate::error::Result;
use crate::{EvalError, Value};

/// Apply an infix operator to two already evaluated operands.
///
/// Dispatch is on the operand type pair: integers and strings have their
/// own tables, everything else only supports `==`/`!=` by identity.
///
/// # Errors
///
/// Returns `TypeMismatch` for mixed operand types, `UnknownInfixOperator`
/// for an operator the type does not define, and `DivisionByZero` or
/// `IntegerOverflow` from integer arithmetic.
pub fn eval_infix(op: InfixOperator, left: Value, right: Value) -> Result<Value> {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(op, l, r),
        _ => match op {
            InfixOperator::Eq => Ok(Value::from(left.same_object(&right))),
            InfixOperator::NotEq => Ok(Value::from(!left.same_object(&right))),
            _ if left.type_name() != right.type_name() => Err(EvalError::TypeMismatch {
                op,
                left: left.type_name(),
                right: right.type_name(),
            }),
            _ => Err(unknown_operator(op, &left, &right)),
        },
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Integer Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_integer_infix(op: InfixOperator, l: i64, r: i64) -> Result<Value> {
    let checked = match op {
        InfixOperator::Plus => l.checked_add(r),
        InfixOperator::Minus => l.checked_sub(r),
        InfixOperator::Asterisk => l.checked_mul(r),
        InfixOperator::Slash => {
            if r == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // Truncates toward zero; only MIN / -1 can fail here
            l.checked_div(r)
        }
        InfixOperator::Lt => return Ok(Value::from(l < r)),
        InfixOperator::Gt => return Ok(Value::from(l > r)),
        InfixOperator::Eq => return Ok(Value::from(l == r)),
        InfixOperator::NotEq => return Ok(Value::from(l != r)),
    };

    checked
        .map(Value::Integer)
        .ok_or_else(|| EvalError::overflow(l, op, r))
}

// ═══════════════════════════════════════════════════════════════════════
// String Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_string_infix(op: InfixOperator, l: &str, r: &str) -> Result<Value> {
    match op {
        InfixOperator::Plus => {
            let mut joined = String::with_capacity(l.len() + r.len());
            joined.push_str(l);
            joined.push_str(r);
            Ok(Value::from(joined))
        }
        InfixOperator::Eq => Ok(Value::from(l == r)),
        InfixOperator::NotEq => Ok(Value::from(l != r)),
        _ => Err(EvalError::UnknownInfixOperator {
            op,
            left: "STRING",
            right: "STRING",
        }),
    }
}

fn unknown_operator(op: InfixOperator, left: &Value, right: &Value) -> EvalError {
    EvalError::UnknownInfixOperator {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FALSE, NULL, TRUE};

    fn int(n: i64) -> Value {
        Value::Integer(n)
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(eval_infix(InfixOperator::Plus, int(2), int(3)), Ok(int(5)));
        assert_eq!(eval_infix(InfixOperator::Slash, int(-7), int(2)), Ok(int(-3)));
        assert_eq!(eval_infix(InfixOperator::Lt, int(1), int(2)), Ok(TRUE));
        assert_eq!(eval_infix(InfixOperator::NotEq, int(1), int(1)), Ok(FALSE));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            eval_infix(InfixOperator::Slash, int(1), int(0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = eval_infix(InfixOperator::Plus, int(i64::MAX), int(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("integer overflow: {} + 1", i64::MAX)
        );
        assert!(eval_infix(InfixOperator::Slash, int(i64::MIN), int(-1)).is_err());
    }

    #[test]
    fn test_string_ops() {
        assert_eq!(
            eval_infix(InfixOperator::Plus, Value::string("a"), Value::string("b")),
            Ok(Value::string("ab"))
        );
        assert_eq!(
            eval_infix(InfixOperator::Eq, Value::string("a"), Value::string("a")),
            Ok(TRUE)
        );
        let err = eval_infix(InfixOperator::Minus, Value::string("a"), Value::string("b"))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown operator: STRING - STRING");
    }

    #[test]
    fn test_mixed_types() {
        let err = eval_infix(InfixOperator::Plus, int(5), TRUE).unwrap_err();
        assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");

        let err = eval_infix(InfixOperator::Plus, TRUE, FALSE).unwrap_err();
        assert_eq!(err.to_string(), "unknown operator: BOOLEAN + BOOLEAN");

        // Equality across types is simply false
        assert_eq!(eval_infix(InfixOperator::Eq, int(1), TRUE), Ok(FALSE));
        assert_eq!(eval_infix(InfixOperator::NotEq, NULL, FALSE), Ok(TRUE));
    }

    #[test]
    fn test_array_equality_is_identity() {
        let a = Value::array(vec![int(1)]);
        let b = Value::array(vec![int(1)]);
        assert_eq!(eval_infix(InfixOperator::Eq, a.clone(), a.clone()), Ok(TRUE));
        assert_eq!(eval_infix(InfixOperator::Eq, a, b), Ok(FALSE));
    }
}
