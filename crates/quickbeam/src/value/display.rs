//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),

            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }

            Value::Function(func) => write!(f, "<fn({})>", func.params.join(", ")),
            Value::Builtin(b) => write!(f, "<builtin {}>", b.name),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is what the REPL prints; Debug quotes strings
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Function(func) => {
                write!(f, "fn({}) {{\n{}\n}}", func.params.join(", "), func.body)
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_display_is_unquoted() {
        let s = Value::string("hi");
        assert_eq!(s.to_string(), "hi");
        assert_eq!(format!("{:?}", s), "\"hi\"");
    }

    #[test]
    fn test_array_display_quotes_strings() {
        let arr = Value::array(vec![Value::Integer(1), Value::string("a"), NULL]);
        assert_eq!(arr.to_string(), "[1, \"a\", null]");
    }
}
