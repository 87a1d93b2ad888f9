//! Built-in native functions
//!
//! The registry is a static table consulted by identifier resolution after
//! the environment chain, so a local binding named `len` shadows the builtin
//! without touching the table.

use crate::value::{BuiltinFn, Value, NULL};

/// Every builtin, in the order `help()` lists them.
pub static BUILTINS: [BuiltinFn; 7] = [
    BuiltinFn {
        name: "len",
        arity: Some(1),
        func: builtin_len,
    },
    BuiltinFn {
        name: "first",
        arity: Some(1),
        func: builtin_first,
    },
    BuiltinFn {
        name: "last",
        arity: Some(1),
        func: builtin_last,
    },
    BuiltinFn {
        name: "push",
        arity: Some(2),
        func: builtin_push,
    },
    BuiltinFn {
        name: "puts",
        arity: None,
        func: builtin_puts,
    },
    BuiltinFn {
        name: "type_of",
        arity: Some(1),
        func: builtin_type_of,
    },
    BuiltinFn {
        name: "help",
        arity: None,
        func: builtin_help,
    },
];

/// Find a builtin by name.
pub fn lookup(name: &str) -> Option<&'static BuiltinFn> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// Names of all builtins.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Function Implementations
// ═══════════════════════════════════════════════════════════════════════

fn builtin_len(args: &[Value]) -> Result<Value, String> {
    match &args[0] {
        // Byte length, not character count
        Value::String(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(items) => Ok(Value::Integer(items.len() as i64)),
        other => Err(format!("argument not supported, got {}", other.type_name())),
    }
}

fn builtin_first(args: &[Value]) -> Result<Value, String> {
    let items = expect_array(&args[0])?;
    Ok(items.first().cloned().unwrap_or(NULL))
}

fn builtin_last(args: &[Value]) -> Result<Value, String> {
    let items = expect_array(&args[0])?;
    Ok(items.last().cloned().unwrap_or(NULL))
}

fn builtin_push(args: &[Value]) -> Result<Value, String> {
    let items = expect_array(&args[0])?;
    let mut pushed = Vec::with_capacity(items.len() + 1);
    pushed.extend_from_slice(items);
    pushed.push(args[1].clone());
    Ok(Value::array(pushed))
}

fn builtin_puts(args: &[Value]) -> Result<Value, String> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(NULL)
}

fn builtin_type_of(args: &[Value]) -> Result<Value, String> {
    Ok(Value::string(args[0].type_name()))
}

fn help_overview() -> String {
    format!(
        "quickbeam manual:\n\
         programs are made of statements and expressions\n\
         statements: let, return\n\
         expressions: integers, strings, booleans, arrays, functions, if, prefix and infix operators\n\
         builtins: {}\n\
         try help(\"let\") or help(\"return\") for more",
        names().collect::<Vec<_>>().join(", ")
    )
}

const HELP_LET: &str = "let binds a name in the current scope: let <identifier> = <expression>;";

const HELP_RETURN: &str = "return leaves the enclosing function with a value: return <expression>;";

fn builtin_help(args: &[Value]) -> Result<Value, String> {
    match args {
        [] => Ok(Value::string(help_overview())),
        [topic] => match topic.as_str() {
            Some("let") => Ok(Value::string(HELP_LET)),
            Some("return") => Ok(Value::string(HELP_RETURN)),
            _ => Err(format!(
                "unknown topic {:?}, expected \"let\" or \"return\"",
                topic
            )),
        },
        _ => Err(format!("expected at most 1 argument, got {}", args.len())),
    }
}

fn expect_array(value: &Value) -> Result<&[Value], String> {
    value
        .as_array()
        .ok_or_else(|| format!("argument must be ARRAY, got {}", value.type_name()))
}
