//! Parser tests

use pretty_assertions::assert_eq;
use quickbeam::*;

fn parse_ok(src: &str) -> Program {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected parse errors for {:?}: {:?}", src, errors);
    program
}

fn diagnostics(src: &str) -> Vec<String> {
    parse(src).1.iter().map(ToString::to_string).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Statements
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");
    assert_eq!(
        program.statements,
        vec![
            Statement::Let {
                name: "x".into(),
                value: Expression::IntegerLiteral(5),
            },
            Statement::Let {
                name: "y".into(),
                value: Expression::BooleanLiteral(true),
            },
            Statement::Let {
                name: "foobar".into(),
                value: Expression::Identifier("y".into()),
            },
        ]
    );
}

#[test]
fn test_return_statements() {
    let program = parse_ok("return 5; return x + y;");
    assert_eq!(program.to_string(), "return 5;return (x + y);");
}

#[test]
fn test_semicolons_are_optional() {
    let program = parse_ok("let a = 1\nlet b = 2\na + b");
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_block_statement_at_top_level() {
    let program = parse_ok("{ let a = 1; a }");
    assert!(matches!(
        program.statements.as_slice(),
        [Statement::Block(block)] if block.statements.len() == 2
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Precedence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a + b / c", "(a + (b / c))"),
        ("1 + 2 * 3", "(1 + (2 * 3))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true != false", "(true != false)"),
        ("(2 + 3) + 4", "((2 + 3) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
        ("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
    ];

    for (src, expected) in cases {
        assert_eq!(parse_ok(src).to_string(), expected, "source: {}", src);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_if_else_expression() {
    let program = parse_ok("if (x < y) { x } else { y }");
    let [Statement::Expression(Expression::If {
        condition,
        consequence,
        alternative,
    })] = program.statements.as_slice()
    else {
        panic!("expected a single if expression, got {:?}", program.statements);
    };

    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.to_string(), "x");
    assert_eq!(alternative.as_ref().map(ToString::to_string), Some("y".to_string()));
}

#[test]
fn test_function_literal_parameters() {
    let cases = [
        ("fn() {};", vec![]),
        ("fn(x) {};", vec!["x"]),
        ("fn(x, y, z) {};", vec!["x", "y", "z"]),
    ];

    for (src, expected) in cases {
        let program = parse_ok(src);
        match program.statements.as_slice() {
            [Statement::Expression(Expression::FunctionLiteral { parameters, .. })] => {
                assert_eq!(parameters, &expected);
            }
            other => panic!("expected function literal, got {:?}", other),
        }
    }
}

#[test]
fn test_call_expression() {
    let program = parse_ok("add(1, 2 * 3, 4 + 5);");
    assert_eq!(program.to_string(), "add(1, (2 * 3), (4 + 5))");
}

#[test]
fn test_string_and_array_literals() {
    let program = parse_ok(r#"["hello world", 1, fn(x) { x }]"#);
    match program.statements.as_slice() {
        [Statement::Expression(Expression::ArrayLiteral(items))] => {
            assert_eq!(items.len(), 3);
            assert_eq!(items[0], Expression::StringLiteral("hello world".into()));
        }
        other => panic!("expected array literal, got {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Diagnostics and Recovery
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_let_diagnostics() {
    assert_eq!(
        diagnostics("let x 5; let = 10; let 838383;"),
        vec![
            "expected next token to be =, got INT",
            "expected next token to be IDENT, got =",
            "expected next token to be IDENT, got INT",
        ]
    );
}

#[test]
fn test_no_prefix_parser() {
    assert_eq!(diagnostics(";"), vec!["no prefix parse function for ; found"]);
}

#[test]
fn test_integer_out_of_range() {
    assert_eq!(
        diagnostics("99999999999999999999"),
        vec!["could not parse \"99999999999999999999\" as integer"]
    );
}

#[test]
fn test_malformed_let_keeps_following_statement() {
    let (program, errors) = parse("let = 5; let y = 7;");
    assert!(!errors.is_empty());
    assert_eq!(
        program.statements,
        vec![Statement::Let {
            name: "y".into(),
            value: Expression::IntegerLiteral(7),
        }]
    );
}

#[test]
fn test_errors_accumulate_in_order() {
    let (_, errors) = parse("let = 1; let x 2; )");
    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], ParseError::UnexpectedToken { .. }));
    assert!(matches!(errors[2], ParseError::NoPrefixParser(TokenKind::RParen)));
}

#[test]
fn test_recovery_skips_inner_blocks_of_failed_statement() {
    let (program, errors) = parse("let f = fn() { [fn() { 1 } 7 }; 8;");
    assert_eq!(
        errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["expected next token to be ], got INT"]
    );
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(
        &program.statements[0],
        Statement::Let { name, value: Expression::FunctionLiteral { body, .. } }
            if name == "f" && body.statements.is_empty()
    ));
    assert_eq!(program.statements[1].to_string(), "8");
}

#[test]
fn test_recovery_keeps_later_statements_of_block() {
    let (program, errors) = parse("fn() { [fn() { 1 } 7; 2 }");
    assert_eq!(errors.len(), 1);
    match program.statements.as_slice() {
        [Statement::Expression(Expression::FunctionLiteral { body, .. })] => {
            assert_eq!(body.to_string(), "2");
        }
        other => panic!("expected one function literal, got {:?}", other),
    }
}
