//! Tests for statement and expression parsing.

use crate::parse;
use mathlang_ir::{BinaryOp, Expr, NumberLiteral, Program, Statement, UnaryOp};
use pretty_assertions::assert_eq;

fn parse_ok(source: &str) -> Program {
    match parse(source) {
        Ok(program) => program,
        Err(e) => panic!("failed to parse {source:?}: {e}"),
    }
}

/// Parse a single expression statement.
fn expr(source: &str) -> Expr {
    let program = parse_ok(source);
    assert_eq!(program.len(), 1, "expected one statement in {source:?}");
    match program.statements.into_iter().next() {
        Some(Statement::Expression(e)) => e,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

fn int(n: i64) -> Expr {
    Expr::int(n)
}

fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

fn neg(operand: Expr) -> Expr {
    Expr::Unary {
        op: UnaryOp::Neg,
        operand: Box::new(operand),
    }
}

fn complex(re: f64, im: f64) -> Expr {
    Expr::Number(NumberLiteral::Complex { re, im })
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        expr("1 + 2 * 3"),
        bin(BinaryOp::Add, int(1), bin(BinaryOp::Mul, int(2), int(3)))
    );
    assert_eq!(
        expr("(1 + 2) * 3"),
        bin(BinaryOp::Mul, bin(BinaryOp::Add, int(1), int(2)), int(3))
    );
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(
        expr("2 ^ 3 ^ 4"),
        bin(BinaryOp::Pow, int(2), bin(BinaryOp::Pow, int(3), int(4)))
    );
}

#[test]
fn test_additive_and_multiplicative_are_left_associative() {
    assert_eq!(
        expr("10 - 4 - 3"),
        bin(BinaryOp::Sub, bin(BinaryOp::Sub, int(10), int(4)), int(3))
    );
    assert_eq!(
        expr("8 / 4 % 3"),
        bin(BinaryOp::Mod, bin(BinaryOp::Div, int(8), int(4)), int(3))
    );
}

#[test]
fn test_unary_minus_precedence() {
    // tighter than multiplicative
    assert_eq!(
        expr("-2 * 3"),
        bin(BinaryOp::Mul, neg(int(2)), int(3))
    );
    // looser than power
    assert_eq!(expr("-2 ^ 2"), neg(bin(BinaryOp::Pow, int(2), int(2))));
    // signed exponent
    assert_eq!(expr("2 ^ -1"), bin(BinaryOp::Pow, int(2), neg(int(1))));
}

#[test]
fn test_comparison_is_lowest() {
    assert_eq!(
        expr("n * 2 <= 1 + 3"),
        bin(
            BinaryOp::LtEq,
            bin(BinaryOp::Mul, Expr::ident("n"), int(2)),
            bin(BinaryOp::Add, int(1), int(3))
        )
    );
    assert_eq!(
        expr("x % 2 == 0"),
        bin(
            BinaryOp::Eq,
            bin(BinaryOp::Mod, Expr::ident("x"), int(2)),
            int(0)
        )
    );
}

#[test]
fn test_number_literals() {
    assert_eq!(expr("42"), int(42));
    assert_eq!(expr("2.5"), Expr::Number(NumberLiteral::Real(2.5)));
    assert_eq!(expr("1.5e-3"), Expr::Number(NumberLiteral::Real(0.0015)));
    assert_eq!(expr("\"hello\""), Expr::String("hello".into()));
}

#[test]
fn test_complex_literals() {
    assert_eq!(expr("2i"), complex(0.0, 2.0));
    assert_eq!(expr("2I"), complex(0.0, 2.0));
    assert_eq!(expr("3+2i"), complex(3.0, 2.0));
    assert_eq!(expr("3-2i"), complex(3.0, -2.0));
    assert_eq!(expr("1.5 + 0.5i"), complex(1.5, 0.5));
}

#[test]
fn test_complex_folding_respects_precedence() {
    // (2 * 3) + 2i, not 2 * (3 + 2i)
    assert_eq!(
        expr("2 * 3 + 2i"),
        bin(
            BinaryOp::Add,
            bin(BinaryOp::Mul, int(2), int(3)),
            complex(0.0, 2.0)
        )
    );
    // (a - 3) + 2i
    assert_eq!(
        expr("a - 3 + 2i"),
        bin(
            BinaryOp::Add,
            bin(BinaryOp::Sub, Expr::ident("a"), int(3)),
            complex(0.0, 2.0)
        )
    );
}

#[test]
fn test_assignment() {
    let program = parse_ok("x = 10");
    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "x".into(),
            value: int(10),
        }]
    );
}

#[test]
fn test_function_definition_sugar() {
    let program = parse_ok("f(x, y) = x + y");
    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "f".into(),
            value: Expr::lambda(
                vec!["x".into(), "y".into()],
                bin(BinaryOp::Add, Expr::ident("x"), Expr::ident("y"))
            ),
        }]
    );

    let program = parse_ok("g() = 1");
    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "g".into(),
            value: Expr::lambda(vec![], int(1)),
        }]
    );
}

#[test]
fn test_call_compared_with_equality_is_not_a_definition() {
    assert_eq!(
        expr("f(1) == 2"),
        bin(
            BinaryOp::Eq,
            Expr::Call {
                name: "f".into(),
                args: vec![int(1)],
            },
            int(2)
        )
    );
}

#[test]
fn test_lambda_forms() {
    assert_eq!(
        expr("x -> x * 2"),
        Expr::lambda(
            vec!["x".into()],
            bin(BinaryOp::Mul, Expr::ident("x"), int(2))
        )
    );
    assert_eq!(expr("() -> 1"), Expr::lambda(vec![], int(1)));
    assert_eq!(
        expr("(acc, x) -> acc + x"),
        Expr::lambda(
            vec!["acc".into(), "x".into()],
            bin(BinaryOp::Add, Expr::ident("acc"), Expr::ident("x"))
        )
    );
}

#[test]
fn test_parenthesized_identifier_is_not_a_lambda() {
    assert_eq!(
        expr("(x) * 2"),
        bin(BinaryOp::Mul, Expr::ident("x"), int(2))
    );
}

#[test]
fn test_call_with_inline_lambda_argument() {
    assert_eq!(
        expr("Map(List(1, 2, 3), x -> x * 2)"),
        Expr::Call {
            name: "Map".into(),
            args: vec![
                Expr::Call {
                    name: "List".into(),
                    args: vec![int(1), int(2), int(3)],
                },
                Expr::lambda(
                    vec!["x".into()],
                    bin(BinaryOp::Mul, Expr::ident("x"), int(2))
                ),
            ],
        }
    );
}

#[test]
fn test_zero_argument_call() {
    assert_eq!(
        expr("Now()"),
        Expr::Call {
            name: "Now".into(),
            args: vec![],
        }
    );
}

#[test]
fn test_chained_index() {
    assert_eq!(
        expr("a[0][1]"),
        Expr::Index {
            target: Box::new(Expr::Index {
                target: Box::new(Expr::ident("a")),
                index: Box::new(int(0)),
            }),
            index: Box::new(int(1)),
        }
    );
}

#[test]
fn test_named_constant() {
    assert_eq!(expr("[[PI]]"), Expr::NamedConstant("PI".into()));
    assert_eq!(
        expr("2 * [[PI]]"),
        bin(BinaryOp::Mul, int(2), Expr::NamedConstant("PI".into()))
    );
}

#[test]
fn test_separators_comments_and_blank_statements() {
    let program = parse_ok("x = 1 # comment\n\n;; y = 2; x + y\n");
    assert_eq!(program.len(), 3);
    assert!(matches!(
        program.statements[2],
        Statement::Expression(Expr::Binary { op: BinaryOp::Add, .. })
    ));

    assert!(parse_ok("").is_empty());
    assert!(parse_ok("# only a comment\n").is_empty());
}

#[test]
fn test_newlines_inside_parentheses_are_ignored() {
    let program = parse_ok("Reduce(\n  List(1, 2),\n  (a, b) -> a + b,\n  0\n)");
    assert_eq!(program.len(), 1);
}

#[test]
fn test_recursive_definition_parses() {
    let program = parse_ok("factorial(n) = If(n <= 1, 1, n * factorial(n - 1))\nfactorial(5)");
    assert_eq!(program.len(), 2);
    assert!(matches!(
        &program.statements[0],
        Statement::Assignment { name, value: Expr::Lambda(_) } if name == "factorial"
    ));
}

#[test]
fn test_deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(expr(&source), int(1));
}
