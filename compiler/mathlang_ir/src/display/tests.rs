//! Tests for `expr_to_string`.

use super::*;
use crate::ast::{BinaryOp, UnaryOp};
use pretty_assertions::assert_eq;

#[test]
fn test_literals() {
    assert_eq!(expr_to_string(&Expr::int(42)), "42");
    assert_eq!(expr_to_string(&Expr::Number(NumberLiteral::Real(2.5))), "2.5");
    assert_eq!(expr_to_string(&Expr::Number(NumberLiteral::Real(1.0))), "1.0");
    assert_eq!(expr_to_string(&Expr::String("hi".into())), "\"hi\"");
    assert_eq!(expr_to_string(&Expr::NamedConstant("PI".into())), "[[PI]]");
}

#[test]
fn test_complex_literals() {
    let pure = Expr::Number(NumberLiteral::Complex { re: 0.0, im: 2.0 });
    assert_eq!(expr_to_string(&pure), "2.0i");

    let mixed = Expr::Number(NumberLiteral::Complex { re: 3.0, im: 2.0 });
    assert_eq!(expr_to_string(&mixed), "(3.0 + 2.0i)");
}

#[test]
fn test_nested_binary_is_always_parenthesized() {
    // x * 2 + 1: precedence alone would not need parens
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Mul, Expr::ident("x"), Expr::int(2)),
        Expr::int(1),
    );
    assert_eq!(expr_to_string(&expr), "(x * 2) + 1");

    let right = Expr::binary(
        BinaryOp::Pow,
        Expr::int(2),
        Expr::binary(BinaryOp::Pow, Expr::int(3), Expr::int(4)),
    );
    assert_eq!(expr_to_string(&right), "2 ^ (3 ^ 4)");
}

#[test]
fn test_unary_and_index() {
    let neg = Expr::Unary {
        op: UnaryOp::Neg,
        operand: Box::new(Expr::ident("x")),
    };
    assert_eq!(expr_to_string(&neg), "-x");

    let index = Expr::Index {
        target: Box::new(Expr::ident("data")),
        index: Box::new(Expr::int(0)),
    };
    assert_eq!(expr_to_string(&index), "data[0]");
}

#[test]
fn test_calls_and_lambdas() {
    let call = Expr::Call {
        name: "Map".into(),
        args: vec![
            Expr::ident("xs"),
            Expr::lambda(
                vec!["x".into()],
                Expr::binary(BinaryOp::Mul, Expr::ident("x"), Expr::int(2)),
            ),
        ],
    };
    assert_eq!(expr_to_string(&call), "Map(xs, x -> x * 2)");

    let zero = Expr::lambda(vec![], Expr::int(1));
    assert_eq!(expr_to_string(&zero), "() -> 1");

    let multi = Expr::lambda(
        vec!["a".into(), "b".into()],
        Expr::binary(BinaryOp::Add, Expr::ident("a"), Expr::ident("b")),
    );
    assert_eq!(expr_to_string(&multi), "(a, b) -> a + b");
}
