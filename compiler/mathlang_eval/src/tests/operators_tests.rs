//! Tests for the builtin binary operator rules.

use mathlang_ir::BinaryOp;
use mathlang_runtime::{EvalErrorKind, Scalar, Value};
use pretty_assertions::assert_eq;

use crate::evaluate_binary;

fn apply(op: BinaryOp, left: Value, right: Value) -> Value {
    match evaluate_binary(op, &left, &right) {
        Some(Ok(v)) => v,
        Some(Err(e)) => panic!("{left} {} {right} failed: {e}", op.as_symbol()),
        None => panic!("no builtin rule for {left} {} {right}", op.as_symbol()),
    }
}

fn apply_err(op: BinaryOp, left: Value, right: Value) -> EvalErrorKind {
    match evaluate_binary(op, &left, &right) {
        Some(Err(e)) => e.kind,
        Some(Ok(v)) => panic!("expected {left} {} {right} to fail, got {v}", op.as_symbol()),
        None => panic!("no builtin rule for {left} {} {right}", op.as_symbol()),
    }
}

#[test]
fn test_integer_arithmetic_stays_integer() {
    assert_eq!(apply(BinaryOp::Add, Value::int(7), Value::int(3)), Value::int(10));
    assert_eq!(apply(BinaryOp::Sub, Value::int(7), Value::int(10)), Value::int(-3));
    assert_eq!(apply(BinaryOp::Mul, Value::int(6), Value::int(7)), Value::int(42));
    assert_eq!(apply(BinaryOp::Pow, Value::int(2), Value::int(10)), Value::int(1024));
}

#[test]
fn test_integer_division_is_real() {
    assert_eq!(apply(BinaryOp::Div, Value::int(7), Value::int(2)), Value::real(3.5));
    assert_eq!(apply(BinaryOp::Div, Value::int(6), Value::int(3)), Value::real(2.0));
}

#[test]
fn test_modulo_takes_sign_of_divisor() {
    assert_eq!(apply(BinaryOp::Mod, Value::int(7), Value::int(3)), Value::int(1));
    assert_eq!(apply(BinaryOp::Mod, Value::int(-7), Value::int(3)), Value::int(2));
    assert_eq!(apply(BinaryOp::Mod, Value::int(7), Value::int(-3)), Value::int(-2));
    assert_eq!(apply(BinaryOp::Mod, Value::real(-7.5), Value::real(2.0)), Value::real(0.5));
    assert_eq!(apply(BinaryOp::Mod, Value::int(i64::MIN), Value::int(-1)), Value::int(0));
}

#[test]
fn test_negative_integer_exponent_is_real() {
    assert_eq!(apply(BinaryOp::Pow, Value::int(2), Value::int(-1)), Value::real(0.5));
    assert_eq!(apply(BinaryOp::Pow, Value::int(0), Value::int(0)), Value::int(1));
}

#[test]
fn test_integer_overflow_falls_back_to_real() {
    let sum = apply(BinaryOp::Add, Value::int(i64::MAX), Value::int(1));
    assert!(matches!(sum, Value::Scalar(Scalar::Real(_))), "{sum:?}");
    let product = apply(BinaryOp::Mul, Value::int(i64::MAX), Value::int(2));
    assert!(matches!(product, Value::Scalar(Scalar::Real(_))), "{product:?}");
    let power = apply(BinaryOp::Pow, Value::int(10), Value::int(30));
    assert!(matches!(power, Value::Scalar(Scalar::Real(_))), "{power:?}");
}

#[test]
fn test_mixed_operands_are_promoted() {
    assert_eq!(apply(BinaryOp::Add, Value::int(1), Value::real(2.5)), Value::real(3.5));
    assert_eq!(
        apply(BinaryOp::Add, Value::int(1), Value::complex(2.0, 3.0)),
        Value::complex(3.0, 3.0)
    );
    assert_eq!(
        apply(BinaryOp::Mul, Value::complex(0.0, 1.0), Value::complex(0.0, 1.0)),
        Value::complex(-1.0, 0.0)
    );
    // Booleans take part as 0 and 1.
    assert_eq!(apply(BinaryOp::Add, Value::bool(true), Value::int(1)), Value::int(2));
}

#[test]
fn test_division_by_zero() {
    for (op, left, right) in [
        (BinaryOp::Div, Value::int(1), Value::int(0)),
        (BinaryOp::Div, Value::real(1.0), Value::real(0.0)),
        (BinaryOp::Mod, Value::int(5), Value::int(0)),
        (BinaryOp::Mod, Value::real(5.0), Value::int(0)),
        (BinaryOp::Div, Value::complex(1.0, 1.0), Value::int(0)),
        (BinaryOp::Pow, Value::int(0), Value::int(-2)),
        (BinaryOp::Pow, Value::real(0.0), Value::real(-0.5)),
    ] {
        assert_eq!(apply_err(op, left, right), EvalErrorKind::DivisionByZero);
    }
}

#[test]
fn test_negative_base_with_fractional_exponent_is_complex() {
    let Value::Scalar(Scalar::Complex(c)) = apply(BinaryOp::Pow, Value::real(-4.0), Value::real(0.5))
    else {
        panic!("expected a complex result");
    };
    assert!(c.re.abs() < 1e-12, "{c}");
    assert!((c.im - 2.0).abs() < 1e-12, "{c}");
}

#[test]
fn test_complex_cannot_be_ordered_or_reduced() {
    let err = apply_err(BinaryOp::Lt, Value::complex(1.0, 1.0), Value::complex(2.0, 0.0));
    assert!(matches!(err, EvalErrorKind::TypeMismatch { .. }), "{err:?}");
    let err = apply_err(BinaryOp::Mod, Value::complex(1.0, 1.0), Value::int(2));
    assert!(matches!(err, EvalErrorKind::TypeMismatch { .. }), "{err:?}");
}

#[test]
fn test_comparisons() {
    assert_eq!(apply(BinaryOp::Lt, Value::int(1), Value::int(2)), Value::bool(true));
    assert_eq!(apply(BinaryOp::LtEq, Value::int(2), Value::int(2)), Value::bool(true));
    assert_eq!(apply(BinaryOp::Gt, Value::real(1.5), Value::int(2)), Value::bool(false));
    assert_eq!(apply(BinaryOp::Eq, Value::int(2), Value::real(2.0)), Value::bool(true));
    assert_eq!(
        apply(BinaryOp::Eq, Value::complex(1.0, 2.0), Value::complex(1.0, 2.0)),
        Value::bool(true)
    );
}

#[test]
fn test_nan_is_unequal_to_everything() {
    let nan = || Value::real(f64::NAN);
    assert_eq!(apply(BinaryOp::Eq, nan(), nan()), Value::bool(false));
    assert_eq!(apply(BinaryOp::NotEq, nan(), nan()), Value::bool(true));
    assert_eq!(apply(BinaryOp::Lt, nan(), Value::int(1)), Value::bool(false));
    assert_eq!(apply(BinaryOp::GtEq, nan(), Value::int(1)), Value::bool(false));
}

#[test]
fn test_strings_concatenate_and_compare() {
    assert_eq!(
        apply(BinaryOp::Add, Value::string("foo"), Value::string("bar")),
        Value::string("foobar")
    );
    assert_eq!(apply(BinaryOp::Lt, Value::string("a"), Value::string("b")), Value::bool(true));
    assert_eq!(apply(BinaryOp::Eq, Value::string("a"), Value::string("a")), Value::bool(true));
    assert!(evaluate_binary(BinaryOp::Mul, &Value::string("a"), &Value::string("b")).is_none());
}

#[test]
fn test_unrelated_kinds_are_unequal() {
    assert_eq!(apply(BinaryOp::Eq, Value::int(1), Value::string("1")), Value::bool(false));
    assert_eq!(apply(BinaryOp::NotEq, Value::int(1), Value::string("1")), Value::bool(true));
    assert!(evaluate_binary(BinaryOp::Lt, &Value::int(1), &Value::string("1")).is_none());
    assert!(evaluate_binary(BinaryOp::Add, &Value::int(1), &Value::string("1")).is_none());
}

#[test]
fn test_collections_have_no_builtin_rules() {
    let list = Value::list(vec![Value::int(1)]);
    assert!(evaluate_binary(BinaryOp::Add, &list, &list).is_none());
    assert!(evaluate_binary(BinaryOp::Eq, &list, &Value::int(1)).is_none());
}
