//! Binary operator implementations for the evaluator.
//!
//! Only scalar operands have builtin semantics. Numeric operands are first
//! promoted to a common rung of the integer → real → complex ladder, then
//! dispatched by enum match. Anything without a rule here is reported as
//! `None` so the interpreter can try a registered operation named after the
//! operator symbol.

use std::cmp::Ordering;

use mathlang_ir::BinaryOp;
use mathlang_runtime::{
    binary_type_mismatch, cannot_order, coerce_numeric, division_by_zero, Complex64, EvalResult,
    Numeric, Scalar, Value,
};

/// Evaluate a binary operation with builtin semantics.
///
/// Returns `None` when no builtin rule covers the operand pair.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Option<EvalResult> {
    let (Value::Scalar(a), Value::Scalar(b)) = (left, right) else {
        return None;
    };

    if let Some((x, y)) = coerce_numeric(a, b) {
        return Some(eval_numeric(op, x, y));
    }

    match (a, b) {
        (Scalar::Str(x), Scalar::Str(y)) => eval_string(op, x, y),
        (Scalar::Date(x), Scalar::Date(y)) => compare_ordered(op, x.cmp(y)),
        (Scalar::DateTime(x), Scalar::DateTime(y)) => compare_ordered(op, x.cmp(y)),
        _ => match op {
            BinaryOp::Eq => Some(Ok(Value::bool(false))),
            BinaryOp::NotEq => Some(Ok(Value::bool(true))),
            _ => None,
        },
    }
}

/// Operands already sit on the same rung after coercion.
fn eval_numeric(op: BinaryOp, left: Numeric, right: Numeric) -> EvalResult {
    match (left, right) {
        (Numeric::Int(a), Numeric::Int(b)) => eval_int(op, a, b),
        (Numeric::Real(a), Numeric::Real(b)) => eval_real(op, a, b),
        (a, b) => eval_complex(op, a.to_complex(), b.to_complex()),
    }
}

/// Integer arithmetic; overflow falls back to real arithmetic.
fn eval_int(op: BinaryOp, a: i64, b: i64) -> EvalResult {
    let (x, y) = (a as f64, b as f64);
    match op {
        BinaryOp::Add => Ok(a.checked_add(b).map_or(Value::real(x + y), Value::int)),
        BinaryOp::Sub => Ok(a.checked_sub(b).map_or(Value::real(x - y), Value::int)),
        BinaryOp::Mul => Ok(a.checked_mul(b).map_or(Value::real(x * y), Value::int)),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Ok(Value::real(x / y))
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(division_by_zero());
            }
            // i64::MIN % -1 overflows; the true remainder is 0
            let r = a.checked_rem(b).unwrap_or(0);
            if r != 0 && (r < 0) != (b < 0) {
                Ok(Value::int(r + b))
            } else {
                Ok(Value::int(r))
            }
        }
        BinaryOp::Pow => {
            if b < 0 {
                if a == 0 {
                    return Err(division_by_zero());
                }
                return Ok(Value::real(x.powf(y)));
            }
            let exact = u32::try_from(b).ok().and_then(|e| a.checked_pow(e));
            Ok(exact.map_or(Value::real(x.powf(y)), Value::int))
        }
        _ => Ok(Value::bool(ordering_matches(op, a.partial_cmp(&b)))),
    }
}

fn eval_real(op: BinaryOp, a: f64, b: f64) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::real(a + b)),
        BinaryOp::Sub => Ok(Value::real(a - b)),
        BinaryOp::Mul => Ok(Value::real(a * b)),
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Ok(Value::real(a / b))
        }
        BinaryOp::Mod => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) {
                Ok(Value::real(r + b))
            } else {
                Ok(Value::real(r))
            }
        }
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(division_by_zero());
            }
            if a < 0.0 && b.fract() != 0.0 && b.is_finite() {
                let c = Complex64::new(a, 0.0).powf(b);
                return Ok(Value::Scalar(Scalar::Complex(c)));
            }
            Ok(Value::real(a.powf(b)))
        }
        _ => Ok(Value::bool(ordering_matches(op, a.partial_cmp(&b)))),
    }
}

fn eval_complex(op: BinaryOp, a: Complex64, b: Complex64) -> EvalResult {
    let zero = Complex64::new(0.0, 0.0);
    let wrap = |c: Complex64| Ok(Value::Scalar(Scalar::Complex(c)));
    match op {
        BinaryOp::Add => wrap(a + b),
        BinaryOp::Sub => wrap(a - b),
        BinaryOp::Mul => wrap(a * b),
        BinaryOp::Div => {
            if b == zero {
                return Err(division_by_zero());
            }
            wrap(a / b)
        }
        BinaryOp::Mod => {
            if b == zero {
                return Err(division_by_zero());
            }
            Err(binary_type_mismatch("%", "Complex", "Complex"))
        }
        BinaryOp::Pow => {
            if a != zero {
                return wrap(a.powc(b));
            }
            if b == zero {
                return wrap(Complex64::new(1.0, 0.0));
            }
            if b.re < 0.0 || b.im != 0.0 {
                return Err(division_by_zero());
            }
            wrap(zero)
        }
        BinaryOp::Eq => Ok(Value::bool(a == b)),
        BinaryOp::NotEq => Ok(Value::bool(a != b)),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            Err(cannot_order(op.as_symbol(), "Complex"))
        }
    }
}

fn eval_string(op: BinaryOp, a: &str, b: &str) -> Option<EvalResult> {
    if op == BinaryOp::Add {
        let mut joined = String::with_capacity(a.len() + b.len());
        joined.push_str(a);
        joined.push_str(b);
        return Some(Ok(Value::string(joined)));
    }
    compare_ordered(op, a.cmp(b))
}

/// Comparison on a totally ordered kind; `None` for arithmetic operators.
fn compare_ordered(op: BinaryOp, ordering: Ordering) -> Option<EvalResult> {
    if !op.is_comparison() {
        return None;
    }
    Some(Ok(Value::bool(ordering_matches(op, Some(ordering)))))
}

/// `None` ordering (NaN) satisfies only `!=`.
fn ordering_matches(op: BinaryOp, ordering: Option<Ordering>) -> bool {
    match op {
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        BinaryOp::NotEq => ordering != Some(Ordering::Equal),
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::GtEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        _ => false,
    }
}
