//! Unary operator implementations for the evaluator.

use mathlang_ir::UnaryOp;
use mathlang_runtime::{cannot_negate, EvalResult, Scalar, Value};

/// Evaluate a unary operation. Only numeric (and boolean) scalars negate.
pub fn evaluate_unary(op: UnaryOp, value: &Value) -> EvalResult {
    match (op, value) {
        (UnaryOp::Neg, Value::Scalar(scalar)) => negate(scalar),
        (UnaryOp::Neg, other) => Err(cannot_negate(&other.type_name())),
    }
}

fn negate(scalar: &Scalar) -> EvalResult {
    match scalar {
        Scalar::Bool(b) => Ok(Value::int(-i64::from(*b))),
        Scalar::Int(n) => Ok(n
            .checked_neg()
            .map_or(Value::real(-(*n as f64)), Value::int)),
        Scalar::Real(r) => Ok(Value::real(-r)),
        Scalar::Complex(c) => Ok(Value::Scalar(Scalar::Complex(-*c))),
        Scalar::Str(_) | Scalar::Date(_) | Scalar::DateTime(_) => {
            Err(cannot_negate(scalar.type_name()))
        }
    }
}
