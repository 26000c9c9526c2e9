//! Circular and hyperbolic functions, in radians.
//!
//! Complex arguments use the complex extension of each function. Inverse
//! sine and cosine also go complex for real inputs outside `[-1, 1]`.

use mathlang_runtime::{
    expected_type, type_mismatch, Complex64, Environment, EvalError, EvalResult, Executor,
    Operation, Provider, Scalar, Value,
};

use super::{complex, number};

pub struct TrigonometryProvider;

impl Provider for TrigonometryProvider {
    fn name(&self) -> &'static str {
        "Trigonometry"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Sin", "Sine", "Trigonometry/Basic", sin)
                .with_description("Returns the sine of an angle (in radians)")
                .required("x", "Angle in radians"),
            Operation::new("Cos", "Cosine", "Trigonometry/Basic", cos)
                .with_description("Returns the cosine of an angle (in radians)")
                .required("x", "Angle in radians"),
            Operation::new("Tan", "Tangent", "Trigonometry/Basic", tan)
                .with_description("Returns the tangent of an angle (in radians)")
                .required("x", "Angle in radians"),
            Operation::new("ArcSin", "Arcsine", "Trigonometry/Inverse", arcsin)
                .with_description("Returns the arcsine (inverse sine) in radians")
                .required("x", "A number"),
            Operation::new("ArcCos", "Arccosine", "Trigonometry/Inverse", arccos)
                .with_description("Returns the arccosine (inverse cosine) in radians")
                .required("x", "A number"),
            Operation::new("ArcTan", "Arctangent", "Trigonometry/Inverse", arctan)
                .with_description("Returns the arctangent (inverse tangent) in radians")
                .required("x", "A number"),
            Operation::new("ArcTan2", "Arctangent2", "Trigonometry/Inverse", arctan2)
                .with_description("Returns the arctangent of y/x, using signs to determine quadrant")
                .required("y", "Y coordinate")
                .required("x", "X coordinate"),
            Operation::new("Sinh", "Hyperbolic Sine", "Trigonometry/Hyperbolic", sinh)
                .with_description("Returns the hyperbolic sine")
                .required("x", "A number"),
            Operation::new("Cosh", "Hyperbolic Cosine", "Trigonometry/Hyperbolic", cosh)
                .with_description("Returns the hyperbolic cosine")
                .required("x", "A number"),
            Operation::new("Tanh", "Hyperbolic Tangent", "Trigonometry/Hyperbolic", tanh)
                .with_description("Returns the hyperbolic tangent")
                .required("x", "A number"),
            Operation::new("ToRadians", "Degrees to Radians", "Trigonometry/Conversion", to_radians)
                .with_description("Converts degrees to radians")
                .required("degrees", "Angle in degrees"),
            Operation::new("ToDegrees", "Radians to Degrees", "Trigonometry/Conversion", to_degrees)
                .with_description("Converts radians to degrees")
                .required("radians", "Angle in radians"),
        ]
    }
}

/// Apply `real` to real input and `cplx` to complex input.
fn apply(
    op: &str,
    value: &Value,
    real: fn(f64) -> f64,
    cplx: fn(Complex64) -> Complex64,
) -> EvalResult {
    match value {
        Value::Scalar(Scalar::Complex(c)) => Ok(Value::Scalar(Scalar::Complex(cplx(*c)))),
        other => Ok(Value::real(real(number(op, other)?))),
    }
}

/// Like [`apply`], but real input outside `[-1, 1]` takes the complex branch.
fn apply_bounded(
    op: &str,
    value: &Value,
    real: fn(f64) -> f64,
    cplx: fn(Complex64) -> Complex64,
) -> EvalResult {
    let z = complex(op, value)?;
    let is_real = !matches!(value, Value::Scalar(Scalar::Complex(_)));
    if is_real && (-1.0..=1.0).contains(&z.re) {
        return Ok(Value::real(real(z.re)));
    }
    Ok(Value::Scalar(Scalar::Complex(cplx(z))))
}

fn sin(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply("Sin", &args[0], f64::sin, Complex64::sin)
}

fn cos(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply("Cos", &args[0], f64::cos, Complex64::cos)
}

fn tan(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply("Tan", &args[0], f64::tan, Complex64::tan)
}

fn arcsin(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply_bounded("ArcSin", &args[0], f64::asin, Complex64::asin)
}

fn arccos(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply_bounded("ArcCos", &args[0], f64::acos, Complex64::acos)
}

fn arctan(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply("ArcTan", &args[0], f64::atan, Complex64::atan)
}

fn arctan2(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let y = real_only(&args[0])?;
    let x = real_only(&args[1])?;
    Ok(Value::real(y.atan2(x)))
}

fn real_only(value: &Value) -> Result<f64, EvalError> {
    if matches!(value, Value::Scalar(Scalar::Complex(_))) {
        return Err(type_mismatch("ArcTan2 does not support complex numbers"));
    }
    value
        .as_f64()
        .ok_or_else(|| expected_type("ArcTan2", "a number", &value.type_name()))
}

fn sinh(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply("Sinh", &args[0], f64::sinh, Complex64::sinh)
}

fn cosh(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply("Cosh", &args[0], f64::cosh, Complex64::cosh)
}

fn tanh(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    apply("Tanh", &args[0], f64::tanh, Complex64::tanh)
}

fn to_radians(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(number("ToRadians", &args[0])?.to_radians()))
}

fn to_degrees(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(number("ToDegrees", &args[0])?.to_degrees()))
}
