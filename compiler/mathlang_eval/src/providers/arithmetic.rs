//! Elementary numeric functions.

use mathlang_runtime::{
    argument_error, expected_type, Complex64, Environment, EvalResult, Executor, Operation,
    Provider, Scalar, Value,
};
use rand::Rng;

use super::{integer, number};

pub struct ArithmeticProvider;

impl Provider for ArithmeticProvider {
    fn name(&self) -> &'static str {
        "Arithmetic"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Abs", "Absolute Value", "Arithmetic/Basic", abs)
                .with_description("Returns the absolute value of a number")
                .required("x", "A number"),
            Operation::new("Sqrt", "Square Root", "Arithmetic/Basic", sqrt)
                .with_description("Returns the square root of a number")
                .required("x", "A number"),
            Operation::new("Floor", "Floor", "Arithmetic/Rounding", floor)
                .with_description("Returns the largest integer less than or equal to x")
                .required("x", "A number"),
            Operation::new("Ceiling", "Ceiling", "Arithmetic/Rounding", ceiling)
                .with_description("Returns the smallest integer greater than or equal to x")
                .required("x", "A number"),
            Operation::new("Round", "Round", "Arithmetic/Rounding", round)
                .with_description("Rounds a number to the nearest integer or specified decimal places")
                .required("x", "A number")
                .optional("decimals", "Number of decimal places", Value::int(0)),
            Operation::new("Log", "Natural Logarithm", "Arithmetic/Logarithms", log)
                .with_description("Returns the natural logarithm of a number")
                .required("x", "A positive number"),
            Operation::new("Log10", "Base-10 Logarithm", "Arithmetic/Logarithms", log10)
                .with_description("Returns the base-10 logarithm of a number")
                .required("x", "A positive number"),
            Operation::new("Exp", "Exponential", "Arithmetic/Exponential", exp)
                .with_description("Returns e raised to the power of x")
                .required("x", "The exponent"),
            Operation::new("Min", "Minimum", "Arithmetic/Comparison", min)
                .with_description("Returns the smallest of the given numbers")
                .variadic("values", "Numbers to compare"),
            Operation::new("Max", "Maximum", "Arithmetic/Comparison", max)
                .with_description("Returns the largest of the given numbers")
                .variadic("values", "Numbers to compare"),
            Operation::new("Random", "Random", "Arithmetic/Random", random)
                .with_description(
                    "Returns a random number. With no args: [0, 1). With one arg n: integer [0, n). With two args a, b: [a, b).",
                )
                .optional_absent("a", "Upper bound, or lower bound when b is given")
                .optional_absent("b", "Upper bound"),
        ]
    }
}

fn complex_value(c: Complex64) -> Value {
    Value::Scalar(Scalar::Complex(c))
}

/// Integral reals inside the `i64` range become integers.
fn integral(r: f64) -> Value {
    if r.is_finite() && r >= i64::MIN as f64 && r < i64::MAX as f64 {
        Value::int(r as i64)
    } else {
        Value::real(r)
    }
}

fn abs(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    match &args[0] {
        Value::Scalar(Scalar::Int(n)) => Ok(n.checked_abs().map_or(Value::real((*n as f64).abs()), Value::int)),
        Value::Scalar(Scalar::Complex(c)) => Ok(Value::real(c.norm())),
        other => Ok(Value::real(number("Abs", other)?.abs())),
    }
}

/// Negative input gives the principal complex root.
fn sqrt(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    if let Value::Scalar(Scalar::Complex(c)) = &args[0] {
        return Ok(complex_value(c.sqrt()));
    }
    let x = number("Sqrt", &args[0])?;
    if x < 0.0 {
        return Ok(complex_value(Complex64::new(x, 0.0).sqrt()));
    }
    Ok(Value::real(x.sqrt()))
}

fn floor(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    if let Some(n) = args[0].as_int() {
        return Ok(Value::int(n));
    }
    Ok(integral(number("Floor", &args[0])?.floor()))
}

fn ceiling(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    if let Some(n) = args[0].as_int() {
        return Ok(Value::int(n));
    }
    Ok(integral(number("Ceiling", &args[0])?.ceil()))
}

/// Half away from zero. Zero decimals gives an integer.
fn round(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let decimals = integer("Round", &args[1])?;
    if let Some(n) = args[0].as_int() {
        if decimals >= 0 {
            return Ok(Value::int(n));
        }
    }
    let x = number("Round", &args[0])?;
    if decimals == 0 {
        return Ok(integral(x.round()));
    }
    let exponent = i32::try_from(decimals.clamp(-308, 308)).unwrap_or(0);
    let scale = 10f64.powi(exponent);
    Ok(Value::real((x * scale).round() / scale))
}

fn log(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    if let Value::Scalar(Scalar::Complex(c)) = &args[0] {
        return Ok(complex_value(c.ln()));
    }
    let x = number("Log", &args[0])?;
    if x <= 0.0 {
        return Err(argument_error("Log requires a positive number"));
    }
    Ok(Value::real(x.ln()))
}

fn log10(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    if let Value::Scalar(Scalar::Complex(c)) = &args[0] {
        return Ok(complex_value(c.log10()));
    }
    let x = number("Log10", &args[0])?;
    if x <= 0.0 {
        return Err(argument_error("Log10 requires a positive number"));
    }
    Ok(Value::real(x.log10()))
}

fn exp(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    if let Value::Scalar(Scalar::Complex(c)) = &args[0] {
        return Ok(complex_value(c.exp()));
    }
    Ok(Value::real(number("Exp", &args[0])?.exp()))
}

fn min(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    extremum("Min", args, |candidate, best| candidate < best)
}

fn max(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    extremum("Max", args, |candidate, best| candidate > best)
}

/// Returns the winning argument itself, so integers stay integers.
fn extremum(op: &str, args: &[Value], better: fn(f64, f64) -> bool) -> EvalResult {
    let mut best: Option<(&Value, f64)> = None;
    for arg in args {
        let x = arg
            .as_f64()
            .ok_or_else(|| expected_type(op, "numbers", &arg.type_name()))?;
        if best.map_or(true, |(_, b)| better(x, b)) {
            best = Some((arg, x));
        }
    }
    best.map(|(value, _)| value.clone())
        .ok_or_else(|| argument_error(format!("{op} requires at least one argument")))
}

fn random(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let mut rng = rand::thread_rng();
    match args {
        [] => Ok(Value::real(rng.gen::<f64>())),
        [n] => {
            let n = number("Random", n)?.trunc();
            if n < 1.0 {
                return Err(argument_error(format!(
                    "Random upper bound must be at least 1, got {}",
                    Value::real(n)
                )));
            }
            let upper = if n < i64::MAX as f64 { n as i64 } else { i64::MAX };
            Ok(Value::int(rng.gen_range(0..upper)))
        }
        [a, b, ..] => {
            let a = number("Random", a)?;
            let b = number("Random", b)?;
            if !a.is_finite() || !b.is_finite() {
                return Err(argument_error("Random bounds must be finite"));
            }
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            if lo == hi {
                return Ok(Value::real(lo));
            }
            Ok(Value::real(rng.gen_range(lo..hi)))
        }
    }
}
