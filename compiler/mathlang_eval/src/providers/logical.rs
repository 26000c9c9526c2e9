//! Boolean logic and the lazy conditional.

use mathlang_runtime::{Environment, EvalResult, Executor, Operation, Provider, Scalar, Value};

pub struct LogicalProvider;

impl Provider for LogicalProvider {
    fn name(&self) -> &'static str {
        "Logical"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("And", "Logical And", "Logical/Boolean", and)
                .with_description("Returns true if all arguments are truthy")
                .variadic("values", "Values to test"),
            Operation::new("Or", "Logical Or", "Logical/Boolean", or)
                .with_description("Returns true if any argument is truthy")
                .variadic("values", "Values to test"),
            Operation::new("Not", "Logical Not", "Logical/Boolean", not)
                .with_description("Returns the logical negation of a value")
                .required("value", "Value to negate"),
            Operation::new("If", "Conditional", "Logical/Control", if_)
                .with_description("Returns then_value if condition is truthy, else else_value")
                .required("condition", "Condition to test")
                .required("then_value", "Value if true")
                .required("else_value", "Value if false")
                .lazy(&[1, 2]),
            Operation::new("IsNaN", "Is Not a Number", "Logical/Checks", is_nan)
                .with_description("Returns true if the value is NaN")
                .required("value", "Value to check"),
            Operation::new("IsInf", "Is Infinite", "Logical/Checks", is_inf)
                .with_description("Returns true if the value is positive or negative infinity")
                .required("value", "Value to check"),
        ]
    }
}

fn and(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::bool(args.iter().all(Value::is_truthy)))
}

fn or(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::bool(args.iter().any(Value::is_truthy)))
}

fn not(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::bool(!args[0].is_truthy()))
}

/// Forces exactly one branch.
fn if_(args: &[Value], _env: &Environment, executor: &mut dyn Executor) -> EvalResult {
    let branch = if args[0].is_truthy() { &args[1] } else { &args[2] };
    executor.force(branch)
}

fn is_nan(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::bool(real_part(&args[0]).is_some_and(f64::is_nan)))
}

fn is_inf(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::bool(real_part(&args[0]).is_some_and(f64::is_infinite)))
}

/// Integers and reals only; anything else is never NaN or infinite.
fn real_part(value: &Value) -> Option<f64> {
    match value {
        Value::Scalar(Scalar::Int(n)) => Some(*n as f64),
        Value::Scalar(Scalar::Real(r)) => Some(*r),
        _ => None,
    }
}
