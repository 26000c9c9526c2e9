//! Zero-argument constants, reached as `[[NAME]]`.

use std::f64::consts;

use mathlang_runtime::{Environment, EvalResult, Executor, Operation, Provider, Value};

/// Golden ratio, (1 + √5) / 2.
const PHI: f64 = 1.618_033_988_749_895;

pub struct ConstantsProvider;

impl Provider for ConstantsProvider {
    fn name(&self) -> &'static str {
        "Constants"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("PI", "Pi", "Constants/Mathematical", pi)
                .with_description("The mathematical constant π (3.14159...)"),
            Operation::new("E", "Euler's Number", "Constants/Mathematical", e)
                .with_description("The mathematical constant e (2.71828...)"),
            Operation::new("PHI", "Golden Ratio", "Constants/Mathematical", phi)
                .with_description("The golden ratio φ (1.61803...)"),
            Operation::new("TAU", "Tau", "Constants/Mathematical", tau)
                .with_description("The mathematical constant τ = 2π (6.28318...)"),
            Operation::new("INF", "Infinity", "Constants/Special", inf)
                .with_description("Positive infinity"),
            Operation::new("NAN", "Not a Number", "Constants/Special", nan)
                .with_description("Not a Number (NaN)"),
            Operation::new("HoursInDay", "Hours in a Day", "Constants/Time", hours_in_day)
                .with_description("Number of hours in a day (24)"),
            Operation::new("MinutesInHour", "Minutes in an Hour", "Constants/Time", sixty)
                .with_description("Number of minutes in an hour (60)"),
            Operation::new("SecondsInMinute", "Seconds in a Minute", "Constants/Time", sixty)
                .with_description("Number of seconds in a minute (60)"),
            Operation::new("SpeedOfLight", "Speed of Light", "Constants/Physics", speed_of_light)
                .with_description("Speed of light in m/s (299792458)"),
            Operation::new(
                "GravitationalConstant",
                "Gravitational Constant",
                "Constants/Physics",
                gravitational_constant,
            )
            .with_description("Gravitational constant G in m³/(kg·s²)"),
            Operation::new("PlanckConstant", "Planck Constant", "Constants/Physics", planck_constant)
                .with_description("Planck constant h in J·s"),
        ]
    }
}

fn pi(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(consts::PI))
}

fn e(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(consts::E))
}

fn phi(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(PHI))
}

fn tau(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(consts::TAU))
}

fn inf(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(f64::INFINITY))
}

fn nan(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(f64::NAN))
}

fn hours_in_day(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::int(24))
}

fn sixty(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::int(60))
}

fn speed_of_light(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::int(299_792_458))
}

fn gravitational_constant(
    _args: &[Value],
    _env: &Environment,
    _executor: &mut dyn Executor,
) -> EvalResult {
    Ok(Value::real(6.674_30e-11))
}

fn planck_constant(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::real(6.626_070_15e-34))
}
