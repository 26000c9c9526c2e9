//! Descriptive statistics over numeric collections.

use mathlang_runtime::{
    argument_error, Environment, EvalError, EvalResult, Executor, Operation, Provider, Value,
};

use super::{number, Collection};

pub struct StatisticsProvider;

impl Provider for StatisticsProvider {
    fn name(&self) -> &'static str {
        "Statistics"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Mean", "Mean", "Statistics/Central", mean)
                .with_description("Returns the arithmetic mean of a list of numbers")
                .required("list", "List of numbers"),
            Operation::new("Median", "Median", "Statistics/Central", median)
                .with_description("Returns the median value of a list of numbers")
                .required("list", "List of numbers"),
            Operation::new("Mode", "Mode", "Statistics/Central", mode)
                .with_description("Returns the most frequent value(s) in a list")
                .required("list", "List of values"),
            Operation::new("StdDev", "Standard Deviation", "Statistics/Spread", std_dev)
                .with_description("Returns the sample standard deviation")
                .required("list", "List of numbers"),
            Operation::new("PopStdDev", "Population Std Dev", "Statistics/Spread", pop_std_dev)
                .with_description("Returns the population standard deviation")
                .required("list", "List of numbers"),
            Operation::new("Variance", "Variance", "Statistics/Spread", variance)
                .with_description("Returns the sample variance")
                .required("list", "List of numbers"),
            Operation::new("PopVariance", "Population Variance", "Statistics/Spread", pop_variance)
                .with_description("Returns the population variance")
                .required("list", "List of numbers"),
            Operation::new("Percentile", "Percentile", "Statistics/Distribution", percentile)
                .with_description("Returns the nth percentile of a list of numbers")
                .required("list", "List of numbers")
                .required("n", "Percentile (0-100)"),
            Operation::new("Quartiles", "Quartiles", "Statistics/Distribution", quartiles)
                .with_description("Returns the quartiles [Q1, Q2, Q3] of a list")
                .required("list", "List of numbers"),
            Operation::new("IQR", "Interquartile Range", "Statistics/Spread", iqr)
                .with_description("Returns the interquartile range (Q3 - Q1)")
                .required("list", "List of numbers"),
            Operation::new("Covariance", "Covariance", "Statistics/Relationship", covariance)
                .with_description("Returns the sample covariance of two lists")
                .required("list1", "First list of numbers")
                .required("list2", "Second list of numbers"),
            Operation::new("Correlation", "Correlation", "Statistics/Relationship", correlation)
                .with_description("Returns the Pearson correlation coefficient of two lists")
                .required("list1", "First list of numbers")
                .required("list2", "Second list of numbers"),
            Operation::new(
                "LinearRegression",
                "Linear Regression",
                "Statistics/Regression",
                linear_regression,
            )
            .with_description("Fits y = slope * x + intercept; returns [slope, intercept, r_squared]")
            .required("x_values", "Independent variable")
            .required("y_values", "Dependent variable"),
        ]
    }
}

/// Numeric contents of the collection argument.
fn values(op: &str, value: &Value) -> Result<Vec<f64>, EvalError> {
    Collection::from_value(op, value)?.numbers(op)
}

fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

fn mean(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = values("Mean", &args[0])?;
    if values.is_empty() {
        return Err(argument_error("Cannot calculate mean of empty list"));
    }
    Ok(Value::real(values.iter().sum::<f64>() / values.len() as f64))
}

fn median(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = sorted(values("Median", &args[0])?);
    let n = values.len();
    if n == 0 {
        return Err(argument_error("Cannot calculate median of empty list"));
    }
    let mid = n / 2;
    if n % 2 == 0 {
        Ok(Value::real((values[mid - 1] + values[mid]) / 2.0))
    } else {
        Ok(Value::real(values[mid]))
    }
}

/// Items compare by their displayed form. Ties return every tied item, in
/// first-seen order.
fn mode(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Mode", &args[0])?;
    if collection.is_empty() {
        return Err(argument_error("Cannot calculate mode of empty collection"));
    }

    let mut counts: Vec<(String, Value, usize)> = Vec::new();
    for item in collection.iter() {
        let key = item.display();
        match counts.iter_mut().find(|(k, _, _)| *k == key) {
            Some(entry) => entry.2 += 1,
            None => counts.push((key, item, 1)),
        }
    }

    let best = counts.iter().map(|(_, _, c)| *c).max().unwrap_or(0);
    let mut modes: Vec<Value> = counts
        .into_iter()
        .filter(|(_, _, c)| *c == best)
        .map(|(_, item, _)| item)
        .collect();
    if modes.len() == 1 {
        return Ok(modes.remove(0));
    }
    Ok(Value::list(modes))
}

/// Welford's single-pass variance.
fn welford_variance(values: &[f64], sample: bool) -> Result<f64, EvalError> {
    let n = values.len();
    if n < 2 {
        return Err(argument_error("Need at least 2 values to calculate variance"));
    }
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (x - mean);
    }
    let divisor = if sample { n - 1 } else { n };
    Ok(m2 / divisor as f64)
}

fn variance(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = values("Variance", &args[0])?;
    Ok(Value::real(welford_variance(&values, true)?))
}

fn pop_variance(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = values("PopVariance", &args[0])?;
    Ok(Value::real(welford_variance(&values, false)?))
}

fn std_dev(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = values("StdDev", &args[0])?;
    Ok(Value::real(welford_variance(&values, true)?.sqrt()))
}

fn pop_std_dev(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = values("PopStdDev", &args[0])?;
    Ok(Value::real(welford_variance(&values, false)?.sqrt()))
}

/// Linear interpolation between closest ranks. `values` must be sorted and
/// non-empty.
fn percentile_of_sorted(values: &[f64], p: f64) -> f64 {
    let n = values.len();
    let idx = (p / 100.0) * (n - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = lower + 1;
    if upper >= n {
        return values[n - 1];
    }
    let weight = idx - lower as f64;
    values[lower] * (1.0 - weight) + values[upper] * weight
}

fn percentile(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = sorted(values("Percentile", &args[0])?);
    if values.is_empty() {
        return Err(argument_error("Cannot calculate percentile of empty list"));
    }
    let p = number("Percentile", &args[1])?;
    if !(0.0..=100.0).contains(&p) {
        return Err(argument_error(format!(
            "Percentile must be between 0 and 100, got {}",
            Value::real(p)
        )));
    }
    Ok(Value::real(percentile_of_sorted(&values, p)))
}

fn sorted_nonempty(op: &str, value: &Value, what: &str) -> Result<Vec<f64>, EvalError> {
    let values = sorted(values(op, value)?);
    if values.is_empty() {
        return Err(argument_error(format!("Cannot calculate {what} of empty list")));
    }
    Ok(values)
}

fn quartiles(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = sorted_nonempty("Quartiles", &args[0], "quartiles")?;
    Ok(Value::list(
        [25.0, 50.0, 75.0]
            .into_iter()
            .map(|p| Value::real(percentile_of_sorted(&values, p)))
            .collect(),
    ))
}

fn iqr(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = sorted_nonempty("IQR", &args[0], "IQR")?;
    Ok(Value::real(
        percentile_of_sorted(&values, 75.0) - percentile_of_sorted(&values, 25.0),
    ))
}

/// Single-pass co-moments of paired samples.
#[derive(Default)]
struct Comoments {
    n: usize,
    mean_x: f64,
    mean_y: f64,
    /// Co-moment, the running sum of `(x - mean_x) * (y - mean_y)`.
    c: f64,
    m2_x: f64,
    m2_y: f64,
}

impl Comoments {
    fn of(op: &str, xs: &Value, ys: &Value, purpose: &str) -> Result<Self, EvalError> {
        let xs = values(op, xs)?;
        let ys = values(op, ys)?;
        if xs.len() != ys.len() {
            return Err(argument_error(format!(
                "Lists must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(argument_error(format!("Need at least 2 values {purpose}")));
        }
        let mut acc = Comoments::default();
        for (x, y) in xs.into_iter().zip(ys) {
            acc.n += 1;
            let n = acc.n as f64;
            let dx = x - acc.mean_x;
            acc.mean_x += dx / n;
            let dy = y - acc.mean_y;
            acc.mean_y += dy / n;
            acc.c += dx * (y - acc.mean_y);
            acc.m2_x += dx * (x - acc.mean_x);
            acc.m2_y += dy * (y - acc.mean_y);
        }
        Ok(acc)
    }
}

fn covariance(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let m = Comoments::of("Covariance", &args[0], &args[1], "to calculate covariance")?;
    Ok(Value::real(m.c / (m.n - 1) as f64))
}

/// Zero when either series is constant.
fn correlation(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let m = Comoments::of("Correlation", &args[0], &args[1], "to calculate correlation")?;
    if m.m2_x == 0.0 || m.m2_y == 0.0 {
        return Ok(Value::real(0.0));
    }
    Ok(Value::real(m.c / (m.m2_x * m.m2_y).sqrt()))
}

fn linear_regression(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let m = Comoments::of("LinearRegression", &args[0], &args[1], "for linear regression")?;
    if m.m2_x == 0.0 {
        return Err(argument_error(
            "Cannot perform regression: all x values are identical",
        ));
    }
    let slope = m.c / m.m2_x;
    let intercept = m.mean_y - slope * m.mean_x;
    let r_squared = if m.m2_y == 0.0 {
        1.0
    } else {
        (m.c * m.c) / (m.m2_x * m.m2_y)
    };
    Ok(Value::list(vec![
        Value::real(slope),
        Value::real(intercept),
        Value::real(r_squared),
    ]))
}
