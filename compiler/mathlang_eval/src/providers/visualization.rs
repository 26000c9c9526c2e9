//! Plot records for the host to render.
//!
//! Function plots sample their lambda on an evenly spaced grid. A sample
//! that fails to evaluate, or evaluates to something other than a real
//! number, becomes NaN; the plot itself still succeeds.

use mathlang_ir::LambdaExpr;
use mathlang_runtime::{
    argument_error, expected_type, type_mismatch, Environment, EvalError, EvalResult, Executor,
    HistogramData, Operation, PlotData2D, PlotData3D, Provider, ScatterData, Value,
};

use super::{count, lambda, lambda_with_arity, number, title, Collection};

pub struct VisualizationProvider;

impl Provider for VisualizationProvider {
    fn name(&self) -> &'static str {
        "Visualization"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Plot", "Plot 2D", "Visualization/2D", plot)
                .with_description("Creates a 2D plot from a function or data points")
                .required("func_or_x", "Lambda function or x values")
                .optional_absent("x_min_or_y", "X minimum (for function) or y values (for data)")
                .optional_absent("x_max", "X maximum (for function)")
                .optional("points", "Number of points to plot", Value::int(100)),
            Operation::new("PlotData", "Plot Data Points", "Visualization/2D", plot_data)
                .with_description("Creates a 2D plot from x and y data lists")
                .required("x_values", "List of x values")
                .required("y_values", "List of y values")
                .optional("title", "Plot title", Value::string("")),
            Operation::new("Plot3D", "Plot 3D Surface", "Visualization/3D", plot3d)
                .with_description("Creates a 3D surface plot from a function")
                .required("func", "Lambda function f(x, y)")
                .required("x_min", "X minimum")
                .required("x_max", "X maximum")
                .required("y_min", "Y minimum")
                .required("y_max", "Y maximum")
                .optional("points", "Number of points per axis", Value::int(30)),
            Operation::new("Histogram", "Histogram", "Visualization/Statistical", histogram)
                .with_description("Creates a histogram from data")
                .required("data", "List of numeric values")
                .optional("bins", "Number of bins", Value::int(10))
                .optional("title", "Plot title", Value::string("")),
            Operation::new("Scatter", "Scatter Plot", "Visualization/2D", scatter)
                .with_description("Creates a scatter plot from x and y data")
                .required("x_values", "List of x values")
                .required("y_values", "List of y values")
                .optional("title", "Plot title", Value::string("")),
            Operation::new("LinePlot", "Line Plot", "Visualization/2D", line_plot)
                .with_description("Creates a line plot connecting data points")
                .required("x_values", "List of x values")
                .required("y_values", "List of y values")
                .optional("title", "Plot title", Value::string("")),
            Operation::new("MultiPlot", "Multiple Plots", "Visualization/2D", multi_plot)
                .with_description("Creates multiple function plots on the same axes")
                .required("functions", "List of lambda functions")
                .required("x_min", "X minimum")
                .required("x_max", "X maximum")
                .optional("points", "Number of points", Value::int(100)),
        ]
    }
}

fn series(op: &str, value: &Value) -> Result<Vec<f64>, EvalError> {
    Collection::from_value(op, value)?.numbers(op)
}

fn paired(op: &str, xs: &Value, ys: &Value) -> Result<(Vec<f64>, Vec<f64>), EvalError> {
    let xs = series(op, xs)?;
    let ys = series(op, ys)?;
    if xs.len() != ys.len() {
        return Err(argument_error(format!(
            "x and y must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    Ok((xs, ys))
}

fn axis_bounds(op: &str, axis: &str, lo: &Value, hi: &Value) -> Result<(f64, f64), EvalError> {
    let lo = number(op, lo)?;
    let hi = number(op, hi)?;
    if lo >= hi {
        return Err(argument_error(format!(
            "{axis}_min ({}) must be less than {axis}_max ({})",
            Value::real(lo),
            Value::real(hi)
        )));
    }
    Ok((lo, hi))
}

fn point_count(op: &str, value: &Value) -> Result<usize, EvalError> {
    let points = count(op, value)?;
    if points < 2 {
        return Err(argument_error("Need at least 2 points"));
    }
    usize::try_from(points).map_err(|_| argument_error(format!("Too many points: {points}")))
}

/// `points` evenly spaced values from `lo` to `hi`, both ends included.
fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    let step = (hi - lo) / (points - 1) as f64;
    (0..points).map(|i| lo + i as f64 * step).collect()
}

fn sample(
    executor: &mut dyn Executor,
    func: &LambdaExpr,
    args: Vec<Value>,
    env: &Environment,
) -> f64 {
    match executor.apply_lambda(func, args, env) {
        Ok(v) => v.as_f64().unwrap_or(f64::NAN),
        Err(_) => f64::NAN,
    }
}

fn sample_curve(
    executor: &mut dyn Executor,
    func: &LambdaExpr,
    xs: &[f64],
    env: &Environment,
) -> Vec<f64> {
    xs.iter()
        .map(|&x| sample(executor, func, vec![Value::real(x)], env))
        .collect()
}

/// `Plot(f, x_min, x_max, points)` or `Plot(xs, ys)`.
fn plot(args: &[Value], env: &Environment, executor: &mut dyn Executor) -> EvalResult {
    match &args[0] {
        Value::Lambda(_) => {
            let func = lambda_with_arity("Plot", &args[0], 1)?;
            let (Some(lo), Some(hi)) = (args.get(1), args.get(2)) else {
                return Err(argument_error("Plot with function requires x_min and x_max"));
            };
            let (lo, hi) = axis_bounds("Plot", "x", lo, hi)?;
            let points = point_count("Plot", &args[3])?;
            let xs = linspace(lo, hi, points);
            let ys = sample_curve(executor, func, &xs, env);
            Ok(Value::plot2d(PlotData2D::new(xs, ys)))
        }
        Value::List(_) | Value::Vector(_) | Value::Interval(_) => {
            let Some(ys) = args.get(1) else {
                return Err(argument_error(
                    "Plot with data requires x_values and y_values lists",
                ));
            };
            let (xs, ys) = paired("Plot", &args[0], ys)?;
            Ok(Value::plot2d(PlotData2D::new(xs, ys)))
        }
        other => Err(type_mismatch(format!(
            "Plot expects a function or list, got {}",
            other.type_name()
        ))),
    }
}

fn plot_data(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let (xs, ys) = paired("PlotData", &args[0], &args[1])?;
    let title = title("PlotData", args, 2)?;
    Ok(Value::plot2d(PlotData2D::new(xs, ys).with_title(title)))
}

fn line_plot(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let (xs, ys) = paired("LinePlot", &args[0], &args[1])?;
    let title = title("LinePlot", args, 2)?;
    Ok(Value::plot2d(PlotData2D::new(xs, ys).with_title(title)))
}

/// Rows run over y, columns over x.
fn plot3d(args: &[Value], env: &Environment, executor: &mut dyn Executor) -> EvalResult {
    let func = lambda_with_arity("Plot3D", &args[0], 2)?;
    let (x_lo, x_hi) = axis_bounds("Plot3D", "x", &args[1], &args[2])?;
    let (y_lo, y_hi) = axis_bounds("Plot3D", "y", &args[3], &args[4])?;
    let points = point_count("Plot3D", &args[5])?;

    let xs = linspace(x_lo, x_hi, points);
    let ys = linspace(y_lo, y_hi, points);
    let zs = ys
        .iter()
        .map(|&y| {
            xs.iter()
                .map(|&x| sample(executor, func, vec![Value::real(x), Value::real(y)], env))
                .collect()
        })
        .collect();
    Ok(Value::plot3d(PlotData3D::new(xs, ys, zs)))
}

fn histogram(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let values = series("Histogram", &args[0])?;
    let bins = count("Histogram", &args[1])?;
    if bins < 1 {
        return Err(argument_error("bins must be positive"));
    }
    if values.is_empty() {
        return Err(argument_error("data cannot be empty"));
    }
    let bins = usize::try_from(bins).map_err(|_| argument_error(format!("Too many bins: {bins}")))?;
    let mut data = HistogramData::new(values, bins);
    data.title = title("Histogram", args, 2)?;
    Ok(Value::histogram(data))
}

fn scatter(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let (xs, ys) = paired("Scatter", &args[0], &args[1])?;
    let mut data = ScatterData::new(xs, ys);
    data.title = title("Scatter", args, 2)?;
    Ok(Value::scatter(data))
}

/// One plot per function, all sharing the same x grid.
fn multi_plot(args: &[Value], env: &Environment, executor: &mut dyn Executor) -> EvalResult {
    let functions = match &args[0] {
        Value::List(items) => items,
        other => return Err(expected_type("MultiPlot", "a list of lambdas", &other.type_name())),
    };
    let (lo, hi) = axis_bounds("MultiPlot", "x", &args[1], &args[2])?;
    let points = point_count("MultiPlot", &args[3])?;
    let xs = linspace(lo, hi, points);

    let mut plots = Vec::with_capacity(functions.len());
    for func in functions.iter() {
        let func = lambda("MultiPlot", func)?;
        if func.arity() != 1 {
            return Err(argument_error(format!(
                "MultiPlot functions must take 1 argument, got {}",
                func.arity()
            )));
        }
        let ys = sample_curve(executor, func, &xs, env);
        plots.push(Value::plot2d(PlotData2D::new(xs.clone(), ys)));
    }
    Ok(Value::list(plots))
}
