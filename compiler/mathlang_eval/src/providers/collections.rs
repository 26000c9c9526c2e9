//! List construction, ranges, higher-order transforms, and slicing.
//!
//! Every operation here accepts lists, vectors, and intervals through
//! [`Collection`]. Higher-order operations apply their lambda once per
//! element, in order, each call in its own child of the caller's scope.

use mathlang_ir::BinaryOp;
use mathlang_runtime::{
    argument_error, empty_collection, expected_type, type_mismatch, Environment, EvalResult,
    Executor, Interval, Operation, Provider, Scalar, Value,
};

use super::{integer, lambda_with_arity, Collection};
use crate::operators::evaluate_binary;

pub struct CollectionsProvider;

impl Provider for CollectionsProvider {
    fn name(&self) -> &'static str {
        "Collections"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("List", "Create List", "Collections/Creation", list)
                .with_description("Creates a list from the given arguments")
                .variadic("items", "Items to include in the list"),
            Operation::new("Range", "Create Range", "Collections/Creation", range)
                .with_description("Creates an interval from start to end (exclusive)")
                .required("start", "Start value")
                .required("end", "End value (exclusive)")
                .optional("step", "Step value", Value::int(1)),
            Operation::new("Length", "Length", "Collections/Info", length)
                .with_description("Returns the length of a collection or string")
                .required("collection", "Collection or string"),
            Operation::new("Map", "Map", "Collections/Transform", map)
                .with_description("Applies a function to each element of a collection")
                .required("collection", "The collection to map over")
                .required("func", "Function to apply (lambda)"),
            Operation::new("Filter", "Filter", "Collections/Transform", filter)
                .with_description("Filters a collection based on a predicate function")
                .required("collection", "The collection to filter")
                .required("predicate", "Function returning true/false (lambda)"),
            Operation::new("Reduce", "Reduce", "Collections/Transform", reduce)
                .with_description("Reduces a collection to a single value using an accumulator function")
                .required("collection", "The collection to reduce")
                .required("func", "Function taking (accumulator, item) (lambda)")
                .required("initial", "Initial accumulator value"),
            Operation::new("Sum", "Sum", "Collections/Aggregate", sum)
                .with_description("Returns the sum of all elements in a collection")
                .required("collection", "Collection of numbers"),
            Operation::new("Avg", "Average", "Collections/Aggregate", avg)
                .with_description("Returns the average of all elements in a collection")
                .required("collection", "Collection of numbers"),
            Operation::new("First", "First", "Collections/Access", first)
                .with_description("Returns the first element of a collection")
                .required("collection", "The collection"),
            Operation::new("Last", "Last", "Collections/Access", last)
                .with_description("Returns the last element of a collection")
                .required("collection", "The collection"),
            Operation::new("Take", "Take", "Collections/Slice", take)
                .with_description("Returns the first n elements of a collection")
                .required("collection", "The collection")
                .required("n", "Number of elements to take"),
            Operation::new("Skip", "Skip", "Collections/Slice", skip)
                .with_description("Skips the first n elements and returns the rest")
                .required("collection", "The collection")
                .required("n", "Number of elements to skip"),
        ]
    }
}

fn list(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::list(args.to_vec()))
}

/// Integer bounds and step give an integer interval; any real makes it real.
fn range(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let bounds = (args[0].as_scalar(), args[1].as_scalar(), args[2].as_scalar());
    let interval = match bounds {
        (Some(Scalar::Int(start)), Some(Scalar::Int(end)), Some(Scalar::Int(step))) => {
            if *step == 0 {
                return Err(argument_error("Range step cannot be zero"));
            }
            Interval::integers(*start, *end, *step)
        }
        _ => {
            let (Some(start), Some(end), Some(step)) =
                (args[0].as_f64(), args[1].as_f64(), args[2].as_f64())
            else {
                return Err(type_mismatch("Range requires numeric arguments"));
            };
            if step == 0.0 {
                return Err(argument_error("Range step cannot be zero"));
            }
            Interval::reals(start, end, step)
        }
    };
    Ok(Value::Interval(interval))
}

fn length(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    if let Some(s) = args[0].as_str() {
        return Ok(Value::int(s.chars().count() as i64));
    }
    let collection = Collection::from_value("Length", &args[0])
        .map_err(|_| expected_type("Length", "a collection or string", &args[0].type_name()))?;
    Ok(Value::int(collection.len() as i64))
}

fn map(args: &[Value], env: &Environment, executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Map", &args[0])?;
    let func = lambda_with_arity("Map", &args[1], 1)?;
    let mut results = Vec::with_capacity(collection.len());
    for item in collection.iter() {
        results.push(executor.apply_lambda(func, vec![item], env)?);
    }
    Ok(Value::list(results))
}

fn filter(args: &[Value], env: &Environment, executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Filter", &args[0])?;
    let predicate = lambda_with_arity("Filter", &args[1], 1)?;
    let mut kept = Vec::new();
    for item in collection.iter() {
        if executor.apply_lambda(predicate, vec![item.clone()], env)?.is_truthy() {
            kept.push(item);
        }
    }
    Ok(Value::list(kept))
}

fn reduce(args: &[Value], env: &Environment, executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Reduce", &args[0])?;
    let func = lambda_with_arity("Reduce", &args[1], 2)?;
    let mut acc = args[2].clone();
    for item in collection.iter() {
        acc = executor.apply_lambda(func, vec![acc, item], env)?;
    }
    Ok(acc)
}

/// Running `+` from integer zero, so integer sums stay integers.
fn total(op: &str, collection: Collection<'_>) -> EvalResult {
    let mut acc = Value::int(0);
    for item in collection.iter() {
        acc = evaluate_binary(BinaryOp::Add, &acc, &item)
            .ok_or_else(|| expected_type(op, "numeric elements", &item.type_name()))??;
    }
    Ok(acc)
}

fn sum(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    total("Sum", Collection::from_value("Sum", &args[0])?)
}

fn avg(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Avg", &args[0])?;
    if collection.is_empty() {
        return Err(empty_collection("Avg"));
    }
    let sum = total("Avg", collection)?;
    let n = Value::int(collection.len() as i64);
    evaluate_binary(BinaryOp::Div, &sum, &n)
        .unwrap_or_else(|| Err(expected_type("Avg", "numeric elements", &sum.type_name())))
}

fn first(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("First", &args[0])?;
    collection.get(0).ok_or_else(|| empty_collection("First"))
}

fn last(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Last", &args[0])?;
    collection
        .len()
        .checked_sub(1)
        .and_then(|i| collection.get(i))
        .ok_or_else(|| empty_collection("Last"))
}

fn take(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Take", &args[0])?;
    let n = clamp_count(integer("Take", &args[1])?);
    Ok(collection.slice(0, n))
}

fn skip(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let collection = Collection::from_value("Skip", &args[0])?;
    let n = clamp_count(integer("Skip", &args[1])?);
    Ok(collection.slice(n, collection.len()))
}

/// Negative counts behave like zero.
fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}
