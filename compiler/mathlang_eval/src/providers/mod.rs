//! Builtin operation providers.
//!
//! One module per provider. Bodies get their arguments after the call-site
//! protocol has run (arity checked, defaults filled, lazy positions
//! thunked), so required positions can be indexed directly. The helpers
//! below do the per-argument type checks shared across providers.

mod arithmetic;
mod collections;
mod combinatorics;
mod constants;
mod datetime;
mod logical;
mod statistics;
mod strings;
mod trigonometry;
mod vectors;
mod visualization;

use mathlang_ir::LambdaExpr;
use mathlang_runtime::{
    argument_error, expected_type, Complex64, EvalError, Interval, OperationRegistry, Scalar,
    Value,
};

pub use arithmetic::ArithmeticProvider;
pub use collections::CollectionsProvider;
pub use combinatorics::CombinatoricsProvider;
pub use constants::ConstantsProvider;
pub use datetime::DateTimeProvider;
pub use logical::LogicalProvider;
pub use statistics::StatisticsProvider;
pub use strings::StringsProvider;
pub use trigonometry::TrigonometryProvider;
pub use vectors::VectorsProvider;
pub use visualization::VisualizationProvider;

/// Registry holding every builtin provider.
#[tracing::instrument(level = "debug")]
pub fn builtin_registry() -> OperationRegistry {
    let mut registry = OperationRegistry::new();
    registry.register_provider(&LogicalProvider);
    registry.register_provider(&CollectionsProvider);
    registry.register_provider(&ArithmeticProvider);
    registry.register_provider(&TrigonometryProvider);
    registry.register_provider(&ConstantsProvider);
    registry.register_provider(&StringsProvider);
    registry.register_provider(&StatisticsProvider);
    registry.register_provider(&CombinatoricsProvider);
    registry.register_provider(&VectorsProvider);
    registry.register_provider(&DateTimeProvider);
    registry.register_provider(&VisualizationProvider);
    tracing::debug!(operations = registry.len(), "builtin registry ready");
    registry
}

// Argument helpers

/// Real-valued argument; integers and booleans widen.
pub(crate) fn number(op: &str, value: &Value) -> Result<f64, EvalError> {
    value
        .as_f64()
        .ok_or_else(|| expected_type(op, "a number", &value.type_name()))
}

/// Any numeric argument, complex included.
pub(crate) fn complex(op: &str, value: &Value) -> Result<Complex64, EvalError> {
    value
        .as_scalar()
        .filter(|s| !matches!(s, Scalar::Str(_) | Scalar::Date(_) | Scalar::DateTime(_)))
        .and_then(Scalar::as_complex)
        .ok_or_else(|| expected_type(op, "a number", &value.type_name()))
}

/// Integer argument. Reals are rejected even when integral.
pub(crate) fn integer(op: &str, value: &Value) -> Result<i64, EvalError> {
    value
        .as_scalar()
        .and_then(Scalar::as_i64)
        .ok_or_else(|| expected_type(op, "an integer", &value.type_name()))
}

/// Non-negative integer argument.
pub(crate) fn count(op: &str, value: &Value) -> Result<u64, EvalError> {
    let n = integer(op, value)?;
    u64::try_from(n).map_err(|_| argument_error(format!("{op} expects a non-negative integer, got {n}")))
}

pub(crate) fn string<'a>(op: &str, value: &'a Value) -> Result<&'a str, EvalError> {
    value
        .as_str()
        .ok_or_else(|| expected_type(op, "a string", &value.type_name()))
}

pub(crate) fn lambda<'a>(op: &str, value: &'a Value) -> Result<&'a LambdaExpr, EvalError> {
    value
        .as_lambda()
        .ok_or_else(|| expected_type(op, "a lambda", &value.type_name()))
}

/// Lambda argument of a fixed arity.
pub(crate) fn lambda_with_arity<'a>(
    op: &str,
    value: &'a Value,
    arity: usize,
) -> Result<&'a LambdaExpr, EvalError> {
    let lambda = lambda(op, value)?;
    if lambda.arity() != arity {
        let noun = if arity == 1 { "argument" } else { "arguments" };
        return Err(argument_error(format!(
            "{op} function must take {arity} {noun}, got {}",
            lambda.arity()
        )));
    }
    Ok(lambda)
}

/// Optional title argument; absent means untitled.
pub(crate) fn title(op: &str, args: &[Value], position: usize) -> Result<String, EvalError> {
    args.get(position)
        .map_or(Ok(""), |v| string(op, v))
        .map(str::to_string)
}

/// Read-only view over the collection kinds operations accept.
///
/// Intervals are indexed in place; nothing is materialized.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Collection<'a> {
    Items(&'a [Value]),
    Scalars(&'a [Scalar]),
    Interval(&'a Interval),
}

impl<'a> Collection<'a> {
    pub(crate) fn from_value(op: &str, value: &'a Value) -> Result<Self, EvalError> {
        match value {
            Value::List(items) => Ok(Collection::Items(items)),
            Value::Vector(items) => Ok(Collection::Scalars(items)),
            Value::Interval(interval) => Ok(Collection::Interval(interval)),
            other => Err(expected_type(op, "a collection", &other.type_name())),
        }
    }

    pub(crate) fn len(self) -> usize {
        match self {
            Collection::Items(items) => items.len(),
            Collection::Scalars(items) => items.len(),
            Collection::Interval(interval) => interval.len(),
        }
    }

    pub(crate) fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get(self, index: usize) -> Option<Value> {
        match self {
            Collection::Items(items) => items.get(index).cloned(),
            Collection::Scalars(items) => items.get(index).cloned().map(Value::Scalar),
            Collection::Interval(interval) => {
                interval.get(i64::try_from(index).ok()?).map(Value::Scalar)
            }
        }
    }

    pub(crate) fn iter(self) -> Box<dyn Iterator<Item = Value> + 'a> {
        match self {
            Collection::Items(items) => Box::new(items.iter().cloned()),
            Collection::Scalars(items) => Box::new(items.iter().cloned().map(Value::Scalar)),
            Collection::Interval(interval) => Box::new(interval.iter().map(Value::Scalar)),
        }
    }

    /// Elements `start..end` (clamped) as a list, whatever the source kind.
    pub(crate) fn slice(self, start: usize, end: usize) -> Value {
        let end = end.min(self.len());
        let start = start.min(end);
        match self {
            Collection::Items(items) => Value::list(items[start..end].to_vec()),
            Collection::Scalars(items) => {
                Value::list(items[start..end].iter().cloned().map(Value::Scalar).collect())
            }
            Collection::Interval(_) => Value::list((start..end).filter_map(|i| self.get(i)).collect()),
        }
    }

    /// Every element as a real.
    pub(crate) fn numbers(self, op: &str) -> Result<Vec<f64>, EvalError> {
        self.iter()
            .map(|item| {
                item.as_f64().ok_or_else(|| {
                    expected_type(op, "numeric elements", &item.type_name())
                })
            })
            .collect()
    }
}
