#![allow(
    clippy::result_large_err,
    reason = "EvalError is returned everywhere; boxing it would touch every call site"
)]
//! MathLang Runtime - values, scopes, and the operation protocol.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Scalar`, `Interval`, plot records)
//! - Numeric coercion and truthiness
//! - The scope chain (`Environment`)
//! - Evaluation errors (`EvalError`, `EvalResult`)
//! - Builtin operation descriptors, providers, and the `OperationRegistry`
//!
//! # Architecture
//!
//! Operations never see the evaluator directly. Their bodies receive a
//! `&mut dyn Executor`, through which they force thunks and apply lambdas.
//! New operations are added by implementing `Provider`; the evaluator does
//! not change.

mod environment;
mod errors;
mod executor;
mod operation;
mod registry;
mod value;

pub use environment::{Environment, VariableSnapshot};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use executor::Executor;
pub use operation::{ArgInfo, Operation, OperationFn};
pub use registry::{OperationRegistry, Provider};
pub use value::{
    coerce_numeric, HistogramData, Interval, IntervalIter, Numeric, PlotData2D, PlotData3D,
    Scalar, ScatterData, Thunk, Value,
};

// Re-export error constructors for use by other crates
pub use errors::{
    argument_error, binary_type_mismatch, cannot_negate, cannot_order, division_by_zero,
    empty_collection, expected_type, index_not_integer, index_out_of_range,
    lambda_arity_mismatch, not_indexable, type_mismatch, undefined_named_constant,
    undefined_operation, undefined_variable, wrong_arg_count,
};

// Re-export so providers and hosts share one set of numeric and calendar types.
pub use chrono::{NaiveDate, NaiveDateTime};
pub use num_complex::Complex64;
