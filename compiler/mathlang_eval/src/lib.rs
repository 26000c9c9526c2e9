#![allow(
    clippy::result_large_err,
    reason = "EvalError is returned everywhere; boxing it would touch every call site"
)]
//! MathLang Eval - Tree-walking evaluator and builtin operations.
//!
//! This crate provides the interpreter for parsed MathLang programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: statement and expression evaluation over an `Environment`
//! - `evaluate_binary`: builtin scalar rules for binary operators
//! - `evaluate_unary`: builtin rules for unary minus
//! - `OperationRegistry`: everything callable by name, filled by the providers
//!   in [`providers`]
//!
//! Operators without a builtin rule for their operand types fall through to
//! a registry operation whose identifier is the operator symbol, so `+`
//! can be extended to new types without touching the evaluator.

mod engine;
pub mod interpreter;
mod operators;
pub mod providers;
mod unary_operators;

pub use engine::{evaluate, evaluate_program, EngineError, EvaluationResult};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use providers::{
    builtin_registry, ArithmeticProvider, CollectionsProvider, CombinatoricsProvider,
    ConstantsProvider, DateTimeProvider, LogicalProvider, StatisticsProvider, StringsProvider,
    TrigonometryProvider, VectorsProvider, VisualizationProvider,
};
pub use unary_operators::evaluate_unary;

#[cfg(test)]
mod tests;
