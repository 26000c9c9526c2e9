//! Evaluator test modules and shared helpers.

mod evaluate_tests;
mod operators_tests;

use mathlang_runtime::{Environment, Value};

use crate::{builtin_registry, evaluate, EngineError, EvaluationResult};

/// Evaluate `source` against `env` with the builtin registry.
pub(crate) fn run_in(source: &str, env: &Environment) -> Vec<EvaluationResult> {
    let registry = builtin_registry();
    match evaluate(source, env, &registry) {
        Ok(results) => results,
        Err(e) => panic!("failed to evaluate {source:?}: {e}"),
    }
}

/// Value of the last statement of `source`, in a fresh session.
pub(crate) fn eval(source: &str) -> Value {
    match run_in(source, &Environment::new()).pop() {
        Some(result) => result.value,
        None => panic!("{source:?} produced no results"),
    }
}

pub(crate) fn display(source: &str) -> String {
    eval(source).display()
}

pub(crate) fn eval_err(source: &str) -> EngineError {
    let registry = builtin_registry();
    match evaluate(source, &Environment::new(), &registry) {
        Ok(results) => panic!("expected {source:?} to fail, got {results:?}"),
        Err(e) => e,
    }
}

/// Taxonomy name of the error `source` fails with.
pub(crate) fn error_kind(source: &str) -> &'static str {
    eval_err(source).kind_name()
}
