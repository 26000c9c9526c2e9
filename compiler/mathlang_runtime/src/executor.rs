//! Callback seam from operation bodies into the evaluator.

use mathlang_ir::{Expr, LambdaExpr};

use crate::environment::Environment;
use crate::errors::{lambda_arity_mismatch, EvalResult};
use crate::value::Value;

/// Evaluation services available to operation bodies.
///
/// Operations receive a `&mut dyn Executor` instead of the interpreter
/// itself, so this crate stays independent of the evaluator.
pub trait Executor {
    /// Evaluate `expr` with `env` as the active scope.
    fn eval_in(&mut self, expr: &Expr, env: &Environment) -> EvalResult;

    /// Evaluate a thunk in the environment it captured. Any other value is
    /// returned as is.
    fn force(&mut self, value: &Value) -> EvalResult {
        match value {
            Value::Thunk(thunk) => self.eval_in(thunk.expr(), thunk.env()),
            other => Ok(other.clone()),
        }
    }

    /// Apply a lambda to already-evaluated arguments.
    ///
    /// The body runs in a fresh child of `env`, the caller's scope; lambdas
    /// capture nothing.
    fn apply_lambda(&mut self, lambda: &LambdaExpr, args: Vec<Value>, env: &Environment) -> EvalResult {
        if args.len() != lambda.arity() {
            return Err(lambda_arity_mismatch(lambda.arity(), args.len()));
        }
        let child = env.create_child();
        for (param, arg) in lambda.params.iter().zip(args) {
            child.set(param.clone(), arg);
        }
        self.eval_in(&lambda.body, &child)
    }
}
