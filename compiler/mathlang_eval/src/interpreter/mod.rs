//! Tree-walking interpreter.
//!
//! # Scoping
//!
//! Lambdas capture nothing. A call runs the body in a fresh child of the
//! *caller's* environment, so free variables resolve wherever the call
//! happens. Recursion through a top-level definition works because every
//! nested call chains back to the frame that binds the function.
//!
//! # Calls
//!
//! `Name(args)` prefers a lambda bound to `Name` in scope and otherwise
//! dispatches to the operation registry. For registry calls, inline lambda
//! arguments are passed through as values, arguments at lazy positions are
//! wrapped in thunks over the current environment, and everything else is
//! evaluated left to right before the call.

use std::rc::Rc;

use mathlang_ir::{BinaryOp, Expr, LambdaExpr, NumberLiteral, Statement};
use mathlang_runtime::{
    binary_type_mismatch, index_not_integer, index_out_of_range, lambda_arity_mismatch,
    not_indexable, undefined_named_constant, undefined_operation, undefined_variable, Environment,
    EvalError, EvalResult, Executor, OperationRegistry, Value,
};
use mathlang_stack::ensure_sufficient_stack;

use crate::engine::EvaluationResult;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;

/// Evaluator over a fixed operation registry.
pub struct Interpreter<'r> {
    registry: &'r OperationRegistry,
}

impl<'r> Interpreter<'r> {
    pub fn new(registry: &'r OperationRegistry) -> Self {
        Interpreter { registry }
    }

    #[inline]
    pub fn registry(&self) -> &'r OperationRegistry {
        self.registry
    }

    /// Evaluate one statement, binding the value for assignments.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_statement(
        &mut self,
        statement: &Statement,
        env: &Environment,
    ) -> Result<EvaluationResult, EvalError> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval_expr(value, env)?;
                env.set(name.clone(), value.clone());
                Ok(EvaluationResult::assignment(name.clone(), value))
            }
            Statement::Expression(expr) => Ok(EvaluationResult::expression(self.eval_expr(expr, env)?)),
        }
    }

    /// Evaluate an expression in `env`.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Number(lit) => Ok(eval_literal(*lit)),
            Expr::String(s) => Ok(Value::string(s)),
            Expr::Identifier(name) => env.get(name).ok_or_else(|| undefined_variable(name)),
            Expr::NamedConstant(name) => self.eval_named_constant(name, env),
            Expr::Index { target, index } => self.eval_index(target, index, env),
            Expr::Unary { op, operand } => {
                let value = self.eval_expr(operand, env)?;
                evaluate_unary(*op, &value)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                self.eval_binary(*op, left, right)
            }
            Expr::Call { name, args } => self.eval_call(name, args, env),
            Expr::Lambda(lambda) => Ok(Value::Lambda(Rc::clone(lambda))),
        }
    }

    /// Builtin semantics first, then a registered operation named after the
    /// operator symbol.
    ///
    /// Registered operators run against a fresh, empty environment, so they
    /// cannot see the caller's bindings.
    fn eval_binary(&mut self, op: BinaryOp, left: Value, right: Value) -> EvalResult {
        if let Some(result) = evaluate_binary(op, &left, &right) {
            return result;
        }
        let symbol = op.as_symbol();
        let registry = self.registry;
        match registry.get(symbol) {
            Some(operation) => {
                tracing::trace!(symbol, "binary operator resolved through registry");
                operation.invoke(vec![left, right], &Environment::new(), self)
            }
            None => Err(binary_type_mismatch(
                symbol,
                &left.type_name(),
                &right.type_name(),
            )),
        }
    }

    fn eval_call(&mut self, name: &str, args: &[Expr], env: &Environment) -> EvalResult {
        if let Some(Value::Lambda(lambda)) = env.get(name) {
            return self.invoke_lambda(&lambda, args, env);
        }

        let registry = self.registry;
        let Some(operation) = registry.get(name) else {
            return Err(undefined_operation(name));
        };

        let mut values = Vec::with_capacity(args.len());
        for (position, arg) in args.iter().enumerate() {
            let value = match arg {
                Expr::Lambda(lambda) => Value::Lambda(Rc::clone(lambda)),
                _ if operation.is_lazy(position) => Value::thunk(arg.clone(), env.clone()),
                _ => self.eval_expr(arg, env)?,
            };
            values.push(value);
        }
        operation.invoke(values, env, self)
    }

    /// Call a lambda bound in scope. Arguments are evaluated in the caller's
    /// environment, which also parents the body's frame.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = lambda.arity()))]
    fn invoke_lambda(&mut self, lambda: &LambdaExpr, args: &[Expr], env: &Environment) -> EvalResult {
        if args.len() != lambda.arity() {
            return Err(lambda_arity_mismatch(lambda.arity(), args.len()));
        }
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg, env)?);
        }
        self.apply_lambda(lambda, values, env)
    }

    /// `[[NAME]]` is a zero-argument registry call.
    fn eval_named_constant(&mut self, name: &str, env: &Environment) -> EvalResult {
        let registry = self.registry;
        match registry.get(name) {
            Some(operation) => operation.invoke(Vec::new(), env, self),
            None => Err(undefined_named_constant(name)),
        }
    }

    /// `target[index]` on lists and vectors. Intervals are not indexable
    /// from source.
    fn eval_index(&mut self, target: &Expr, index: &Expr, env: &Environment) -> EvalResult {
        let target = self.eval_expr(target, env)?;
        let index = self.eval_expr(index, env)?;
        let Some(i) = index.as_int() else {
            return Err(index_not_integer(&index.type_name()));
        };
        let position = usize::try_from(i).ok();
        match &target {
            Value::List(items) => position
                .and_then(|p| items.get(p))
                .cloned()
                .ok_or_else(|| index_out_of_range(i, items.len())),
            Value::Vector(items) => position
                .and_then(|p| items.get(p))
                .cloned()
                .map(Value::Scalar)
                .ok_or_else(|| index_out_of_range(i, items.len())),
            other => Err(not_indexable(&other.type_name())),
        }
    }
}

impl Executor for Interpreter<'_> {
    fn eval_in(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        self.eval_expr(expr, env)
    }
}

fn eval_literal(lit: NumberLiteral) -> Value {
    match lit {
        NumberLiteral::Int(n) => Value::int(n),
        NumberLiteral::Real(r) => Value::real(r),
        NumberLiteral::Complex { re, im } => Value::complex(re, im),
    }
}
