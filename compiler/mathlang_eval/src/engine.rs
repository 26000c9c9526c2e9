//! Public evaluation entry point.

use std::borrow::Cow;

use mathlang_ir::Program;
use mathlang_parse::ParseError;
use mathlang_runtime::{Environment, EvalError, OperationRegistry, Value};

use crate::interpreter::Interpreter;

/// Outcome of one statement.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    pub value: Value,
    pub is_assignment: bool,
    /// Bound name, set for assignments only.
    pub variable_name: Option<String>,
}

impl EvaluationResult {
    pub fn expression(value: Value) -> Self {
        EvaluationResult {
            value,
            is_assignment: false,
            variable_name: None,
        }
    }

    pub fn assignment(name: impl Into<String>, value: Value) -> Self {
        EvaluationResult {
            value,
            is_assignment: true,
            variable_name: Some(name.into()),
        }
    }

    #[inline]
    pub fn display(&self) -> String {
        self.value.display()
    }

    #[inline]
    pub fn type_name(&self) -> Cow<'static, str> {
        self.value.type_name()
    }
}

/// Failure of a whole `evaluate` call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl EngineError {
    /// Taxonomy name: `ParseError`, `UndefinedVariable`, `DivisionByZero`, ...
    pub fn kind_name(&self) -> &'static str {
        match self {
            EngineError::Parse(_) => "ParseError",
            EngineError::Eval(e) => e.kind.name(),
        }
    }

    /// Source line, for parse errors that could be located.
    pub fn line(&self) -> Option<usize> {
        match self {
            EngineError::Parse(e) => e.line,
            EngineError::Eval(_) => None,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            EngineError::Parse(e) => e.column,
            EngineError::Eval(_) => None,
        }
    }
}

/// Parse `source` and evaluate every statement against `env`.
///
/// Returns one result per statement in source order. Evaluation stops at
/// the first failing statement; bindings made by earlier statements stay
/// in `env`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn evaluate(
    source: &str,
    env: &Environment,
    registry: &OperationRegistry,
) -> Result<Vec<EvaluationResult>, EngineError> {
    let program = mathlang_parse::parse(source)?;
    Ok(evaluate_program(&program, env, registry)?)
}

/// Evaluate an already parsed program.
pub fn evaluate_program(
    program: &Program,
    env: &Environment,
    registry: &OperationRegistry,
) -> Result<Vec<EvaluationResult>, EvalError> {
    let mut interpreter = Interpreter::new(registry);
    let mut results = Vec::with_capacity(program.len());
    for statement in &program.statements {
        results.push(interpreter.eval_statement(statement, env)?);
    }
    tracing::debug!(statements = results.len(), "evaluated program");
    Ok(results)
}
