//! Error types for evaluation.
//!
//! `EvalErrorKind` is the language-level taxonomy; every error raised while
//! evaluating a program carries exactly one kind. Factory functions
//! (e.g. `division_by_zero()`) are the public API: they fill both `kind`
//! and `message`, and `message` always equals `kind.to_string()`.

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Identifier or named constant not bound in any reachable scope.
    #[error("Undefined variable: '{name}'")]
    UndefinedVariable { name: String },

    /// Call target is neither a bound lambda nor a registered operation.
    #[error("Undefined operation: '{name}'")]
    UndefinedOperation { name: String },

    /// Operand or argument of the wrong value variant.
    #[error("{message}")]
    TypeMismatch { message: String },

    /// Right variant, but outside the accepted domain.
    #[error("{message}")]
    ArgumentError { message: String },

    #[error("Division by zero")]
    DivisionByZero,
}

impl EvalErrorKind {
    /// Taxonomy name, as reported to hosts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "UndefinedVariable",
            Self::UndefinedOperation { .. } => "UndefinedOperation",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::ArgumentError { .. } => "ArgumentError",
            Self::DivisionByZero => "DivisionByZero",
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, EvalErrorKind::TypeMismatch { .. })
    }

    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(self.kind, EvalErrorKind::ArgumentError { .. })
    }
}

// Access

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// `[[NAME]]` with no zero-argument operation behind it.
#[cold]
pub fn undefined_named_constant(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: format!("[[{name}]]"),
    })
}

#[cold]
pub fn undefined_operation(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedOperation {
        name: name.to_string(),
    })
}

// Type errors

#[cold]
pub fn type_mismatch(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        message: message.into(),
    })
}

/// `{op} expects {expected}, got {got}`.
#[cold]
pub fn expected_type(op: &str, expected: &str, got: &str) -> EvalError {
    type_mismatch(format!("{op} expects {expected}, got {got}"))
}

/// No builtin rule and no registered operation for a binary operator.
#[cold]
pub fn binary_type_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    type_mismatch(format!("Cannot apply '{op}' to {left} and {right}"))
}

#[cold]
pub fn cannot_negate(type_name: &str) -> EvalError {
    type_mismatch(format!("Cannot negate {type_name}"))
}

#[cold]
pub fn cannot_order(op: &str, type_name: &str) -> EvalError {
    type_mismatch(format!("Cannot compare {type_name} values with '{op}'"))
}

#[cold]
pub fn lambda_arity_mismatch(expected: usize, got: usize) -> EvalError {
    type_mismatch(format!("Lambda expects {expected} arguments, got {got}"))
}

#[cold]
pub fn not_indexable(type_name: &str) -> EvalError {
    type_mismatch(format!("Cannot index into {type_name}"))
}

#[cold]
pub fn index_not_integer(type_name: &str) -> EvalError {
    type_mismatch(format!("Array index must be an integer, got {type_name}"))
}

// Argument errors

#[cold]
pub fn argument_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentError {
        message: message.into(),
    })
}

/// Call-site arity violation for a registry operation.
#[cold]
pub fn wrong_arg_count(op: &str, expected: &str, got: usize) -> EvalError {
    let noun = if got == 1 { "argument" } else { "arguments" };
    argument_error(format!("{op} expects {expected}, got {got} {noun}"))
}

#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    argument_error(format!("Index {index} out of range for length {len}"))
}

#[cold]
pub fn empty_collection(op: &str) -> EvalError {
    argument_error(format!("{op} requires a non-empty collection"))
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}
