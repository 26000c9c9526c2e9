//! Syntax tree node definitions.
//!
//! All nodes are owned; children are boxed. The tree is immutable once the
//! parser hands it out.

use std::rc::Rc;

/// A parsed source unit: statements in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A top-level statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// `name = expr`, also produced by function-definition sugar
    /// (`f(x) = body` becomes `f = x -> body`).
    Assignment { name: String, value: Expr },
    /// A bare expression whose value is reported.
    Expression(Expr),
}

/// Numeric literal payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumberLiteral {
    Int(i64),
    Real(f64),
    /// `3+2i` or `2i`.
    Complex { re: f64, im: f64 },
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(NumberLiteral),
    String(String),
    Identifier(String),
    /// `[[NAME]]`: resolved through the operation registry, not the environment.
    NamedConstant(String),
    /// `target[index]`
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `Name(arg, ...)`. An argument that is an inline lambda stays an
    /// [`Expr::Lambda`] so the evaluator can pass it through unevaluated.
    Call {
        name: String,
        args: Vec<Expr>,
    },
    Lambda(Rc<LambdaExpr>),
}

impl Expr {
    /// Build a binary node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build a lambda node.
    pub fn lambda(params: Vec<String>, body: Expr) -> Self {
        Expr::Lambda(Rc::new(LambdaExpr { params, body }))
    }

    #[inline]
    pub fn int(value: i64) -> Self {
        Expr::Number(NumberLiteral::Int(value))
    }

    #[inline]
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }
}

/// Lambda literal: ordered parameter names and a body.
///
/// Carries no environment. Free variables in `body` are resolved against
/// whatever environment the lambda is invoked from.
#[derive(Clone, Debug, PartialEq)]
pub struct LambdaExpr {
    pub params: Vec<String>,
    pub body: Expr,
}

impl LambdaExpr {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// Source-level symbol. Also the registry identifier consulted when no
    /// builtin rule applies to the operands.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }

    /// Returns true for `== != < <= > >=`.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
        }
    }
}
