//! MathLang IR - syntax tree types shared by the parser and the evaluator.
//!
//! The tree is plain owned data: a [`Program`] is an ordered list of
//! [`Statement`]s, each holding [`Expr`] nodes. Lambda literals are stored
//! behind `Rc` so a runtime lambda value can share its body with the tree
//! that produced it instead of deep-cloning it.

mod ast;
mod display;

pub use ast::{BinaryOp, Expr, LambdaExpr, NumberLiteral, Program, Statement, UnaryOp};
pub use display::expr_to_string;
