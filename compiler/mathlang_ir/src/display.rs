//! Source-like rendering of expression trees.
//!
//! Used when a lambda value is displayed. Any binary operand that is itself a
//! binary node is parenthesized, whatever the relative precedence, so the
//! output is unambiguous but not minimal.

use std::fmt::Write;

use crate::ast::{Expr, NumberLiteral};

/// Reconstruct source text for `expr`.
pub fn expr_to_string(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Number(lit) => write_number(out, *lit),
        Expr::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Expr::Identifier(name) => out.push_str(name),
        Expr::NamedConstant(name) => {
            let _ = write!(out, "[[{name}]]");
        }
        Expr::Index { target, index } => {
            write_expr(out, target);
            out.push('[');
            write_expr(out, index);
            out.push(']');
        }
        Expr::Unary { op, operand } => {
            out.push_str(op.as_symbol());
            write_expr(out, operand);
        }
        Expr::Binary { op, left, right } => {
            write_operand(out, left);
            let _ = write!(out, " {} ", op.as_symbol());
            write_operand(out, right);
        }
        Expr::Call { name, args } => {
            out.push_str(name);
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, arg);
            }
            out.push(')');
        }
        Expr::Lambda(lambda) => {
            match lambda.params.as_slice() {
                [] => out.push_str("()"),
                [single] => out.push_str(single),
                params => {
                    let _ = write!(out, "({})", params.join(", "));
                }
            }
            out.push_str(" -> ");
            write_expr(out, &lambda.body);
        }
    }
}

fn write_operand(out: &mut String, expr: &Expr) {
    if matches!(expr, Expr::Binary { .. }) {
        out.push('(');
        write_expr(out, expr);
        out.push(')');
    } else {
        write_expr(out, expr);
    }
}

fn write_number(out: &mut String, lit: NumberLiteral) {
    let _ = match lit {
        NumberLiteral::Int(n) => write!(out, "{n}"),
        NumberLiteral::Real(r) => write!(out, "{r:?}"),
        NumberLiteral::Complex { re, im } if re == 0.0 => write!(out, "{im:?}i"),
        NumberLiteral::Complex { re, im } => write!(out, "({re:?} + {im:?}i)"),
    };
}

#[cfg(test)]
mod tests;
