//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! literal cooking and final token conversion.

use logos::Logos;

/// Parse a real literal, accepting the exponent forms logos matched.
fn parse_real(slice: &str) -> Option<f64> {
    slice.parse::<f64>().ok()
}

/// Parse an imaginary literal such as `2i` or `1.5I`.
fn parse_imaginary(slice: &str) -> Option<f64> {
    slice[..slice.len() - 1].parse::<f64>().ok()
}

/// Raw token from logos (before cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
#[logos(skip r"#[^\n]*")] // Skip line comments
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,
    #[token(";")]
    Semicolon,

    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token(">=")]
    GtEq,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("->")]
    Arrow,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    // Hex integer
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| i64::from_str_radix(&lex.slice()[2..], 16).ok())]
    HexInt(i64),

    // Integer (out-of-range literals become lex errors)
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    // Real: fractional part and/or exponent
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| parse_real(lex.slice()))]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| parse_real(lex.slice()))]
    Real(f64),

    // Imaginary literal, case-insensitive suffix
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[iI]", |lex| parse_imaginary(lex.slice()))]
    Imaginary(f64),

    // String literal; a backslash keeps the next character inside the
    // literal but is not itself removed
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
