//! Recursive descent parser for MathLang.
//!
//! Produces a [`Program`] from source text. Precedence, lowest first:
//!
//! | Level          | Operators               | Associativity |
//! |----------------|-------------------------|---------------|
//! | comparison     | `== != > >= < <=`       | left          |
//! | additive       | `+ -`                   | left          |
//! | multiplicative | `* / %`                 | left          |
//! | unary          | prefix `-`              | right         |
//! | power          | `^`                     | right         |
//! | postfix        | `expr[index]`           | left          |
//!
//! Lambdas (`x -> e`, `() -> e`, `(a, b) -> e`) are recognized by
//! lookahead at the start of an expression and extend as far right as
//! possible.

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
use mathlang_ir::Program;
use mathlang_lexer::Token;

pub use error::ParseError;

/// Parse `source` into a program.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = mathlang_lexer::lex(source);
    let mut parser = Parser::new(source, &tokens);
    let program = parser.parse_program()?;
    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}

/// Parser state.
pub(crate) struct Parser<'src> {
    source: &'src str,
    cursor: Cursor,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: &mathlang_lexer::TokenList) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens),
        }
    }

    /// Error located at `token`, or unlocated when the input ran out.
    fn error_at(&self, token: &Token, message: impl Into<String>) -> ParseError {
        let error = ParseError::new(message);
        if matches!(token.kind, mathlang_lexer::TokenKind::Eof) {
            return error;
        }
        let (line, column) = token.span.line_col(self.source);
        error.at(line, column)
    }

    /// "unexpected X" for the current token.
    fn unexpected(&self, context: &str) -> ParseError {
        let token = self.cursor.current();
        let message = if context.is_empty() {
            format!("unexpected {}", token.kind.describe())
        } else {
            format!("unexpected {} {context}", token.kind.describe())
        };
        self.error_at(token, message)
    }
}

#[cfg(test)]
mod tests;
