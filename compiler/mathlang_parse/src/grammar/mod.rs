//! Program and statement parsing.
//!
//! - `mod.rs`: statement separators, assignments, function-definition sugar
//! - `expr.rs`: expressions, the precedence chain, lambdas, primaries

mod expr;

use mathlang_ir::{Expr, Program, Statement};
use mathlang_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse the whole token stream.
    ///
    /// Statements are separated by newlines or `;`; empty statements are
    /// skipped.
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        loop {
            self.skip_separators();
            if self.cursor.is_at_end() {
                break;
            }

            statements.push(self.parse_statement()?);

            if !self.at_separator() && !self.cursor.is_at_end() {
                return Err(self.unexpected("after statement"));
            }
        }

        Ok(Program::new(statements))
    }

    fn skip_separators(&mut self) {
        while self.at_separator() {
            self.cursor.advance();
        }
    }

    fn at_separator(&self) -> bool {
        matches!(
            self.cursor.current_kind(),
            TokenKind::Newline | TokenKind::Semicolon
        )
    }

    /// `name = expr`, `name(p, ...) = expr`, or a bare expression.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if let TokenKind::Ident(name) = self.cursor.current_kind().clone() {
            if self.cursor.peek_kind(1) == &TokenKind::Eq {
                self.cursor.advance();
                self.cursor.advance();
                let value = self.parse_expr()?;
                return Ok(Statement::Assignment { name, value });
            }

            if let Some(param_count) = self.function_definition_params() {
                return self.parse_function_definition(name, param_count);
            }
        }

        Ok(Statement::Expression(self.parse_expr()?))
    }

    /// Lookahead for `Ident ( [Ident {, Ident}] ) =`.
    ///
    /// Returns the parameter count when the pattern matches. Nothing is
    /// consumed, so `f(1) == 2` and `f(x)` still parse as expressions.
    fn function_definition_params(&self) -> Option<usize> {
        let (count, close) = self.paren_ident_list(1)?;
        (self.cursor.peek_kind(close + 1) == &TokenKind::Eq).then_some(count)
    }

    /// Desugar `name(p1, p2) = body` into `name = (p1, p2) -> body`.
    fn parse_function_definition(
        &mut self,
        name: String,
        param_count: usize,
    ) -> Result<Statement, ParseError> {
        self.cursor.advance(); // name
        let params = self.consume_paren_idents(param_count);
        self.cursor.advance(); // =

        let body = self.parse_expr()?;
        Ok(Statement::Assignment {
            name,
            value: Expr::lambda(params, body),
        })
    }

    /// Match `( [Ident {, Ident}] )` starting `offset` tokens ahead.
    ///
    /// Returns the identifier count and the offset of the closing paren.
    pub(crate) fn paren_ident_list(&self, offset: usize) -> Option<(usize, usize)> {
        if self.cursor.peek_kind(offset) != &TokenKind::LParen {
            return None;
        }

        let mut offset = offset + 1;
        let mut count = 0;
        if self.cursor.peek_kind(offset) == &TokenKind::RParen {
            return Some((count, offset));
        }
        loop {
            if !matches!(self.cursor.peek_kind(offset), TokenKind::Ident(_)) {
                return None;
            }
            count += 1;
            offset += 1;
            match self.cursor.peek_kind(offset) {
                TokenKind::Comma => offset += 1,
                TokenKind::RParen => return Some((count, offset)),
                _ => return None,
            }
        }
    }

    /// Consume a parenthesized identifier list already validated by
    /// [`Self::paren_ident_list`].
    pub(crate) fn consume_paren_idents(&mut self, expected: usize) -> Vec<String> {
        let mut names = Vec::with_capacity(expected);
        self.cursor.advance(); // (
        while let TokenKind::Ident(name) = self.cursor.current_kind().clone() {
            names.push(name);
            self.cursor.advance();
            self.cursor.eat(&TokenKind::Comma);
        }
        self.cursor.advance(); // )
        names
    }
}
