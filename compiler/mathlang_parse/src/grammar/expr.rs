//! Expression parsing: lambdas, the binary precedence chain, unary minus,
//! power, postfix indexing, and primaries.

use mathlang_ir::{BinaryOp, Expr, NumberLiteral, UnaryOp};
use mathlang_lexer::TokenKind;
use mathlang_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        if let Some(count) = self.lambda_header() {
            return self.parse_lambda(count);
        }
        self.parse_comparison()
    }

    /// Lookahead for `x ->`, `() ->`, or `(a, b) ->`.
    fn lambda_header(&self) -> Option<usize> {
        match self.cursor.current_kind() {
            TokenKind::Ident(_) => (self.cursor.peek_kind(1) == &TokenKind::Arrow).then_some(1),
            TokenKind::LParen => {
                let (count, close) = self.paren_ident_list(0)?;
                (self.cursor.peek_kind(close + 1) == &TokenKind::Arrow).then_some(count)
            }
            _ => None,
        }
    }

    fn parse_lambda(&mut self, count: usize) -> Result<Expr, ParseError> {
        let params = if let TokenKind::Ident(name) = self.cursor.current_kind().clone() {
            self.cursor.advance();
            vec![name]
        } else {
            self.consume_paren_idents(count)
        };
        self.cursor.advance(); // ->

        let body = self.parse_expr()?;
        Ok(Expr::lambda(params, body))
    }

    /// Parse comparison operators (`== != > >= < <=`).
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    ///
    /// `3 + 2i` and `3 - 2i` collapse into a single complex literal when the
    /// left operand is a plain real literal.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = fold_complex_literal(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/`, `%`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `-`. Binds looser than `^`: `-2 ^ 2` is `-(2 ^ 2)`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.eat(&TokenKind::Minus) {
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            });
        }
        self.parse_power()
    }

    /// Parse `^` (right-associative). The exponent may carry its own sign.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_postfix()?;

        if self.cursor.eat(&TokenKind::Caret) {
            let exponent = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }

        Ok(base)
    }

    /// Parse chained indexing: `a[0][1]`.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        while self.cursor.eat(&TokenKind::LBracket) {
            let index = self.parse_expr()?;
            self.expect(&TokenKind::RBracket, "to close index")?;
            expr = Expr::Index {
                target: Box::new(expr),
                index: Box::new(index),
            };
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind().clone() {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Ok(Expr::Number(NumberLiteral::Int(n)))
            }
            TokenKind::Real(r) => {
                self.cursor.advance();
                Ok(Expr::Number(NumberLiteral::Real(r)))
            }
            TokenKind::Imaginary(im) => {
                self.cursor.advance();
                Ok(Expr::Number(NumberLiteral::Complex { re: 0.0, im }))
            }
            TokenKind::String(s) => {
                self.cursor.advance();
                Ok(Expr::String(s))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                if self.cursor.check(&TokenKind::LParen) {
                    return self.parse_call(name);
                }
                Ok(Expr::Identifier(name))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "to close parenthesized expression")?;
                Ok(inner)
            }
            TokenKind::LBracket => self.parse_named_constant(),
            TokenKind::Error(text) => {
                let token = self.cursor.current().clone();
                Err(self.error_at(&token, format!("invalid input `{text}`")))
            }
            _ => Err(self.unexpected("in expression")),
        }
    }

    /// `Name(arg, ...)`; the name has been consumed.
    fn parse_call(&mut self, name: String) -> Result<Expr, ParseError> {
        self.cursor.advance(); // (
        let mut args = Vec::new();

        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RParen, "to close argument list")?;
        Ok(Expr::Call { name, args })
    }

    /// `[[NAME]]`
    fn parse_named_constant(&mut self) -> Result<Expr, ParseError> {
        self.cursor.advance(); // [
        self.expect(&TokenKind::LBracket, "to open named constant")?;

        let TokenKind::Ident(name) = self.cursor.current_kind().clone() else {
            return Err(self.unexpected("in named constant"));
        };
        self.cursor.advance();

        self.expect(&TokenKind::RBracket, "to close named constant")?;
        self.expect(&TokenKind::RBracket, "to close named constant")?;
        Ok(Expr::NamedConstant(name))
    }

    /// Consume `kind` or fail with "expected X ..., found Y".
    fn expect(&mut self, kind: &TokenKind, context: &str) -> Result<(), ParseError> {
        if self.cursor.eat(kind) {
            return Ok(());
        }
        let token = self.cursor.current().clone();
        let message = format!(
            "expected {} {context}, found {}",
            kind.describe(),
            token.kind.describe()
        );
        Err(self.error_at(&token, message))
    }

    fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }
}

/// Collapse `real (+|-) imaginary` into one complex literal.
fn fold_complex_literal(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    if let (Expr::Number(real), Expr::Number(NumberLiteral::Complex { re, im })) = (&left, &right)
    {
        let real_part = match *real {
            NumberLiteral::Int(n) => Some(n as f64),
            NumberLiteral::Real(r) => Some(r),
            NumberLiteral::Complex { .. } => None,
        };
        if let Some(real_part) = real_part.filter(|_| *re == 0.0) {
            let im = if op == BinaryOp::Sub { -*im } else { *im };
            return Expr::Number(NumberLiteral::Complex { re: real_part, im });
        }
    }
    Expr::binary(op, left, right)
}
