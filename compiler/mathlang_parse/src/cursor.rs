//! Token cursor for navigating the token stream.
//!
//! Provides token access, fixed-distance lookahead, and consumption.

use mathlang_lexer::{Span, Token, TokenKind, TokenList};

/// Cursor over a filtered token stream.
///
/// Newlines nested inside `(...)` or `[...]` are removed up front so that a
/// call or index expression may span several lines; everywhere else a
/// newline separates statements.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    eof: Token,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(list: &TokenList) -> Self {
        let mut depth = 0usize;
        let mut tokens = Vec::with_capacity(list.len());
        for token in list.iter() {
            match token.kind {
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                TokenKind::Newline if depth > 0 => continue,
                _ => {}
            }
            tokens.push(token.clone());
        }

        let eof_span = tokens.last().map_or(Span::default(), |t| t.span);
        Cursor {
            tokens,
            eof: Token::new(TokenKind::Eof, eof_span),
            pos: 0,
        }
    }

    /// The current token. Past the end this is always `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Kind of the token `n` positions ahead of the current one.
    #[inline]
    pub(crate) fn peek_kind(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(&self.eof.kind, |t| &t.kind)
    }

    /// Check if the current token has the given kind (payloads compared too).
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Move past the current token, returning it.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
