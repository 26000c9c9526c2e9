//! Lexer for MathLang using logos.
//!
//! `lex` turns source text into a flat [`TokenList`] terminated by
//! [`TokenKind::Eof`]. Comments and horizontal whitespace are dropped;
//! newlines and `;` survive as statement separators. Characters logos cannot
//! match become [`TokenKind::Error`] tokens so the parser can report them with
//! a position instead of the lexer failing on its own.

mod raw_token;

use logos::Logos;
use raw_token::RawToken;

/// Byte range into the source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    pub const fn point(pos: u32) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        }
    }

    /// 1-based `(line, column)` of the span start within `source`.
    ///
    /// Columns count characters, not bytes.
    pub fn line_col(self, source: &str) -> (usize, usize) {
        let offset = (self.start as usize).min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

/// Cooked token kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Real(f64),
    /// Imaginary part of a complex literal (`2i`).
    Imaginary(f64),
    String(String),
    Ident(String),

    // Operators
    EqEq,
    NotEq,
    GtEq,
    LtEq,
    Gt,
    Lt,
    Arrow,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,

    // Separators
    Newline,
    Semicolon,

    /// Unrecognized input, carrying the offending text.
    Error(String),
    Eof,
}

impl TokenKind {
    /// Short human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Real(r) => format!("number `{r}`"),
            TokenKind::Imaginary(r) => format!("imaginary number `{r}i`"),
            TokenKind::String(s) => format!("string \"{s}\""),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Newline => "newline".to_string(),
            TokenKind::Error(text) => format!("invalid input `{text}`"),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.symbol()),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::GtEq => ">=",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Arrow => "->",
            TokenKind::Eq => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            _ => "",
        }
    }
}

/// A token with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Tokens of one source text, always ending with `Eof`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds without spans, mostly for tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str) -> TokenList {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => tokens.push(Token::new(convert_token(raw, slice), span)),
            Err(()) => tokens.push(Token::new(TokenKind::Error(slice.to_string()), span)),
        }
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    TokenList { tokens }
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int(n) | RawToken::HexInt(n) => TokenKind::Int(n),
        RawToken::Real(r) => TokenKind::Real(r),
        RawToken::Imaginary(r) => TokenKind::Imaginary(r),
        RawToken::String => TokenKind::String(slice[1..slice.len() - 1].to_string()),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Caret => TokenKind::Caret,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Newline => TokenKind::Newline,
        RawToken::Semicolon => TokenKind::Semicolon,
    }
}

#[cfg(test)]
mod tests;
