//! Parse error type.

use std::fmt;

/// Malformed source text.
///
/// `line` and `column` are 1-based and present only when the error can be
/// pinned to a concrete token; running out of input leaves both absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl ParseError {
    /// Error without location information.
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Error pinned to a source position.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(
                f,
                "Parse error at line {line}, column {column}: {}",
                self.message
            ),
            (Some(line), None) => write!(f, "Parse error at line {line}: {}", self.message),
            _ => write!(f, "Parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}
