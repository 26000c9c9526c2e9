//! Tests for parse error reporting.

use crate::{parse, ParseError};
use pretty_assertions::assert_eq;

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(program) => panic!("expected {source:?} to fail, parsed {program:?}"),
        Err(e) => e,
    }
}

#[test]
fn test_error_display_variants() {
    assert_eq!(
        ParseError::new("unexpected token").to_string(),
        "Parse error: unexpected token"
    );
    assert_eq!(
        ParseError::new("unexpected token").at(5, 10).to_string(),
        "Parse error at line 5, column 10: unexpected token"
    );
}

#[test]
fn test_unexpected_end_of_input_has_no_location() {
    let err = parse_err("1 +");
    assert_eq!(err.line, None);
    assert_eq!(err.column, None);
    assert!(err.message.contains("end of input"), "{}", err.message);
}

#[test]
fn test_unexpected_token_is_located() {
    let err = parse_err("x = 1\ny = )");
    assert_eq!(err.line, Some(2));
    assert_eq!(err.column, Some(5));
    assert!(err.message.contains("`)`"), "{}", err.message);
}

#[test]
fn test_two_expressions_without_separator() {
    let err = parse_err("1 2");
    assert!(err.message.contains("after statement"), "{}", err.message);
    assert_eq!(err.column, Some(3));
}

#[test]
fn test_unclosed_call() {
    let err = parse_err("Sin(1");
    assert!(err.message.contains("expected `)`"), "{}", err.message);
}

#[test]
fn test_malformed_named_constant() {
    let err = parse_err("[[PI]");
    assert!(err.message.contains("named constant"), "{}", err.message);

    let err = parse_err("[PI]");
    assert!(err.message.contains("named constant"), "{}", err.message);
}

#[test]
fn test_invalid_character() {
    let err = parse_err("1 + $");
    assert!(err.message.contains("invalid input `$`"), "{}", err.message);
    assert_eq!(err.column, Some(5));
}
