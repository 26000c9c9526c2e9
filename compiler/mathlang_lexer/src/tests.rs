use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds()
}

#[test]
fn test_assignment_tokens() {
    assert_eq!(
        kinds("x = 10"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::Eq,
            TokenKind::Int(10),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_number_forms() {
    assert_eq!(
        kinds("42 0x1F 2.5 1.5e-3 3e2"),
        vec![
            TokenKind::Int(42),
            TokenKind::Int(31),
            TokenKind::Real(2.5),
            TokenKind::Real(0.0015),
            TokenKind::Real(300.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_imaginary_suffix_is_case_insensitive() {
    assert_eq!(
        kinds("2i 1.5I"),
        vec![
            TokenKind::Imaginary(2.0),
            TokenKind::Imaginary(1.5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comparison_and_arrow_operators() {
    assert_eq!(
        kinds("== != >= <= > < -> - ="),
        vec![
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::GtEq,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::Lt,
            TokenKind::Arrow,
            TokenKind::Minus,
            TokenKind::Eq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_dropped_but_newlines_kept() {
    assert_eq!(
        kinds("x = 1 # comment\ny; z"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::Eq,
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Ident("y".into()),
            TokenKind::Semicolon,
            TokenKind::Ident("z".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_contents_are_taken_verbatim() {
    assert_eq!(
        kinds(r#""a\"b" "tab\there""#),
        vec![
            TokenKind::String(r#"a\"b"#.into()),
            TokenKind::String(r"tab\there".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_named_constant_brackets_are_single_tokens() {
    assert_eq!(
        kinds("[[PI]]"),
        vec![
            TokenKind::LBracket,
            TokenKind::LBracket,
            TokenKind::Ident("PI".into()),
            TokenKind::RBracket,
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unknown_character_becomes_error_token() {
    let tokens = lex("1 $ 2");
    assert_eq!(tokens.get(1).map(|t| t.kind.clone()), Some(TokenKind::Error("$".into())));
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(2, 3)));
}

#[test]
fn test_integer_overflow_is_error_token() {
    let tokens = lex("99999999999999999999");
    assert!(matches!(
        tokens.get(0).map(|t| &t.kind),
        Some(TokenKind::Error(_))
    ));
}

#[test]
fn test_eof_span_points_past_source() {
    let tokens = lex("ab");
    let last = tokens.iter().last().cloned();
    assert_eq!(last, Some(Token::new(TokenKind::Eof, Span::point(2))));
}

#[test]
fn test_line_col() {
    let source = "x = 1\ny = $";
    assert_eq!(Span::point(0).line_col(source), (1, 1));
    assert_eq!(Span::point(10).line_col(source), (2, 5));
}
