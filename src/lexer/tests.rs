//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and reals) and ranges
//! - String literals with doubled quotes
//! - Operators and punctuation
//! - Comments and line tracking
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind, TokenValue},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.pas".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "program var array of integer real boolean function procedure begin end if then else while do not and or div return true false";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Program,
            TokenKind::Var,
            TokenKind::Array,
            TokenKind::Of,
            TokenKind::IntegerType,
            TokenKind::RealType,
            TokenKind::BooleanType,
            TokenKind::Function,
            TokenKind::Procedure,
            TokenKind::Begin,
            TokenKind::End,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::Not,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Div,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_keywords_case_insensitive() {
    assert_eq!(
        kinds("BEGIN Begin bEgIn END"),
        vec![TokenKind::Begin, TokenKind::Begin, TokenKind::Begin, TokenKind::End, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo Bar baz_123 _underscore beginning".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    let names = ["foo", "Bar", "baz_123", "_underscore", "beginning"];
    for (token, name) in tokens.iter().zip(names) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, TokenValue::Text(name.to_string()));
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 2.5e3 1e-2".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0], Token::integer(42, 1));
    assert_eq!(tokens[1], Token::real(3.14, 1));
    assert_eq!(tokens[2], Token::integer(0, 1));
    assert_eq!(tokens[3], Token::real(2500.0, 1));
    assert_eq!(tokens[4], Token::real(0.01, 1));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_range_is_not_a_real() {
    let source = "array[1..10]".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Array);
    assert_eq!(tokens[1].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[2], Token::integer(1, 1));
    assert_eq!(tokens[3].kind, TokenKind::DotDot);
    assert_eq!(tokens[4], Token::integer(10, 1));
    assert_eq!(tokens[5].kind, TokenKind::CloseBracket);
}

#[test]
fn test_tokenize_strings() {
    let source = "'hello' 'two words' '' 'it''s'".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0], Token::string("hello", 1));
    assert_eq!(tokens[1], Token::string("two words", 1));
    assert_eq!(tokens[2], Token::string("", 1));
    assert_eq!(tokens[3], Token::string("it's", 1));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds(":= = <> < <= > >= + - * / .."),
        vec![
            TokenKind::Assign,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::DotDot,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) [ ] . , ; :"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_spaces() {
    assert_eq!(
        kinds("x:=a[i]-1;"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::OpenBracket,
            TokenKind::Identifier,
            TokenKind::CloseBracket,
            TokenKind::Dash,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "x { brace\ncomment } := (* paren\n\ncomment *) 5 // line comment\ny".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0], Token::identifier("x", 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Assign, 2));
    assert_eq!(tokens[2], Token::integer(5, 4));
    assert_eq!(tokens[3], Token::identifier("y", 5));
    assert_eq!(tokens[4], Token::eof(5));
}

#[test]
fn test_tokenize_line_numbers() {
    let source = "program demo;\n\nbegin\n  x := 1\nend.\n".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    let lines: Vec<u32> = tokens.iter().map(|token| token.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 3, 4, 4, 4, 5, 5, 6]);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "x := @".to_string();
    let error = tokenize(source, Some("test.pas".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.line(), 1);
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "x := 'abc\n".to_string();
    let error = tokenize(source, Some("test.pas".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_tokenize_unterminated_comment() {
    let source = "begin\n{ never closed".to_string();
    let error = tokenize(source, Some("test.pas".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.line(), 2);
}

#[test]
fn test_tokenize_unterminated_paren_star_comment() {
    let source = "begin\n(* never closed".to_string();
    let error = tokenize(source, Some("test.pas".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.line(), 2);

    let source = "x (* one *) (* two".to_string();
    let error = tokenize(source, Some("test.pas".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_tokenize_paren_star_across_lines() {
    assert_eq!(
        kinds("(x)(* a\n b *)(y)"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_integer_overflow() {
    let source = "99999999999999999999".to_string();
    let error = tokenize(source, Some("test.pas".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_non_ascii_identifier() {
    let source = "café".to_string();
    let error = tokenize(source, Some("test.pas".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}
