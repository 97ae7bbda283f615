//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, string and boolean literals
//! - Punctuation
//! - Comments and whitespace
//! - Line tracking
//! - Error cases

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let function return import from if else").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Function);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::Import);
    assert_eq!(tokens[4].kind, TokenKind::From);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 100 1234567890").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "1234567890");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "world" "multiple words""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "multiple words");
}

#[test]
fn test_tokenize_string_no_escape_processing() {
    // Backslashes are ordinary characters; the literal run between the
    // quotes is kept verbatim.
    let tokens = tokenize(r#""a\nb""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\\nb");
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].value, "true");
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].value, "false");
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("= ( ) { } [ ] : ,").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::OpenParen);
    assert_eq!(tokens[2].kind, TokenKind::CloseParen);
    assert_eq!(tokens[3].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[4].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[5].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[6].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[7].kind, TokenKind::Colon);
    assert_eq!(tokens[8].kind, TokenKind::Comma);
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("let x = 5 // this is a comment\nlet y = 10").unwrap();

    // Comments should be skipped
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Let);
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[6].kind, TokenKind::Assignment);
    assert_eq!(tokens[7].value, "10");
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_tokenize_empty_input() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_tokenize_only_whitespace_and_comments() {
    let tokens = tokenize("  \n\t  // nothing here\n   ").unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_line_tracking() {
    let tokens = tokenize("let x = 1\nlet y = 2\n\nadd(x, y)").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[4].kind, TokenKind::Let);
    assert_eq!(tokens[4].line, 2);
    // The blank line counts once
    assert_eq!(tokens[8].value, "add");
    assert_eq!(tokens[8].line, 4);
}

#[test]
fn test_tokenize_token_carries_line_where_scan_began() {
    let tokens = tokenize("\n\n42").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].line, 3);
}

#[test]
fn test_tokenize_multiline_string_line_tracking() {
    let tokens = tokenize("\"first\nsecond\" x").unwrap();

    // The string keeps the line it opened on
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].line, 1);
    // and the counter catches up for what follows
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_tokenize_rule_priority_over_maximal_munch() {
    // Keyword rules sit ahead of the identifier rule, so a keyword prefix
    // wins even inside a longer word.
    let tokens = tokenize("important").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Import);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "ant");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("let x = @");

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_tokenize_unrecognised_character_line() {
    let result = tokenize("let x = 1\nlet y = #");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x = 42").unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "42");
}

#[test]
fn test_tokenize_function_declaration() {
    let tokens = tokenize("function add(a, b) { return a }").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "add");
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].value, "a");
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].value, "b");
    assert_eq!(tokens[6].kind, TokenKind::CloseParen);
    assert_eq!(tokens[7].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[8].kind, TokenKind::Return);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  let   x   =   42  ").unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[3].kind, TokenKind::Number);
}

#[test]
fn test_streaming_next_token() {
    let mut lexer = Lexer::new("let a");

    let first = lexer.next_token().unwrap().unwrap();
    assert_eq!(first.kind, TokenKind::Let);

    let second = lexer.next_token().unwrap().unwrap();
    assert_eq!(second.kind, TokenKind::Identifier);
    assert_eq!(second.value, "a");

    assert_eq!(lexer.next_token().unwrap(), None);
    // Still exhausted on the next pull
    assert_eq!(lexer.next_token().unwrap(), None);
}
