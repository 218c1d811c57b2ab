//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ExpectedTokens};
use crate::lexer::tokens::TokenKind;
use crate::Position;

fn at(offset: u32) -> Position {
    Position {
        offset,
        line: 1,
        column: offset + 1,
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, at(10));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert!(error.is_lexical());
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedString, at(42));

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().column, 43);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ExpectedTokens::from(TokenKind::Semicolon),
            found: "}".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert!(!error.is_lexical());
}

#[test]
fn test_expected_expression_error() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: "var".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert!(!error.is_lexical());
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "12x".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_expected_tokens_display_single() {
    let expected = ExpectedTokens::from(TokenKind::OpenParen);
    assert_eq!(expected.to_string(), "OpenParen");
}

#[test]
fn test_expected_tokens_display_set() {
    let expected = ExpectedTokens(vec![TokenKind::Comma, TokenKind::CloseParen]);
    assert_eq!(expected.to_string(), "one of Comma, CloseParen");
}

#[test]
fn test_unexpected_token_message_carries_expected_set() {
    let error = ErrorImpl::UnexpectedToken {
        expected: ExpectedTokens(vec![TokenKind::Comma, TokenKind::CloseParen]),
        found: ";".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "unexpected token: expected one of Comma, CloseParen, found \";\""
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ExpectedTokens::from(TokenKind::Semicolon),
            found: "}".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert!(suggestion.contains("Semicolon"));
        }
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
