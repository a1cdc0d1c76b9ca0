use thiserror::Error;

use crate::utils::UtilsError;

/// Errors that can occur while tokenizing or parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
    #[error("Unexpected '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        found: String,
        offset: usize,
        expected: &'static str,
    },
    #[error("Unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("Invalid number literal: {0}")]
    InvalidNumber(#[from] UtilsError),
    #[error("Parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("Expression has {count} tokens, limit is {limit}")]
    TooManyTokens { count: usize, limit: usize },
}
