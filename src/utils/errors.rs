use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Literal cannot be empty")]
    EmptyLiteral,
    #[error("Literal must contain only digits: {0}")]
    InvalidLiteral(String),
    #[error("Literal with {0} digits is too large")]
    LiteralOverflow(usize),
}
