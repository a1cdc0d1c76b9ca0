use thiserror::Error;

use crate::expression::ExpressionError;
use crate::parser::ParseError;

/// Errors that can occur while evaluating an expression string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] ExpressionError),
}
