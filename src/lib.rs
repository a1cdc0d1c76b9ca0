//! Arithmetix - A library for evaluating arithmetic expressions
//!
//! Expressions use `+ - * /` over non-negative integer literals, with
//! parentheses for grouping. Multiplication and division bind tighter than
//! addition and subtraction, and operators of equal precedence fold left to
//! right. Every failure is reported as a [`CalcError`]; nothing is silently
//! replaced by zero.

pub mod evaluator;
pub mod expression;
pub mod parser;
pub mod utils;

// Re-export the main public API
pub use evaluator::{CalcError, Evaluator, EvaluatorConfig};
pub use expression::{BinaryOp, Expression, ExpressionError};
pub use parser::{ParseError, parse};
pub use utils::{UtilsError, is_valid_expression};

/// Evaluate an arithmetic expression string
///
/// This is a convenience function that evaluates with a default
/// [`Evaluator`]. Whitespace anywhere in the input is ignored.
///
/// # Arguments
///
/// * `expression` - Digits, `+ - * /` and parentheses
///
/// # Returns
///
/// * `Ok(f64)` - The value of the expression
/// * `Err(CalcError)` - If the expression is invalid, malformed, or divides by zero
///
/// # Errors
///
/// This function will return an error if:
/// * The parentheses are unbalanced or a disallowed character appears
/// * The expression is empty or not well formed (for example `1+` or `-1`)
/// * Any part of the expression divides by zero
///
/// # Examples
///
/// ```
/// use arithmetix::{CalcError, evaluate};
///
/// assert_eq!(evaluate("(1+2)*3/4"), Ok(2.25));
/// assert_eq!(evaluate("1+2*3"), Ok(7.0));
/// assert_eq!(evaluate("(1+2"), Err(CalcError::InvalidExpression));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    Evaluator::new().evaluate(expression)
}
