use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Result of {left} {op} {right} is not a finite number")]
    NonFiniteResult { left: f64, op: char, right: f64 },
}
