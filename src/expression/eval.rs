use log::debug;

use crate::expression::ast::{BinaryOp, Expression};
use crate::expression::errors::ExpressionError;

/// Apply one operator to two already evaluated operands
///
/// # Errors
///
/// Returns [`ExpressionError::DivisionByZero`] when the divisor is exactly
/// zero, and [`ExpressionError::NonFiniteResult`] when the result overflows.
pub fn apply(op: BinaryOp, left: f64, right: f64) -> Result<f64, ExpressionError> {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            if right == 0.0 {
                debug!("Division by zero attempted: {} / {}", left, right);
                return Err(ExpressionError::DivisionByZero);
            }
            left / right
        }
    };

    if !result.is_finite() {
        debug!("Non-finite result: {} {} {} = {}", left, op, right, result);
        return Err(ExpressionError::NonFiniteResult {
            left,
            op: op.symbol(),
            right,
        });
    }

    Ok(result)
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when any subtree divides by zero or produces a
    /// non-finite value. The first failure
    /// found in left-to-right order is returned.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => Self::evaluate_pair(BinaryOp::Add, l, r),
            Expression::Sub(l, r) => Self::evaluate_pair(BinaryOp::Sub, l, r),
            Expression::Mul(l, r) => Self::evaluate_pair(BinaryOp::Mul, l, r),
            Expression::Div(l, r) => Self::evaluate_pair(BinaryOp::Div, l, r),
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    fn evaluate_pair(
        op: BinaryOp,
        l: &Expression,
        r: &Expression,
    ) -> Result<f64, ExpressionError> {
        let left = l.evaluate()?;
        let right = r.evaluate()?;
        apply(op, left, right)
    }
}
