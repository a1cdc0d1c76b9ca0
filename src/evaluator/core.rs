use log::{debug, info, warn};
use rayon::prelude::*;

use crate::evaluator::config::EvaluatorConfig;
use crate::evaluator::errors::CalcError;
use crate::expression::Expression;
use crate::parser::Parser;
use crate::utils::{is_valid_expression, strip_whitespace};

/// Evaluates arithmetic expression strings
///
/// Holds only configuration, so one evaluator can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the evaluator configuration
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Strip whitespace, validate and parse `expression` into a tree
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidExpression`] when parentheses are
    /// unbalanced or a character outside `0-9+-*/()` appears, and
    /// [`CalcError::Parse`] when the expression is not well formed.
    pub fn parse(&self, expression: &str) -> Result<Expression, CalcError> {
        let normalized = strip_whitespace(expression);
        debug!("Normalized '{}' to '{}'", expression, normalized);

        if !is_valid_expression(&normalized) {
            warn!("Rejecting invalid expression '{}'", expression);
            return Err(CalcError::InvalidExpression);
        }

        let tree = Parser::new(&normalized)?
            .with_max_depth(self.config.max_depth)
            .with_max_tokens(self.config.max_tokens)
            .parse()?;
        Ok(tree)
    }

    /// Evaluate `expression` to a number
    ///
    /// # Errors
    ///
    /// Returns everything [`Evaluator::parse`] does, plus
    /// [`CalcError::Evaluation`] when any part of the expression, including
    /// a parenthesised group, divides by zero or overflows.
    pub fn evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        let tree = self.parse(expression)?;
        let value = self.evaluate_tree(&tree)?;
        info!("'{}' evaluated to {}", expression, value);
        Ok(value)
    }

    /// Evaluate a tree obtained from [`Evaluator::parse`]
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Evaluation`] on division by zero or a non-finite
    /// intermediate value.
    pub fn evaluate_tree(&self, tree: &Expression) -> Result<f64, CalcError> {
        Ok(tree.evaluate()?)
    }

    /// Evaluate independent expressions in parallel, keeping input order
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64, CalcError>>
    where
        S: AsRef<str> + Sync,
    {
        info!("Evaluating batch of {} expressions", expressions.len());
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}
