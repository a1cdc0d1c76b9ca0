use crate::parser::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKENS};

/// Configuration for expression evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Deepest parenthesis nesting accepted
    pub max_depth: usize,
    /// Most tokens accepted in one expression
    pub max_tokens: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
