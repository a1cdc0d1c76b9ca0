use log::{debug, warn};

/// Operator and grouping symbols accepted alongside ASCII digits
pub const ALLOWED_OPERATORS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

/// Remove every whitespace character from the input
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check that a whitespace-free expression has balanced parenthesis counts
/// and uses only digits and `+ - * / ( )`.
///
/// Only counts are compared, so `")("` passes here and is rejected later by
/// the parser.
pub fn is_valid_expression(expression: &str) -> bool {
    debug!("Validating expression: '{}'", expression);

    let open = expression.matches('(').count();
    let close = expression.matches(')').count();
    if open != close {
        warn!(
            "Unbalanced parentheses in '{}': {} open, {} close",
            expression, open, close
        );
        return false;
    }

    if let Some(bad) = expression
        .chars()
        .find(|c| !(c.is_ascii_digit() || ALLOWED_OPERATORS.contains(c)))
    {
        warn!("Disallowed character {:?} in '{}'", bad, expression);
        return false;
    }

    debug!("Expression validation successful");
    true
}
