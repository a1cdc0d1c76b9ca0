use crate::evaluator::{CalcError, Evaluator, EvaluatorConfig};
use crate::expression::ExpressionError;
use crate::parser::ParseError;
use crate::utils::UtilsError;

fn eval(expression: &str) -> Result<f64, CalcError> {
    Evaluator::new().evaluate(expression)
}

fn assert_value(expression: &str, expected: f64) {
    let result = eval(expression);
    assert!(result.is_ok(), "{} failed: {:?}", expression, result);
    if let Ok(value) = result {
        assert!(
            (value - expected).abs() < 1e-9,
            "{} = {}, expected {}",
            expression,
            value,
            expected
        );
    }
}

#[test]
fn test_demonstration_expression() {
    assert_value("(1+2)*3/4", 2.25);
}

#[test]
fn test_multiplication_before_addition() {
    assert_value("1+2*3", 7.0);
    assert_value("2*3+1", 7.0);
    assert_value("8-6/2", 5.0);
}

#[test]
fn test_left_to_right_within_precedence() {
    assert_value("9-3-2", 4.0);
    assert_value("8/4/2", 1.0);
    assert_value("2/4*8", 4.0);
    assert_value("1-2+3", 2.0);
}

#[test]
fn test_nested_parentheses() {
    assert_value("((1+2)*(3+4))", 21.0);
    assert_value("9-(3-(2-1))", 7.0);
    assert_value("(((5)))", 5.0);
}

#[test]
fn test_multi_digit_operands() {
    assert_value("12+30", 42.0);
    assert_value("100/8", 12.5);
}

#[test]
fn test_whitespace_is_ignored() {
    assert_value(" 1 + 2 ", 3.0);
    assert_value("( 1 + 2 ) * 3 / 4", 2.25);
    assert_value("1 2 + 3", 15.0);
}

#[test]
fn test_idempotent_on_literals() {
    assert_value("7", 7.0);

    let first = eval("1+2*3");
    assert!(first.is_ok());
    if let Ok(value) = first {
        assert_value(&value.to_string(), value);
    }
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(eval("(1+2"), Err(CalcError::InvalidExpression));
    assert_eq!(eval("1+2)"), Err(CalcError::InvalidExpression));
}

#[test]
fn test_illegal_characters() {
    assert_eq!(eval("1+a"), Err(CalcError::InvalidExpression));
    assert_eq!(eval("1.5+2"), Err(CalcError::InvalidExpression));
    assert_eq!(eval("2^3"), Err(CalcError::InvalidExpression));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        eval("1/0"),
        Err(CalcError::Evaluation(ExpressionError::DivisionByZero))
    );
    assert_eq!(
        eval("4/(2-2)"),
        Err(CalcError::Evaluation(ExpressionError::DivisionByZero))
    );
}

#[test]
fn test_failure_inside_parentheses_propagates() {
    assert_eq!(
        eval("(1/0)+1"),
        Err(CalcError::Evaluation(ExpressionError::DivisionByZero))
    );
    assert!(matches!(
        eval("(1+)*2"),
        Err(CalcError::Parse(ParseError::UnexpectedToken { .. }))
    ));
}

#[test]
fn test_malformed_but_valid_characters() {
    assert_eq!(eval(""), Err(CalcError::Parse(ParseError::EmptyExpression)));
    assert!(matches!(eval("1+"), Err(CalcError::Parse(ParseError::UnexpectedEnd { .. }))));
    assert!(matches!(eval(")1("), Err(CalcError::Parse(_))));
    assert!(matches!(eval("-1"), Err(CalcError::Parse(_))));
    assert!(matches!(eval("1**2"), Err(CalcError::Parse(_))));
}

#[test]
fn test_configured_nesting_limit() {
    let evaluator = Evaluator::with_config(EvaluatorConfig {
        max_depth: 1,
        ..EvaluatorConfig::default()
    });
    assert_eq!(evaluator.config().max_depth, 1);
    assert_eq!(evaluator.evaluate("(1+2)*3"), Ok(9.0));
    assert_eq!(
        evaluator.evaluate("((1+2))*3"),
        Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 1 }))
    );
}

#[test]
fn test_tiny_nonzero_divisor_is_not_zero() {
    let result = eval("1/(1/100000000000000000)");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(((value - 1e17) / 1e17).abs() < 1e-9);
    }
    assert_value("(1/100000000000000000)*100000000000000000", 1.0);
}

#[test]
fn test_oversized_literal_is_rejected() {
    let huge = "9".repeat(400);
    assert_eq!(
        eval(&huge),
        Err(CalcError::Parse(ParseError::InvalidNumber(
            UtilsError::LiteralOverflow(400)
        )))
    );
    assert!(matches!(
        eval(&format!("{}-{}", huge, huge)),
        Err(CalcError::Parse(ParseError::InvalidNumber(_)))
    ));
}

#[test]
fn test_overflowing_result_is_rejected() {
    let big = format!("1{}", "0".repeat(300));
    assert!(matches!(
        eval(&format!("{}*{}", big, big)),
        Err(CalcError::Evaluation(ExpressionError::NonFiniteResult { op: '*', .. }))
    ));
    assert!(matches!(
        eval(&format!("{}/(1/{})", big, big)),
        Err(CalcError::Evaluation(ExpressionError::NonFiniteResult { op: '/', .. }))
    ));
}

#[test]
fn test_evaluate_tree_matches_evaluate() {
    let evaluator = Evaluator::new();
    let tree = evaluator.parse("(1+2)*3/4");
    assert!(tree.is_ok());
    if let Ok(tree) = tree {
        assert_eq!(evaluator.evaluate_tree(&tree), Ok(2.25));
    }

    let tree = evaluator.parse("4/(2-2)");
    assert!(tree.is_ok());
    if let Ok(tree) = tree {
        assert_eq!(
            evaluator.evaluate_tree(&tree),
            Err(CalcError::Evaluation(ExpressionError::DivisionByZero))
        );
    }
}

#[test]
fn test_parse_returns_tree() {
    let result = Evaluator::new().parse(" (1 + 2) * 3 ");
    assert!(result.is_ok());
    if let Ok(tree) = result {
        assert_eq!(tree.to_string(), "(1 + 2) * 3");
    }
}

#[test]
fn test_batch_preserves_order() {
    let expressions = ["1+1", "1/0", "2*3", "(1", "10-4"];
    let results = Evaluator::new().evaluate_batch(&expressions);
    assert_eq!(results.len(), 5);
    assert_eq!(results[0], Ok(2.0));
    assert_eq!(
        results[1],
        Err(CalcError::Evaluation(ExpressionError::DivisionByZero))
    );
    assert_eq!(results[2], Ok(6.0));
    assert_eq!(results[3], Err(CalcError::InvalidExpression));
    assert_eq!(results[4], Ok(6.0));
}

#[test]
fn test_error_messages() {
    assert_eq!(CalcError::InvalidExpression.to_string(), "Invalid expression");
    assert_eq!(
        CalcError::from(ExpressionError::DivisionByZero).to_string(),
        "Evaluation error: Division by zero"
    );
}
