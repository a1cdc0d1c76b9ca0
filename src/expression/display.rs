use std::fmt;

use crate::expression::ast::{BinaryOp, Expression};

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders the tree in infix form with the minimal parentheses needed to
/// parse back into the same tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => BinaryOp::Add.precedence(),
                Expression::Mul(_, _) | Expression::Div(_, _) => BinaryOp::Mul.precedence(),
                Expression::Number(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        // Operators fold left, so a right operand at equal precedence keeps
        // its parentheses: `8 - (4 - 2)`.
        fn write_binary(
            f: &mut fmt::Formatter,
            op: BinaryOp,
            l: &Expression,
            r: &Expression,
        ) -> fmt::Result {
            let p = op.precedence();
            write_with_parens(f, l, precedence(l) < p)?;
            write!(f, " {} ", op)?;
            write_with_parens(f, r, precedence(r) <= p)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, BinaryOp::Add, l, r),
                Expression::Sub(l, r) => write_binary(f, BinaryOp::Sub, l, r),
                Expression::Mul(l, r) => write_binary(f, BinaryOp::Mul, l, r),
                Expression::Div(l, r) => write_binary(f, BinaryOp::Div, l, r),
            }
        }

        fmt_expression(f, self)
    }
}
