//! Expression tree, evaluation and display

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{BinaryOp, Expression};
pub use errors::ExpressionError;
pub use eval::apply;
