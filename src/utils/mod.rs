//! Input normalization, validation and literal conversion

mod errors;
mod literal;
mod validation;

pub use errors::UtilsError;
pub use literal::parse_literal;
pub use validation::{ALLOWED_OPERATORS, is_valid_expression, strip_whitespace};
