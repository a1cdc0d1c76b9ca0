use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Convert a run of ASCII digits into its numeric value
///
/// Digit runs of any length are accepted, including ones with leading zeros
/// (`"007"` is `7`), as long as the value fits in a finite `f64`.
///
/// # Errors
///
/// Returns an error if the literal is empty, contains anything other than
/// ASCII digits, or is too large for `f64`.
pub fn parse_literal(literal: &str) -> Result<f64, UtilsError> {
    debug!("Converting literal '{}'", literal);

    if literal.is_empty() {
        warn!("Literal is empty");
        return Err(UtilsError::EmptyLiteral);
    }

    if !literal.bytes().all(|b| b.is_ascii_digit()) {
        warn!("Literal contains non-digit characters: '{}'", literal);
        return Err(UtilsError::InvalidLiteral(literal.to_string()));
    }

    let result = literal
        .parse::<f64>()
        .map_err(|_| UtilsError::InvalidLiteral(literal.to_string()))?;
    if !result.is_finite() {
        warn!("Literal overflows f64: {} digits", literal.len());
        return Err(UtilsError::LiteralOverflow(literal.len()));
    }
    debug!("Converted '{}' to {}", literal, result);
    Ok(result)
}
