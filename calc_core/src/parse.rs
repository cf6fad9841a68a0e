//! # Input Parsing
//!
//! Turns raw form text into checked `f64` values. Every calculator input
//! passes through here (or through the `require_*` checks directly when the
//! caller already holds a number), so NaN never reaches the formulas.
//!
//! Digit-group separators (`,` and `_`) are accepted so that amounts can be
//! typed the way they are displayed, e.g. `5,00,000`.

use crate::errors::{CalcError, CalcResult};

/// Parse a form field into a finite number.
///
/// # Example
///
/// ```rust
/// use calc_core::parse::parse_number;
///
/// assert_eq!(parse_number("principal", " 5,00,000 ").unwrap(), 500000.0);
/// assert!(parse_number("principal", "five lakh").is_err());
/// ```
pub fn parse_number(field: &str, text: &str) -> CalcResult<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    if cleaned.is_empty() {
        return Err(CalcError::invalid_number(field, text));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| CalcError::invalid_number(field, text))?;

    require_finite(field, value)
}

/// Reject NaN and infinities.
pub fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_number(field, value.to_string()))
    }
}

/// Reject a computed value that overflowed, blaming `field`.
pub fn require_finite_result(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::result_overflow(field))
    }
}

/// Require a finite value strictly greater than zero.
pub fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::non_positive(field, value));
    }
    Ok(value)
}

/// Require a finite value that is zero or greater.
pub fn require_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::negative(field, value));
    }
    Ok(value)
}
