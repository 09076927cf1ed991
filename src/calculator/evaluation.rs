//! Expression evaluation entry points and result formatting.
//!
//! Normalizes raw front-end input, tokenizes it, reduces the tokens and
//! formats results so they can be placed back into an input buffer.

use super::detection::ignored_characters;
use super::error::CalcError;
use super::evaluator::reduce;
use super::normalize::normalize;
use super::tokenizer::tokenize;
use tracing::{debug, warn};

/// Results closer than this to an integer are shown without decimals.
pub const INTEGER_TOLERANCE: f64 = 1e-12;

/// Result of evaluating a calculator expression, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display and for re-entry as an expression.
        display_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The original expression.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the numeric value (only for successful results).
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate an expression as typed on either front end.
///
/// Keypad glyphs and `%` are rewritten first (see [`normalize`]).
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    let normalized = normalize(expression);

    let ignored = ignored_characters(&normalized);
    if !ignored.is_empty() {
        warn!(?ignored, "skipping characters outside the expression alphabet");
    }

    let tokens = tokenize(&normalized)?;
    debug!(?tokens, "tokenized");

    let value = reduce(tokens)?;
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }

    debug!(expression, value, "evaluated");
    Ok(value)
}

/// Evaluate an expression and package the outcome for display.
pub fn evaluate_expression(input: &str) -> CalcResult {
    let expression = input.trim().to_string();

    match evaluate(&expression) {
        Ok(value) => CalcResult::Success {
            display_result: format_result(value),
            expression,
            value,
        },
        Err(e) => CalcResult::Error {
            expression,
            message: e.to_string(),
        },
    }
}

/// Format a result so it reads naturally and tokenizes back to the same value.
///
/// Near-integers lose their fractional part (`2`, not `2.0`); anything else
/// uses the shortest decimal representation that round-trips.
pub fn format_result(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        // Adding zero turns -0 into 0
        format!("{:.0}", rounded + 0.0)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        let result = evaluate_expression("2 + 2");
        assert!(result.is_success());
        assert_eq!(result.display(), "4");
        assert_eq!(result.value(), Some(4.0));
        assert_eq!(result.expression(), "2 + 2");
    }

    #[test]
    fn test_percent() {
        assert_eq!(evaluate("50%"), Ok(0.5));
        let value = evaluate("200+10%").unwrap();
        assert!((value - 200.1).abs() < 1e-9);
    }

    #[test]
    fn test_keypad_glyphs() {
        assert_eq!(evaluate("6×7"), Ok(42.0));
        assert_eq!(evaluate("9÷3−1"), Ok(2.0));
    }

    #[test]
    fn test_division_by_zero() {
        let result = evaluate_expression("5/0");
        assert!(!result.is_success());
        assert_eq!(result.display(), "division by zero is not allowed");
        assert_eq!(result.value(), None);
    }

    #[test]
    fn test_overflow_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(evaluate(&huge), Err(CalcError::NonFinite));
        assert_eq!(
            evaluate(&format!("{huge}-{huge}")),
            Err(CalcError::NonFinite)
        );
    }

    #[test]
    fn test_integer_formatting() {
        assert_eq!(evaluate_expression("4/2").display(), "2");
        assert_eq!(format_result(-3.0), "-3");
        assert_eq!(format_result(1e20), "100000000000000000000");
        assert_eq!(format_result(2.0000000000001 - 1e-13), "2");
    }

    #[test]
    fn test_negative_zero_formatting() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(evaluate_expression("0*-1").display(), "0");
    }

    #[test]
    fn test_decimal_formatting() {
        assert_eq!(format_result(3.5), "3.5");
        assert_eq!(format_result(-0.25), "-0.25");
        assert_eq!(format_result(0.0000001), "0.0000001");
    }

    #[test]
    fn test_round_trip() {
        for input in ["7/2", "1/3", "-10/4", "0.1+0.2", "2/3*-1", "1/7"] {
            let first = evaluate(input).unwrap();
            let again = evaluate(&format_result(first)).unwrap();
            assert_eq!(again, first, "{input}");
        }
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(evaluate(""), Ok(0.0));
        assert_eq!(evaluate_expression("   ").display(), "0");
    }
}
