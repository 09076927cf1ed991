//! Errors produced while evaluating an expression.

use thiserror::Error;

/// A structured evaluation failure.
///
/// Every variant is recoverable: front ends report it and carry on.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// An opening or closing parenthesis has no partner.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// Too few operands for an operator, or operands left over after reduction.
    #[error("invalid expression")]
    InvalidExpression,

    /// The right-hand side of a division was zero.
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// An operator outside `+ - * /` reached the evaluator.
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),

    /// A numeric literal with no digits, such as a lone `.` or `-`.
    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    /// The result overflowed to infinity.
    #[error("result is not a finite number")]
    NonFinite,
}
