//! Operator-precedence reduction of a token stream.

use super::error::CalcError;
use super::tokenizer::{Operator, Token};
use tracing::trace;

/// An entry on the operator stack: a deferred operator or an unclosed `(`.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    Operator(Operator),
    OpenParen,
}

/// Working state of one reduction. Each call to [`reduce`] gets its own.
#[derive(Debug, Default)]
struct Stacks {
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

impl Stacks {
    /// Pop `b` then `a`, push `a OP b`.
    fn apply(&mut self, operator: Operator) -> Result<(), CalcError> {
        let b = self.operands.pop().ok_or(CalcError::InvalidExpression)?;
        let a = self.operands.pop().ok_or(CalcError::InvalidExpression)?;
        let value = operator.apply(a, b)?;
        trace!(%a, %operator, %b, %value, "reduced");
        self.operands.push(value);
        Ok(())
    }

    /// Apply stacked operators until the matching `(` is found and dropped.
    fn close_paren(&mut self) -> Result<(), CalcError> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(operator)) => self.apply(operator)?,
                Some(Pending::OpenParen) => return Ok(()),
                None => return Err(CalcError::MismatchedParentheses),
            }
        }
    }

    /// Apply stacked operators that bind at least as tightly, then stack `incoming`.
    fn push_operator(&mut self, incoming: Operator) -> Result<(), CalcError> {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence() < incoming.precedence() {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }
        self.operators.push(Pending::Operator(incoming));
        Ok(())
    }

    fn finish(mut self) -> Result<f64, CalcError> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(operator) => self.apply(operator)?,
                Pending::OpenParen => return Err(CalcError::MismatchedParentheses),
            }
        }

        match self.operands.as_slice() {
            [] => Ok(0.0),
            [value] => Ok(*value),
            _ => Err(CalcError::InvalidExpression),
        }
    }
}

/// Reduce `tokens` to a single value.
///
/// Operators of equal precedence associate to the left. An empty stream
/// yields `0`.
pub fn reduce<I>(tokens: I) -> Result<f64, CalcError>
where
    I: IntoIterator<Item = Token>,
{
    let mut stacks = Stacks::default();

    for token in tokens {
        match token {
            Token::Number(value) => stacks.operands.push(value),
            Token::OpenParen => stacks.operators.push(Pending::OpenParen),
            Token::CloseParen => stacks.close_paren()?,
            Token::Operator(operator) => stacks.push_operator(operator)?,
        }
    }

    stacks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::tokenize;

    fn eval(input: &str) -> Result<f64, CalcError> {
        reduce(tokenize(input)?)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), Ok(14.0));
        assert_eq!(eval("2*3+4"), Ok(10.0));
        assert_eq!(eval("10-4/2"), Ok(8.0));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10-4-3"), Ok(3.0));
        assert_eq!(eval("64/4/2"), Ok(8.0));
        assert_eq!(eval("8/2*4"), Ok(16.0));
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(eval("(2+3)*4"), Ok(20.0));
        assert_eq!(eval("2*(3+(4-1))"), Ok(12.0));
        assert_eq!(eval("((7))"), Ok(7.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval("-5+3"), Ok(-2.0));
        assert_eq!(eval("3*-2"), Ok(-6.0));
        assert_eq!(eval("(-2)*(-2)"), Ok(4.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("5/0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval("1/(2-2)"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_mismatched_parentheses() {
        assert_eq!(eval("(2+3"), Err(CalcError::MismatchedParentheses));
        assert_eq!(eval("2+3)"), Err(CalcError::MismatchedParentheses));
        assert_eq!(eval(")("), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn test_empty_expression_is_zero() {
        assert_eq!(eval(""), Ok(0.0));
        assert_eq!(eval("()"), Ok(0.0));
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(eval("5+"), Err(CalcError::InvalidExpression));
        assert_eq!(eval("*5"), Err(CalcError::InvalidExpression));
        assert_eq!(eval("+"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_leftover_operands() {
        assert_eq!(eval("1.2.3"), Err(CalcError::InvalidExpression));
        assert_eq!(eval("(1)(2)"), Err(CalcError::InvalidExpression));
    }
}
