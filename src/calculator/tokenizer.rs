//! Lexical analysis of calculator input.
//!
//! Turns an ASCII expression into a flat, ordered list of [`Token`]s.
//! Keypad glyphs and `%` must already have been rewritten by
//! [`normalize`](super::normalize); anything outside the expression alphabet
//! is skipped without an error.

use super::error::CalcError;
use std::fmt;

/// One of the four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Binding strength. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// The ASCII symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Compute `a OP b`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An atomic lexical unit of an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl Token {
    /// Whether a `-` following this token is a sign rather than a subtraction.
    ///
    /// `None` stands for the start of the stream.
    fn precedes_operand(previous: Option<&Token>) -> bool {
        matches!(
            previous,
            None | Some(Token::Operator(_)) | Some(Token::OpenParen)
        )
    }
}

/// Split `input` into tokens, left to right.
///
/// A `-` at the start, or after an operator or `(`, is fused with the digits
/// that follow it into one negative number. Numbers take digits and at most
/// one `.`; a second decimal point truncates the number silently and starts
/// a new literal.
///
/// Fails with [`CalcError::InvalidNumber`] for a literal with no digits.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        let width = c.len_utf8();
        match c {
            '(' => {
                tokens.push(Token::OpenParen);
                rest = &rest[width..];
            }
            ')' => {
                tokens.push(Token::CloseParen);
                rest = &rest[width..];
            }
            '+' | '*' | '/' => {
                tokens.push(Token::Operator(Operator::try_from(c)?));
                rest = &rest[width..];
            }
            '-' if Token::precedes_operand(tokens.last()) => {
                let len = width + number_len(&rest[width..]);
                tokens.push(Token::Number(parse_literal(&rest[..len])?));
                rest = &rest[len..];
            }
            '-' => {
                tokens.push(Token::Operator(Operator::Subtract));
                rest = &rest[width..];
            }
            c if c.is_ascii_digit() || c == '.' => {
                let len = number_len(rest);
                tokens.push(Token::Number(parse_literal(&rest[..len])?));
                rest = &rest[len..];
            }
            // Whitespace and anything else outside the alphabet
            _ => rest = &rest[width..],
        }
    }

    Ok(tokens)
}

/// Byte length of the numeric prefix of `s`: digits and at most one `.`.
fn number_len(s: &str) -> usize {
    let mut seen_dot = false;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => return i,
        }
    }
    s.len()
}

fn parse_literal(literal: &str) -> Result<f64, CalcError> {
    literal
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(literal.to_string()))
}
