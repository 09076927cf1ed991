//! Pair-operand arithmetic used by the menu front end.

use crate::calculator::{CalcError, Operator};

/// An operation offered by the console menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Human-readable name shown in the menu.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }

    pub fn symbol(self) -> char {
        Operator::from(self).symbol()
    }

    /// Compute `a OP b`. Dividing by zero is an error, never infinity.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        Operator::from(self).apply(a, b)
    }
}

impl From<Operation> for Operator {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Add => Operator::Add,
            Operation::Subtract => Operator::Subtract,
            Operation::Multiply => Operator::Multiply,
            Operation::Divide => Operator::Divide,
        }
    }
}
