//! # keycalc
//!
//! A calculator with two front ends sharing one expression evaluator:
//! - a numbered console menu for pair-operand arithmetic
//! - a twenty-key keypad that builds up an expression and evaluates it on `=`
//!
//! The evaluator handles `+ - * /`, unary minus, `%` (read as `/100`) and
//! parentheses, with the usual precedence and left associativity:
//!
//! ```
//! use keycalc::calculator::{evaluate, format_result};
//!
//! assert_eq!(evaluate("2+3*4"), Ok(14.0));
//! assert_eq!(format_result(evaluate("4/2").unwrap()), "2");
//! ```

pub mod arithmetic;
pub mod calculator;
pub mod config;
pub mod console;
pub mod keypad;
