//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Rewrite keypad glyphs and percent signs into plain ASCII
//! - Tokenize expressions, fusing unary minus into numbers
//! - Reduce tokens with a dual-stack operator-precedence evaluator
//! - Format results so they can be fed back in as input

mod detection;
mod error;
mod evaluation;
mod evaluator;
mod normalize;
mod tokenizer;

pub use detection::{ignored_characters, is_clean_expression};
pub use error::CalcError;
pub use evaluation::{CalcResult, INTEGER_TOLERANCE, evaluate, evaluate_expression, format_result};
pub use evaluator::reduce;
pub use normalize::{GLYPHS, normalize};
pub use tokenizer::{Operator, Token, tokenize};
