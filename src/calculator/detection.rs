//! Input inspection for the calculator.
//!
//! The tokenizer skips anything it does not understand. These helpers let
//! callers find out what will be skipped before evaluating.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches runs of characters outside the expression alphabet.
    /// Allows: digits, whitespace, the four operators, parentheses, dots.
    static ref OUTSIDE_ALPHABET: Regex = Regex::new(r"[^0-9\s.+\-*/()]+").unwrap();
}

/// Characters in normalized `input` that the tokenizer will ignore, in order
/// of appearance.
pub fn ignored_characters(input: &str) -> Vec<char> {
    OUTSIDE_ALPHABET
        .find_iter(input)
        .flat_map(|m| m.as_str().chars())
        .collect()
}

/// Check if normalized input consists only of characters the tokenizer uses.
pub fn is_clean_expression(input: &str) -> bool {
    !OUTSIDE_ALPHABET.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_expressions_accepted() {
        assert!(is_clean_expression("2+2"));
        assert!(is_clean_expression("(2 + 3) * 4"));
        assert!(is_clean_expression("-1.5/100"));
        assert!(is_clean_expression(""));
    }

    #[test]
    fn test_ignored_characters_reported() {
        assert_eq!(ignored_characters("2+2"), Vec::<char>::new());
        assert_eq!(ignored_characters("1a+bc2"), vec!['a', 'b', 'c']);
        assert_eq!(ignored_characters("2^8"), vec!['^']);
    }

    #[test]
    fn test_keypad_glyphs_are_not_alphabet() {
        // Glyphs must be normalized away before tokenizing
        assert!(!is_clean_expression("2×3"));
        assert_eq!(ignored_characters("50%"), vec!['%']);
    }
}
